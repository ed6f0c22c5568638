use std::sync::Arc;

use logger::TracingLogger;

use openai::client::OpenAIClient;
use openai::receipt_extractor::ReceiptExtractorOpenAI;

use business::application::receipt::scan::ScanReceiptUseCaseImpl;
use business::domain::receipt::use_cases::scan::ScanReceiptUseCase;

use crate::config::openai_config::OpenAIConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub scan_receipt_use_case: Arc<dyn ScanReceiptUseCase>,
}

impl DependencyContainer {
    pub fn new(openai_config: OpenAIConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let openai_client = OpenAIClient::new(openai_config.settings);
        let receipt_extractor = Arc::new(ReceiptExtractorOpenAI::new(openai_client));

        // Receipt use cases
        let scan_receipt_use_case = Arc::new(ScanReceiptUseCaseImpl {
            extractor: receipt_extractor,
            logger,
        });

        Self {
            health_api,
            scan_receipt_use_case,
        }
    }
}
