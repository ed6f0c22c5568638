use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ReceiptExtraction;
use crate::domain::receipt::services::ReceiptExtractorService;
use crate::domain::receipt::use_cases::scan::{ScanReceiptParams, ScanReceiptUseCase};

pub struct ScanReceiptUseCaseImpl {
    pub extractor: Arc<dyn ReceiptExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanReceiptUseCase for ScanReceiptUseCaseImpl {
    async fn execute(&self, params: ScanReceiptParams) -> Result<ReceiptExtraction, ReceiptError> {
        if params.image.is_empty() {
            self.logger.warn("Receipt scan rejected: no image provided");
            return Err(ReceiptError::MissingImage);
        }

        self.logger.info("Scanning receipt image");
        self.logger.debug(&format!(
            "Receipt image reference: {}",
            describe_image(&params.image)
        ));

        let receipt = match self.extractor.extract(&params.image).await {
            Ok(receipt) => receipt,
            Err(err) => {
                self.logger.error(&format!("Receipt scan failed: {}", err));
                return Err(err);
            }
        };

        self.logger.info(&format!(
            "Receipt scanned: merchant {}, {} items",
            receipt.merchant().unwrap_or("unknown"),
            receipt.item_count()
        ));

        Ok(receipt)
    }
}

/// Summarizes an image reference for logs without echoing base64 payloads.
fn describe_image(image: &str) -> String {
    match image.split_once(',') {
        Some((header, payload)) if header.starts_with("data:") => {
            format!("{} ({} bytes of data)", header, payload.len())
        }
        _ => image.to_string(),
    }
}
