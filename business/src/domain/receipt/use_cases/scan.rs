use async_trait::async_trait;

use crate::domain::receipt::errors::ReceiptError;
use crate::domain::receipt::model::ReceiptExtraction;

pub struct ScanReceiptParams {
    pub image: String,
}

#[async_trait]
pub trait ScanReceiptUseCase: Send + Sync {
    async fn execute(&self, params: ScanReceiptParams) -> Result<ReceiptExtraction, ReceiptError>;
}
