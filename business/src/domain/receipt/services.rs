use async_trait::async_trait;

use super::errors::ReceiptError;
use super::model::ReceiptExtraction;

/// Service port for turning a receipt image into a structured extraction.
///
/// `image` is a data URI or a remote URL, forwarded to the provider as-is.
#[async_trait]
pub trait ReceiptExtractorService: Send + Sync {
    async fn extract(&self, image: &str) -> Result<ReceiptExtraction, ReceiptError>;
}
