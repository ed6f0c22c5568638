/// Failure kinds of a receipt scan.
/// Display strings are code-style identifiers; the attached detail is for logs only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.invalid_method")]
    InvalidMethod,
    #[error("receipt.missing_image")]
    MissingImage,
    #[error("receipt.malformed_request: {0}")]
    MalformedRequest(String),
    #[error("receipt.config_missing")]
    ConfigMissing,
    #[error("receipt.downstream_failure: status {0}")]
    DownstreamFailure(u16),
    #[error("receipt.transport: {0}")]
    Transport(String),
    #[error("receipt.malformed_response: {0}")]
    MalformedResponse(String),
}

impl ReceiptError {
    pub fn malformed_request(detail: impl Into<String>) -> Self {
        ReceiptError::MalformedRequest(detail.into())
    }
    pub fn transport(detail: impl Into<String>) -> Self {
        ReceiptError::Transport(detail.into())
    }
    pub fn malformed_response(detail: impl Into<String>) -> Self {
        ReceiptError::MalformedResponse(detail.into())
    }
}
