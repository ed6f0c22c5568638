use poem::http::StatusCode;
use poem::web::Json;

use business::domain::receipt::errors::ReceiptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReceiptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ReceiptError::InvalidMethod => (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            ReceiptError::MissingImage => (StatusCode::BAD_REQUEST, "No image provided"),
            ReceiptError::ConfigMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "OpenAI API key not configured",
            ),
            ReceiptError::DownstreamFailure(code) => (
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY),
                "Failed to scan receipt",
            ),
            ReceiptError::MalformedRequest(_)
            | ReceiptError::Transport(_)
            | ReceiptError::MalformedResponse(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
