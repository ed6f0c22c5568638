use std::sync::Arc;

use poem::http::{Method, StatusCode, header};
use poem::web::Data;
use poem::{Body, IntoResponse, Response, handler};

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::ReceiptExtraction;
use business::domain::receipt::use_cases::scan::{ScanReceiptParams, ScanReceiptUseCase};

use crate::api::error::IntoErrorResponse;
use crate::api::receipt::dto::ScanRequest;

/// Scan a receipt image
///
/// Accepts `POST` with `{ "image": "<data URI or URL>" }` and answers with the
/// receipt extracted by the vision model. Every other method gets 405.
#[handler]
pub async fn scan_receipt(
    method: Method,
    use_case: Data<&Arc<dyn ScanReceiptUseCase>>,
    body: Body,
) -> Response {
    match scan(method, use_case.0.as_ref(), body).await {
        Ok(receipt) => receipt_response(receipt),
        Err(err) => err.into_error_response().into_response(),
    }
}

async fn scan(
    method: Method,
    use_case: &dyn ScanReceiptUseCase,
    body: Body,
) -> Result<ReceiptExtraction, ReceiptError> {
    if method != Method::POST {
        tracing::warn!("Rejected {} request to receipt scan", method);
        return Err(ReceiptError::InvalidMethod);
    }

    let request = parse_request(body).await.inspect_err(|err| {
        tracing::error!("Receipt scan request rejected: {}", err);
    })?;

    use_case
        .execute(ScanReceiptParams {
            image: request.image.unwrap_or_default(),
        })
        .await
}

async fn parse_request(body: Body) -> Result<ScanRequest, ReceiptError> {
    let bytes = body
        .into_vec()
        .await
        .map_err(|e| ReceiptError::malformed_request(e.to_string()))?;
    ScanRequest::from_json(&bytes)
}

fn receipt_response(receipt: ReceiptExtraction) -> Response {
    match serde_json::to_vec(&receipt) {
        Ok(bytes) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
            .body(bytes),
        Err(e) => ReceiptError::malformed_response(e.to_string())
            .into_error_response()
            .into_response(),
    }
}
