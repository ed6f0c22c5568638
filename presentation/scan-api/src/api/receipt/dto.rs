use serde_json::Value;

use business::domain::receipt::errors::ReceiptError;

/// Body of a scan request.
///
/// `image` is a data URI or a remote URL. `None` means no usable image was
/// sent; the scan use case rejects it as "no image".
#[derive(Debug, Clone, PartialEq)]
pub struct ScanRequest {
    pub image: Option<String>,
}

impl ScanRequest {
    /// Reads the `image` field of a JSON body.
    ///
    /// A body that is not JSON, or is JSON `null`, is malformed. Any other body
    /// without a truthy `image` (missing, `null`, `false`, `0`, `""`, or a body
    /// that is not an object) carries no image. A truthy non-string `image` is
    /// malformed.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ReceiptError> {
        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| ReceiptError::malformed_request(e.to_string()))?;

        if body.is_null() {
            return Err(ReceiptError::malformed_request("request body is null"));
        }

        match body.get("image") {
            None => Ok(Self { image: None }),
            Some(value) if is_falsy(value) => Ok(Self { image: None }),
            Some(Value::String(image)) => Ok(Self {
                image: Some(image.clone()),
            }),
            Some(other) => Err(ReceiptError::malformed_request(format!(
                "image must be a string, got {}",
                other
            ))),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
