use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ReceiptError;
use super::fence::strip_code_fence;

/// Structured receipt produced by the vision model.
///
/// Expected shape:
/// `{ merchant, date, items: [{ name, quantity, price }], subtotal, tax, tip, total }`.
/// The document is kept exactly as the model returned it; fields are neither
/// validated nor normalized, so callers receive the model output verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptExtraction(Value);

impl ReceiptExtraction {
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// Strips any markdown code fence around the model text and parses what remains.
    pub fn from_model_output(content: &str) -> Result<Self, ReceiptError> {
        let clean = strip_code_fence(content);
        serde_json::from_str(&clean)
            .map(Self)
            .map_err(|e| ReceiptError::malformed_response(e.to_string()))
    }

    pub fn merchant(&self) -> Option<&str> {
        self.0.get("merchant").and_then(Value::as_str)
    }

    pub fn item_count(&self) -> usize {
        self.0
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }

    pub fn total(&self) -> Option<f64> {
        self.0.get("total").and_then(Value::as_f64)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }
}
