use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::ReceiptExtraction;
use business::domain::receipt::services::ReceiptExtractorService;

use crate::client::OpenAIClient;

const RECEIPT_PROMPT: &str = r#"You are a receipt parser. Extract merchant name, date, all items with name/quantity/price, subtotal, tax, tip, total. Respond ONLY with valid JSON: {"merchant": "string", "date": "string", "items": [{"name": "string", "quantity": number, "price": number}], "subtotal": number, "tax": number, "tip": number, "total": number}"#;

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

pub struct ReceiptExtractorOpenAI {
    client: OpenAIClient,
}

impl ReceiptExtractorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn request_body(&self, image: &str) -> serde_json::Value {
        json!({
            "model": self.client.settings.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {"type": "text", "text": RECEIPT_PROMPT},
                        {"type": "image_url", "image_url": {"url": image}},
                    ],
                },
            ],
            "max_tokens": self.client.settings.max_tokens,
        })
    }

    fn completion_text(data: ChatCompletionResponse) -> Result<String, ReceiptError> {
        data.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ReceiptError::malformed_response("completion has no message content"))
    }
}

#[async_trait]
impl ReceiptExtractorService for ReceiptExtractorOpenAI {
    async fn extract(&self, image: &str) -> Result<ReceiptExtraction, ReceiptError> {
        let api_key = self.client.api_key().ok_or(ReceiptError::ConfigMissing)?;

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header(api_key))
            .json(&self.request_body(image))
            .send()
            .await
            .map_err(|e| ReceiptError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.map_err(|e| {
                tracing::error!("OpenAI API error ({}), body unreadable: {}", status, e);
                ReceiptError::transport(e.to_string())
            })?;
            tracing::error!("OpenAI API error ({}): {}", status, error);
            return Err(ReceiptError::DownstreamFailure(status.as_u16()));
        }

        let data: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ReceiptError::malformed_response(e.to_string()))?;

        let content = Self::completion_text(data)?;
        ReceiptExtraction::from_model_output(&content)
    }
}
