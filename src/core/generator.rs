use crate::core::prompt::{build_prompt, SYSTEM_PERSONA};
use crate::domain::model::{ChatCompletionRequest, ChatMessage};
use crate::domain::ports::CompletionTransport;
use crate::utils::error::{AdvisoryError, Result};
use serde_json::Value;

pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;
pub const MAX_TOKENS: u32 = 900;

pub struct AdvisoryGenerator<T: CompletionTransport> {
    transport: T,
    model: String,
}

impl<T: CompletionTransport> AdvisoryGenerator<T> {
    pub fn new(transport: T, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_request(&self, plant: &str, issue: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PERSONA),
                ChatMessage::user(build_prompt(plant, issue)),
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Produces the advisory text for one crop and problem.
    ///
    /// Both inputs are expected to be non-empty already. The returned text is
    /// the first choice's message content, untouched.
    pub async fn generate(&self, plant: &str, issue: &str) -> Result<String> {
        let request = self.build_request(plant, issue);

        tracing::debug!(
            model = %self.model,
            prompt_chars = request.messages[1].content.len(),
            "Requesting advisory completion"
        );

        let body = self.transport.send(&request).await?;
        extract_content(&body)
    }
}

/// Pulls `choices[0].message.content` out of a chat-completions body.
pub fn extract_content(body: &Value) -> Result<String> {
    if let Some(content) = body.pointer("/choices/0/message/content").and_then(Value::as_str) {
        return Ok(content.to_string());
    }

    let message = match body.pointer("/error/message").and_then(Value::as_str) {
        Some(remote) => format!("no completion choices returned ({})", remote),
        None if body.get("choices").is_none() => "response has no `choices` field".to_string(),
        None => "response has no text at `choices[0].message.content`".to_string(),
    };

    Err(AdvisoryError::MalformedResponseError { message })
}
