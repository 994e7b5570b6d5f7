use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_input, Validate};
use serde::{Deserialize, Serialize};

/// One form submission. Lives only until its request completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryRequest {
    #[serde(default)]
    pub plant: String,
    #[serde(default)]
    pub issue: String,
}

impl AdvisoryRequest {
    pub fn new(plant: impl Into<String>, issue: impl Into<String>) -> Self {
        Self {
            plant: plant.into(),
            issue: issue.into(),
        }
    }
}

impl Validate for AdvisoryRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_input("plant", &self.plant)?;
        validate_non_empty_input("issue", &self.issue)?;
        Ok(())
    }
}

/// Markdown advisory text exactly as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of a chat-completions call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}
