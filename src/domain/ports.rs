use crate::domain::model::ChatCompletionRequest;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn referer(&self) -> &str;
    fn title(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Sends one chat-completions request and hands back the decoded JSON body.
///
/// Implementations turn non-2xx statuses, network failures, timeouts and
/// non-JSON bodies into errors. Picking fields out of the body is left to
/// the caller.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn send(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value>;
}
