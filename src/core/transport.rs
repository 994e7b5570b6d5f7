use crate::core::ConfigProvider;
use crate::domain::model::ChatCompletionRequest;
use crate::domain::ports::CompletionTransport;
use crate::utils::error::{AdvisoryError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

// OpenRouter identifies calling apps by these two headers.
const REFERER_HEADER: &str = "HTTP-Referer";
const TITLE_HEADER: &str = "X-Title";

/// `CompletionTransport` backed by a single `reqwest` client.
///
/// The client carries the configured timeout for the whole exchange, so an
/// expired wait surfaces as `TimeoutError` instead of hanging the form.
pub struct OpenRouterTransport<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> OpenRouterTransport<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(REFERER_HEADER, header_value("referer", self.config.referer())?);
        headers.insert(TITLE_HEADER, header_value("title", self.config.title())?);
        Ok(headers)
    }

    fn map_send_error(&self, err: reqwest::Error) -> AdvisoryError {
        if err.is_timeout() {
            AdvisoryError::TimeoutError {
                seconds: self.config.timeout().as_secs(),
            }
        } else {
            AdvisoryError::ApiError(err)
        }
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| AdvisoryError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Not a valid header value: {}", e),
    })
}

#[async_trait]
impl<C: ConfigProvider> CompletionTransport for OpenRouterTransport<C> {
    async fn send(&self, request: &ChatCompletionRequest) -> Result<serde_json::Value> {
        tracing::debug!("Making API request to: {}", self.config.endpoint());

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(self.config.api_key())
            .headers(self.headers()?)
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(AdvisoryError::HttpStatusError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| AdvisoryError::MalformedResponseError {
            message: format!("body is not valid JSON: {}", e),
        })
    }
}
