pub mod engine;
pub mod generator;
pub mod prompt;
pub mod transport;

pub use crate::domain::model::{AdvisoryRequest, AdvisoryResponse, ChatCompletionRequest};
pub use crate::domain::ports::{CompletionTransport, ConfigProvider};
pub use crate::utils::error::Result;
