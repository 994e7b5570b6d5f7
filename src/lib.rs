pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

#[cfg(feature = "web")]
pub use app::web::{build_app, run_server};

pub use config::AdvisorySettings;
pub use core::{engine::AdvisoryEngine, generator::AdvisoryGenerator, transport::OpenRouterTransport};
pub use domain::model::{AdvisoryRequest, AdvisoryResponse};
pub use utils::error::{AdvisoryError, Result};
