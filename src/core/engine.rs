use crate::core::generator::AdvisoryGenerator;
use crate::core::transport::OpenRouterTransport;
use crate::domain::model::{AdvisoryRequest, AdvisoryResponse};
use crate::domain::ports::{CompletionTransport, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Instant;

/// Runs one form submission: validate, then generate.
pub struct AdvisoryEngine<T: CompletionTransport> {
    generator: AdvisoryGenerator<T>,
}

impl<T: CompletionTransport> AdvisoryEngine<T> {
    pub fn new(generator: AdvisoryGenerator<T>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &AdvisoryGenerator<T> {
        &self.generator
    }

    pub async fn submit(&self, request: &AdvisoryRequest) -> Result<AdvisoryResponse> {
        // 空欄位不送出請求
        if let Err(e) = request.validate() {
            tracing::warn!("⚠️ Submission rejected: {}", e);
            return Err(e);
        }

        tracing::info!(
            plant = %request.plant,
            issue = %request.issue,
            "🌱 Generating advisory"
        );
        let started = Instant::now();

        match self.generator.generate(&request.plant, &request.issue).await {
            Ok(content) => {
                tracing::info!(
                    chars = content.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "✅ Advisory generated"
                );
                Ok(AdvisoryResponse { content })
            }
            Err(e) => {
                tracing::error!(
                    "❌ Advisory generation failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                Err(e)
            }
        }
    }
}

impl<C: ConfigProvider> AdvisoryEngine<OpenRouterTransport<C>> {
    /// Engine talking to the configured completions endpoint.
    pub fn from_config(config: C) -> Result<Self> {
        let model = config.model().to_string();
        let transport = OpenRouterTransport::new(config)?;
        Ok(Self::new(AdvisoryGenerator::new(transport, model)))
    }
}
