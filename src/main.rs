use agri_advisory::app::terminal;
use agri_advisory::utils::error::AdvisoryError;
use agri_advisory::utils::{logger, validation::Validate};
use agri_advisory::{build_app, run_server, AdvisoryEngine, AdvisorySettings, CliConfig, Command};
use clap::Parser;
use std::sync::Arc;

fn load_settings() -> Result<AdvisorySettings, AdvisoryError> {
    let settings = AdvisorySettings::from_env()?;
    settings.validate()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 不存在時忽略
    dotenv::dotenv().ok();

    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting agri-advisory");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 缺少金鑰時在任何介面出現前結束
    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::debug!("Settings: {:?}", settings);

    let engine = AdvisoryEngine::from_config(settings)?;

    match config.command {
        Command::Serve { host, port } => {
            let app = build_app(Arc::new(engine));
            run_server(app, &host, port).await?;
        }
        Command::Ask { plant, issue } => {
            if let Err(e) = terminal::run_ask(&engine, plant, issue).await {
                std::process::exit(terminal::exit_code(&e));
            }
        }
    }

    Ok(())
}
