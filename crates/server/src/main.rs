#![forbid(unsafe_code)]

mod cli;
mod shutdown;
mod startup;

use anyhow::{Context, Result};
use infrastructure::config::ServiceConfig;
use infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse();

    let mut config = ServiceConfig::load(std::path::Path::new(&cli.config))
        .with_context(|| format!("failed to load config from {}", cli.config))?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }

    init_logging(config.logging.level, config.logging.format);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config,
        "complaintdesk-server starting"
    );

    startup::run(config).await
}
