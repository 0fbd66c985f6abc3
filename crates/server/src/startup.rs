use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::http::server::run_http_server;
use adapters::http::state::AppState;
use adapters::storage::file_activity_store::FileActivityStore;
use adapters::storage::seed::SeedRepository;
use application::activity_log::ActivityLogService;
use application::log_feed::LogFeed;
use application::stats::StatsService;
use infrastructure::config::ServiceConfig;
use infrastructure::constants::GRACEFUL_SHUTDOWN_TIMEOUT;
use ports::secondary::activity_store::ActivityStore;
use ports::secondary::complaint_source::ComplaintSource;
use ports::secondary::user_directory::UserDirectory;

use crate::shutdown::create_shutdown_token;

/// Wire the services and run the HTTP server until shutdown.
pub async fn run(config: ServiceConfig) -> Result<()> {
    let store = FileActivityStore::open(Path::new(&config.activity.log_file))
        .with_context(|| format!("failed to open activity log {}", config.activity.log_file))?;
    tracing::info!(log_file = %store.path().display(), "activity log store opened");

    let feed = LogFeed::new(config.activity.feed_capacity);
    let activity_service = Arc::new(ActivityLogService::new(
        Arc::new(store) as Arc<dyn ActivityStore>,
        feed,
    ));

    let repository = Arc::new(load_repository(&config)?);
    let stats_service = Arc::new(StatsService::new(
        Arc::clone(&repository) as Arc<dyn ComplaintSource>,
        repository as Arc<dyn UserDirectory>,
    ));

    let state = Arc::new(AppState::new(
        activity_service,
        stats_service,
        config.activity.recent_limit,
    ));

    let token = create_shutdown_token();
    let bind_address = config.server.bind_address.clone();
    let shutdown = token.clone().cancelled_owned();
    let http_port = config.server.http_port;
    let swagger_ui = config.server.swagger_ui;
    let mut server = tokio::spawn(async move {
        run_http_server(state, &bind_address, http_port, swagger_ui, shutdown).await
    });

    tokio::select! {
        result = &mut server => {
            result.context("HTTP server task panicked")?.context("HTTP server failed")?;
        }
        () = token.cancelled() => {
            // Bound the connection drain so a stuck SSE client cannot hold
            // the process open indefinitely.
            match tokio::time::timeout(GRACEFUL_SHUTDOWN_TIMEOUT, server).await {
                Ok(result) => result
                    .context("HTTP server task panicked")?
                    .context("HTTP server failed")?,
                Err(_) => {
                    tracing::warn!("graceful shutdown timed out, exiting with connections open");
                }
            }
        }
    }

    tracing::info!("complaintdesk-server stopped");
    Ok(())
}

/// Load the user/complaint fixture when configured, otherwise start with
/// empty collections (the persistence layer owning them is out of process).
fn load_repository(config: &ServiceConfig) -> Result<SeedRepository> {
    match &config.data.seed_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read seed file {path}"))?;
            let repository = SeedRepository::from_json(&json)
                .with_context(|| format!("failed to parse seed file {path}"))?;
            tracing::info!(
                seed_file = %path,
                users = repository.user_count(),
                complaints = repository.complaint_count(),
                "seed data loaded"
            );
            Ok(repository)
        }
        None => Ok(SeedRepository::empty()),
    }
}
