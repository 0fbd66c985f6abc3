use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::activity_handler::{list_recent_logs, record_activity, stream_logs};
use super::health_handler::{healthz, readyz};
use super::openapi::ApiDoc;
use super::state::AppState;
use super::stats_handler::get_stats;

/// Maximum request body size for API endpoints (64 KiB).
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Build the main Axum router.
///
/// Routes are split into two groups:
/// 1. **Public**: `/healthz`, `/readyz` — probes
/// 2. **Admin API**: `/api/admin/*` — log retrieval/recording, live
///    stream, and stats (authentication is terminated upstream)
pub fn build_router(state: Arc<AppState>, swagger_ui: bool) -> Router {
    let public_routes = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz));

    let api_routes = Router::new()
        .route("/api/admin/logs", get(list_recent_logs).post(record_activity))
        .route("/api/admin/logs/stream", get(stream_logs))
        .route("/api/admin/stats", get(get_stats))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE));

    let mut router = Router::new().merge(public_routes).merge(api_routes);

    if swagger_ui {
        router = router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router.with_state(state)
}
