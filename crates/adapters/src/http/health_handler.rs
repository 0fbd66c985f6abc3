use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

use super::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`.
    #[schema(value_type = String)]
    pub status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    /// `"ready"` or `"not_ready"`.
    #[schema(value_type = String)]
    pub status: &'static str,
    /// Whether the activity log store is readable.
    pub log_store_ok: bool,
}

/// Liveness probe — always returns 200 if the process is running.
#[utoipa::path(
    get, path = "/healthz",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe — 200 when the activity log store is readable, 503 otherwise.
#[utoipa::path(
    get, path = "/readyz",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Service is not ready", body = ReadyResponse),
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let log_store_ok = state.activity_service.recent(Some(1)).is_ok();
    let status = if log_store_ok { "ready" } else { "not_ready" };
    let code = if log_store_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(ReadyResponse { status, log_store_ok }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::state::test_support::memory_state;
    use application::activity_log::ActivityLogService;
    use application::log_feed::LogFeed;
    use application::stats::StatsService;
    use ports::test_utils::{FailingActivityStore, MemoryComplaintSource, MemoryUserDirectory};

    #[tokio::test]
    async fn healthz_always_returns_ok() {
        let Json(resp) = healthz().await;
        assert_eq!(resp.status, "ok");
    }

    #[tokio::test]
    async fn readyz_returns_ready_with_working_store() {
        let state = memory_state(vec![], vec![]);
        let resp = readyz(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readyz_returns_unavailable_with_broken_store() {
        let activity = Arc::new(ActivityLogService::new(
            Arc::new(FailingActivityStore),
            LogFeed::new(4),
        ));
        let stats = Arc::new(StatsService::new(
            Arc::new(MemoryComplaintSource::default()),
            Arc::new(MemoryUserDirectory::default()),
        ));
        let state = Arc::new(AppState::new(activity, stats, 20));
        let resp = readyz(State(state)).await.into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
