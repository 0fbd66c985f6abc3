use std::convert::Infallible;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::sse::{Event, KeepAlive, Sse};
use serde::{Deserialize, Serialize};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use utoipa::{IntoParams, ToSchema};

use super::error::{ApiError, ErrorBody};
use super::state::AppState;

/// Event name carried by every push on the live log stream.
pub const LOG_UPDATE_EVENT: &str = "log_update";

const MAX_LIMIT: usize = 100;

// ── Recent logs ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
pub struct RecentLogsParams {
    /// Maximum lines to return, newest first (default 20, max 100).
    pub limit: Option<usize>,
}

#[derive(Serialize, ToSchema)]
pub struct LogsResponse {
    /// Raw log lines, newest first.
    pub logs: Vec<String>,
}

/// `GET /api/admin/logs` — most recent activity log lines, newest first.
#[utoipa::path(
    get, path = "/api/admin/logs",
    tag = "Activity",
    params(RecentLogsParams),
    responses(
        (status = 200, description = "Recent activity log lines", body = LogsResponse),
        (status = 500, description = "Log store unreadable", body = ErrorBody),
    )
)]
pub async fn list_recent_logs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentLogsParams>,
) -> Result<Json<LogsResponse>, ApiError> {
    let limit = params.limit.unwrap_or(state.recent_limit).min(MAX_LIMIT);
    let logs = state
        .activity_service
        .recent(Some(limit))
        .map_err(|e| ApiError::Internal {
            message: format!("activity log read failed: {e}"),
        })?;
    Ok(Json(LogsResponse { logs }))
}

// ── Record ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordActivityRequest {
    /// Acting username; empty or missing falls back to `Guest`.
    #[serde(default)]
    pub actor: String,
    /// Free-text action description.
    pub action: String,
}

#[derive(Serialize, ToSchema)]
pub struct RecordActivityResponse {
    /// The formatted log line, present when the append succeeded.
    pub line: Option<String>,
    /// Whether the line reached the durable store.
    pub persisted: bool,
}

/// `POST /api/admin/logs` — record a business action.
///
/// The transport surface for collaborators (auth layer, CRUD handlers)
/// whose own success must never hinge on logging: an append failure is
/// reported on the diagnostics channel and in the `persisted` flag, but
/// the response status stays 202 either way.
#[utoipa::path(
    post, path = "/api/admin/logs",
    tag = "Activity",
    request_body = RecordActivityRequest,
    responses(
        (status = 202, description = "Activity accepted", body = RecordActivityResponse),
    )
)]
pub async fn record_activity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RecordActivityRequest>,
) -> impl IntoResponse {
    match state.activity_service.record(&req.actor, &req.action) {
        Ok(line) => (
            StatusCode::ACCEPTED,
            Json(RecordActivityResponse {
                line: Some(line),
                persisted: true,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, actor = %req.actor, "activity append failed");
            (
                StatusCode::ACCEPTED,
                Json(RecordActivityResponse {
                    line: None,
                    persisted: false,
                }),
            )
        }
    }
}

// ── Live stream ─────────────────────────────────────────────────────

/// `GET /api/admin/logs/stream` — live activity feed as Server-Sent Events.
///
/// Each recorded line arrives as one `log_update` event. Subscribing is
/// independent of the requests that produce lines; there is no replay, so
/// clients first load `GET /api/admin/logs` and then follow the stream.
/// Disconnecting simply drops the subscription.
#[utoipa::path(
    get, path = "/api/admin/logs/stream",
    tag = "Activity",
    responses(
        (status = 200, description = "SSE stream of log_update events", content_type = "text/event-stream"),
    )
)]
pub async fn stream_logs(
    State(state): State<Arc<AppState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    tracing::info!("dashboard subscribed to activity log stream");
    let rx = state.activity_service.feed().subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(line) => Some(Ok(Event::default().event(LOG_UPDATE_EVENT).data(line))),
        // Lagged — skip missed lines silently; the client re-syncs via
        // the recent-logs endpoint.
        Err(_) => None,
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
