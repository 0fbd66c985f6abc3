use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use domain::stats::snapshot::StatsSnapshot;

use super::error::{ApiError, ErrorBody};
use super::state::AppState;

// ── Response DTOs ───────────────────────────────────────────────────

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_complaints: u64,
    pub status_counts: BTreeMap<String, u64>,
    pub department_counts: BTreeMap<String, u64>,
    /// Count-descending, at most five entries, administrators excluded.
    pub most_active_users: Vec<MostActiveUserResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct MostActiveUserResponse {
    pub username: String,
    pub count: u64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(snapshot: StatsSnapshot) -> Self {
        Self {
            total_complaints: snapshot.total_complaints,
            status_counts: snapshot.status_counts,
            department_counts: snapshot.department_counts,
            most_active_users: snapshot
                .most_active_users
                .into_iter()
                .map(|s| MostActiveUserResponse {
                    username: s.username,
                    count: s.count,
                })
                .collect(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

/// `GET /api/admin/stats` — complaint summary for the admin dashboard.
///
/// Recomputed from the complaint collection on every request.
#[utoipa::path(
    get, path = "/api/admin/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Complaint statistics", body = StatsResponse),
        (status = 503, description = "Complaint data source unavailable", body = ErrorBody),
    )
)]
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let snapshot = state.stats_service.compute_stats()?;
    Ok(Json(StatsResponse::from(snapshot)))
}
