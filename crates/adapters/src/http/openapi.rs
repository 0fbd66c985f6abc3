use utoipa::OpenApi;

use super::activity_handler::{
    LogsResponse, RecordActivityRequest, RecordActivityResponse,
};
use super::error::{ErrorBody, ErrorDetail};
use super::health_handler::{HealthResponse, ReadyResponse};
use super::stats_handler::{MostActiveUserResponse, StatsResponse};

/// OpenAPI document for the admin REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "complaintdesk API",
        description = "Activity log and complaint analytics endpoints for the admin dashboard"
    ),
    paths(
        super::health_handler::healthz,
        super::health_handler::readyz,
        super::activity_handler::list_recent_logs,
        super::activity_handler::record_activity,
        super::activity_handler::stream_logs,
        super::stats_handler::get_stats,
    ),
    components(schemas(
        HealthResponse,
        ReadyResponse,
        LogsResponse,
        RecordActivityRequest,
        RecordActivityResponse,
        StatsResponse,
        MostActiveUserResponse,
        ErrorBody,
        ErrorDetail,
    )),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Activity", description = "Activity log retrieval, recording, and live stream"),
        (name = "Stats", description = "Complaint analytics"),
    )
)]
pub struct ApiDoc;
