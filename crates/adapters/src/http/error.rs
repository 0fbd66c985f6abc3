use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::stats::error::StatsError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub(crate) struct ErrorDetail {
    /// Machine-readable error code (e.g. `LOG_READ_FAILED`).
    #[schema(value_type = String)]
    code: &'static str,
    /// Human-readable description of the error.
    message: String,
}

/// Standard API error type.
///
/// All variants produce a JSON response matching:
/// `{"error":{"code":"SCREAMING_SNAKE","message":"human-readable"}}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: &'static str, message: String },
    Internal { message: String },
    ServiceUnavailable { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            Self::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
            Self::ServiceUnavailable { message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
                message,
            ),
        };

        (
            status,
            Json(ErrorBody {
                error: ErrorDetail { code, message },
            }),
        )
            .into_response()
    }
}

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        match err {
            // A dashboard must be able to tell "fetch failed" apart from
            // "no data yet", so source failures are 503, never an empty 200.
            StatsError::SourceUnavailable(_) => Self::ServiceUnavailable {
                message: err.to_string(),
            },
        }
    }
}
