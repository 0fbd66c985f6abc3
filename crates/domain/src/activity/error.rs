use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("activity log write failed: {0}")]
    WriteFailed(String),

    #[error("activity log read failed: {0}")]
    ReadFailed(String),

    #[error("activity log store unavailable: {0}")]
    StoreUnavailable(String),
}
