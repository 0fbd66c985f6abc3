use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("complaint data source unavailable: {0}")]
    SourceUnavailable(String),
}
