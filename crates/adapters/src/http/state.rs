use std::sync::Arc;
use std::time::Instant;

use application::activity_log::ActivityLogService;
use application::stats::StatsService;

/// Shared application state for the REST API server.
///
/// Passed to Axum handlers via `State(Arc<AppState>)`.
pub struct AppState {
    pub activity_service: Arc<ActivityLogService>,
    pub stats_service: Arc<StatsService>,
    /// Lines served by the recent-logs endpoint when no `limit` is given.
    pub recent_limit: usize,
    pub start_time: Instant,
    pub version: &'static str,
}

impl AppState {
    pub fn new(
        activity_service: Arc<ActivityLogService>,
        stats_service: Arc<StatsService>,
        recent_limit: usize,
    ) -> Self {
        Self {
            activity_service,
            stats_service,
            recent_limit,
            start_time: Instant::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_valid_state() {
        let state = test_support::memory_state(vec![], vec![]);
        assert!(!state.version.is_empty());
        assert!(state.start_time.elapsed().as_secs() < 60);
    }
}
