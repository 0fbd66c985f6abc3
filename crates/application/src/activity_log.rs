use std::sync::Arc;

use chrono::Local;

use domain::activity::action::ActivityAction;
use domain::activity::entry::ActivityEntry;
use domain::activity::error::ActivityError;
use ports::secondary::activity_store::ActivityStore;

use crate::log_feed::LogFeed;

/// Default number of lines served by [`ActivityLogService::recent`].
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Records significant business actions as durable log lines and fans
/// them out to live dashboard subscribers.
///
/// `record` appends first, then publishes; a failed append is returned to
/// the caller and nothing is published. Logging is a secondary side channel:
/// call sites surface the error on the diagnostics channel (`tracing`) and
/// still return their own business result.
pub struct ActivityLogService {
    store: Arc<dyn ActivityStore>,
    feed: LogFeed,
}

impl ActivityLogService {
    pub fn new(store: Arc<dyn ActivityStore>, feed: LogFeed) -> Self {
        Self { store, feed }
    }

    /// Record one action: format the line with the current wall-clock time,
    /// durably append it, then broadcast it. Returns the formatted line.
    ///
    /// The append is serialized by the store; the publish never blocks on
    /// slow or disconnected subscribers.
    pub fn record(&self, actor: &str, action: &str) -> Result<String, ActivityError> {
        let entry = ActivityEntry::new(actor, action);
        let line = entry.format_line(Local::now().naive_local());
        self.store.append_line(&line)?;
        self.feed.publish(&line);
        tracing::debug!(actor = %entry.actor, "activity recorded");
        Ok(line)
    }

    /// Record a cataloged business action.
    pub fn record_action(&self, actor: &str, action: &ActivityAction) -> Result<String, ActivityError> {
        self.record(actor, &action.describe())
    }

    /// Up to `limit` most recent lines, newest first. Reads the full store
    /// and slices; no separate index is kept.
    pub fn recent(&self, limit: Option<usize>) -> Result<Vec<String>, ActivityError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        let lines = self.store.read_lines()?;
        Ok(lines.into_iter().rev().take(limit).collect())
    }

    /// The real-time channel this recorder publishes to.
    pub fn feed(&self) -> &LogFeed {
        &self.feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::activity::entry::parse_line;
    use ports::test_utils::{FailingActivityStore, MemoryActivityStore};

    fn service() -> (ActivityLogService, Arc<MemoryActivityStore>) {
        let store = Arc::new(MemoryActivityStore::new());
        let svc = ActivityLogService::new(Arc::clone(&store) as Arc<dyn ActivityStore>, LogFeed::new(64));
        (svc, store)
    }

    #[test]
    fn record_returns_a_parseable_line() {
        let (svc, store) = service();
        let line = svc.record("admin", "deleted user bob").unwrap();
        let parsed = parse_line(&line).unwrap();
        assert_eq!(parsed.actor, "admin");
        assert_eq!(parsed.action, "deleted user bob");
        assert_eq!(store.line_count(), 1);
    }

    #[test]
    fn record_action_uses_catalog_wording() {
        let (svc, _store) = service();
        let line = svc
            .record_action(
                "admin",
                &ActivityAction::UserDeleted {
                    username: "bob".to_string(),
                },
            )
            .unwrap();
        assert!(line.ends_with("admin deleted user bob"));
    }

    #[test]
    fn unknown_actor_is_recorded_as_guest() {
        let (svc, _store) = service();
        let line = svc.record("", "logged out").unwrap();
        assert_eq!(parse_line(&line).unwrap().actor, "Guest");
    }

    #[test]
    fn recent_returns_min_of_n_and_twenty_newest_first() {
        let (svc, _store) = service();
        for i in 0..25 {
            svc.record("alice", &format!("action {i}")).unwrap();
        }
        let recent = svc.recent(None).unwrap();
        assert_eq!(recent.len(), 20);
        assert!(recent[0].ends_with("action 24"));
        assert!(recent[19].ends_with("action 5"));

        let recent = svc.recent(Some(3)).unwrap();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("action 24"));
    }

    #[test]
    fn recent_on_short_history_returns_everything() {
        let (svc, _store) = service();
        svc.record("alice", "logged in").unwrap();
        svc.record("alice", "logged out").unwrap();
        let recent = svc.recent(None).unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("logged out"));
        assert!(recent[1].ends_with("logged in"));
    }

    #[test]
    fn append_failure_surfaces_and_skips_publish() {
        let feed = LogFeed::new(4);
        let mut rx = feed.subscribe();
        let svc = ActivityLogService::new(Arc::new(FailingActivityStore), feed);
        let err = svc.record("admin", "deleted user bob").unwrap_err();
        assert!(matches!(err, ActivityError::WriteFailed(_)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn subscriber_sees_exactly_the_recorded_line() {
        let (svc, _store) = service();
        let mut rx = svc.feed().subscribe();
        let line = svc.record("admin", "added user carol").unwrap();
        assert_eq!(rx.recv().await.unwrap(), line);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn concurrent_records_each_produce_one_intact_line() {
        let store = Arc::new(MemoryActivityStore::new());
        let svc = Arc::new(ActivityLogService::new(
            Arc::clone(&store) as Arc<dyn ActivityStore>,
            LogFeed::new(128),
        ));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let svc = Arc::clone(&svc);
                std::thread::spawn(move || {
                    svc.record(&format!("user{i}"), "submitted complaint: 'load test'")
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = store.read_lines().unwrap();
        assert_eq!(lines.len(), 50);
        for line in &lines {
            let parsed = parse_line(line).expect("line should stay intact");
            assert_eq!(parsed.action, "submitted complaint: 'load test'");
        }
    }
}
