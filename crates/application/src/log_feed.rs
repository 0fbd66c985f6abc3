use tokio::sync::broadcast;

/// Real-time fan-out channel for freshly recorded log lines.
///
/// Wraps a `tokio` broadcast sender so the recorder depends on a publish
/// operation, not on any transport's connection object. Publishing is
/// fire-and-forget: a send with no live subscribers is not an error, and a
/// subscriber that falls behind the channel capacity silently skips the
/// lines it missed. Dropping a receiver unsubscribes it.
#[derive(Clone)]
pub struct LogFeed {
    tx: broadcast::Sender<String>,
}

impl LogFeed {
    /// Create a feed buffering up to `capacity` undelivered lines per
    /// subscriber before that subscriber starts lagging.
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Best-effort broadcast of one formatted line to all subscribers.
    pub fn publish(&self, line: &str) {
        // send() only errors when there are no receivers; that is fine here.
        let _ = self.tx.send(line.to_string());
    }

    /// Subscribe to lines published after this call. No replay of earlier
    /// lines; late subscribers catch up through the recent-lines read-back.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
