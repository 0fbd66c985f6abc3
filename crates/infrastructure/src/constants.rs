use std::time::Duration;

// ── Defaults ───────────────────────────────────────────────────────

pub const DEFAULT_CONFIG_PATH: &str = "/etc/complaintdesk/config.yaml";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILE: &str = "data/activity.log";

// ── Channel capacities ─────────────────────────────────────────────

/// Per-subscriber buffer of the real-time log feed before it lags.
pub const LOG_FEED_CAPACITY: usize = 256;

// ── Timeouts ───────────────────────────────────────────────────────

pub const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);
