use std::collections::BTreeMap;

use serde::Serialize;

/// One non-administrative submitter and how many complaints they authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitterCount {
    pub username: String,
    pub count: u64,
}

/// Point-in-time aggregate over the complaint collection.
///
/// Derived and ephemeral: recomputed per request, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsSnapshot {
    pub total_complaints: u64,
    pub status_counts: BTreeMap<String, u64>,
    pub department_counts: BTreeMap<String, u64>,
    /// Count-descending, at most five entries, administrators excluded.
    pub most_active_users: Vec<SubmitterCount>,
}
