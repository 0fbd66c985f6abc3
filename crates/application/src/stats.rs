use std::collections::HashMap;
use std::sync::Arc;

use domain::stats::engine;
use domain::stats::error::StatsError;
use domain::stats::snapshot::{StatsSnapshot, SubmitterCount};
use domain::user::entity::{User, UserId};
use ports::secondary::complaint_source::ComplaintSource;
use ports::secondary::user_directory::UserDirectory;

/// How many top submitter groups are considered for the ranking.
pub const MOST_ACTIVE_LIMIT: usize = 5;

/// On-demand analytics over the complaint collection.
///
/// Read-only and idempotent: every call recomputes from the current
/// collection, nothing is cached or persisted.
pub struct StatsService {
    complaints: Arc<dyn ComplaintSource>,
    users: Arc<dyn UserDirectory>,
}

impl StatsService {
    pub fn new(complaints: Arc<dyn ComplaintSource>, users: Arc<dyn UserDirectory>) -> Self {
        Self { complaints, users }
    }

    /// Compute the dashboard summary.
    ///
    /// The top-5 submitter groups are resolved against the user directory
    /// after ranking; administrators and deleted accounts are dropped from
    /// the result (never backfilled), so the list may hold fewer than five
    /// entries.
    pub fn compute_stats(&self) -> Result<StatsSnapshot, StatsError> {
        let complaints = self.complaints.list_complaints()?;

        let candidates = engine::top_submitters(&complaints, MOST_ACTIVE_LIMIT);
        let ids: Vec<UserId> = candidates.iter().map(|(id, _)| id.clone()).collect();
        let resolved: HashMap<UserId, User> = self
            .users
            .find_users(&ids)?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();

        let most_active_users = candidates
            .into_iter()
            .filter_map(|(id, count)| {
                let user = resolved.get(&id)?;
                if user.role.is_admin() {
                    return None;
                }
                Some(SubmitterCount {
                    username: user.username.clone(),
                    count,
                })
            })
            .collect();

        Ok(StatsSnapshot {
            total_complaints: complaints.len() as u64,
            status_counts: engine::count_by_status(&complaints),
            department_counts: engine::count_by_department(&complaints),
            most_active_users,
        })
    }
}
