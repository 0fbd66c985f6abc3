use domain::stats::error::StatsError;
use domain::user::entity::{User, UserId};

/// Read-only lookup into the user collection owned by the persistence layer.
pub trait UserDirectory: Send + Sync {
    /// Resolve the given ids to users. Ids with no matching account (e.g.
    /// deleted submitters) are silently absent from the result.
    fn find_users(&self, ids: &[UserId]) -> Result<Vec<User>, StatsError>;
}
