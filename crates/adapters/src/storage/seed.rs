use std::collections::HashMap;

use serde::Deserialize;

use domain::complaint::entity::Complaint;
use domain::stats::error::StatsError;
use domain::user::entity::{User, UserId};
use ports::secondary::complaint_source::ComplaintSource;
use ports::secondary::user_directory::UserDirectory;

/// JSON fixture shape: `{"users": [...], "complaints": [...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub complaints: Vec<Complaint>,
}

/// In-process stand-in for the persistence layer that owns users and
/// complaints in production. Loaded once at startup, read-only afterwards;
/// serves both the `ComplaintSource` and `UserDirectory` ports.
#[derive(Default)]
pub struct SeedRepository {
    users: HashMap<UserId, User>,
    complaints: Vec<Complaint>,
}

impl SeedRepository {
    /// Empty repository: stats report zero until a fixture is supplied.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: SeedData = serde_json::from_str(json)?;
        Ok(Self {
            users: data.users.into_iter().map(|u| (u.id.clone(), u)).collect(),
            complaints: data.complaints,
        })
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn complaint_count(&self) -> usize {
        self.complaints.len()
    }
}

impl ComplaintSource for SeedRepository {
    fn list_complaints(&self) -> Result<Vec<Complaint>, StatsError> {
        Ok(self.complaints.clone())
    }
}

impl UserDirectory for SeedRepository {
    fn find_users(&self, ids: &[UserId]) -> Result<Vec<User>, StatsError> {
        Ok(ids.iter().filter_map(|id| self.users.get(id).cloned()).collect())
    }
}
