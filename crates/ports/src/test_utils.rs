use std::collections::HashMap;
use std::sync::Mutex;

use domain::activity::error::ActivityError;
use domain::complaint::entity::Complaint;
use domain::stats::error::StatsError;
use domain::user::entity::{User, UserId};

use crate::secondary::activity_store::ActivityStore;
use crate::secondary::complaint_source::ComplaintSource;
use crate::secondary::user_directory::UserDirectory;

/// In-memory `ActivityStore` for tests: a mutex-guarded line vector.
#[derive(Default)]
pub struct MemoryActivityStore {
    lines: Mutex<Vec<String>>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }
}

impl ActivityStore for MemoryActivityStore {
    fn append_line(&self, line: &str) -> Result<(), ActivityError> {
        self.lines
            .lock()
            .map_err(|e| ActivityError::WriteFailed(e.to_string()))?
            .push(line.to_string());
        Ok(())
    }

    fn read_lines(&self) -> Result<Vec<String>, ActivityError> {
        Ok(self
            .lines
            .lock()
            .map_err(|e| ActivityError::ReadFailed(e.to_string()))?
            .clone())
    }
}

/// `ActivityStore` whose appends always fail, for error-path tests.
pub struct FailingActivityStore;

impl ActivityStore for FailingActivityStore {
    fn append_line(&self, _line: &str) -> Result<(), ActivityError> {
        Err(ActivityError::WriteFailed("disk full".to_string()))
    }

    fn read_lines(&self) -> Result<Vec<String>, ActivityError> {
        Err(ActivityError::ReadFailed("disk on fire".to_string()))
    }
}

/// In-memory `ComplaintSource` serving a fixed collection.
#[derive(Default)]
pub struct MemoryComplaintSource {
    complaints: Vec<Complaint>,
}

impl MemoryComplaintSource {
    pub fn new(complaints: Vec<Complaint>) -> Self {
        Self { complaints }
    }
}

impl ComplaintSource for MemoryComplaintSource {
    fn list_complaints(&self) -> Result<Vec<Complaint>, StatsError> {
        Ok(self.complaints.clone())
    }
}

/// `ComplaintSource` that always fails, for error-path tests.
pub struct FailingComplaintSource;

impl ComplaintSource for FailingComplaintSource {
    fn list_complaints(&self) -> Result<Vec<Complaint>, StatsError> {
        Err(StatsError::SourceUnavailable("connection refused".to_string()))
    }
}

/// In-memory `UserDirectory` serving a fixed account set.
#[derive(Default)]
pub struct MemoryUserDirectory {
    users: HashMap<UserId, User>,
}

impl MemoryUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }
}

impl UserDirectory for MemoryUserDirectory {
    fn find_users(&self, ids: &[UserId]) -> Result<Vec<User>, StatsError> {
        Ok(ids.iter().filter_map(|id| self.users.get(id).cloned()).collect())
    }
}
