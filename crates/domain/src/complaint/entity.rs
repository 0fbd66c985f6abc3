use serde::{Deserialize, Serialize};

use crate::user::entity::UserId;

/// Opaque complaint identifier assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintId(pub String);

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complaint workflow state.
///
/// The fixed set matches the admin dashboard's triage columns; values read
/// from the data source that fall outside it keep their own label under
/// `Other` so they still form their own group in the stats breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
    Other(String),
}

impl ComplaintStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Rejected => "Rejected",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ComplaintStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => Self::Pending,
            "In Progress" => Self::InProgress,
            "Resolved" => Self::Resolved,
            "Rejected" => Self::Rejected,
            _ => Self::Other(s),
        }
    }
}

impl From<ComplaintStatus> for String {
    fn from(status: ComplaintStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A submitted complaint, read-only input to the stats aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub description: String,
    pub department: String,
    pub status: ComplaintStatus,
    /// Submitting user; may reference an account that has since been deleted.
    pub created_by: UserId,
    /// Submission time in nanoseconds since the UNIX epoch.
    pub submitted_at_ns: u64,
}
