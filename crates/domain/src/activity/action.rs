/// The catalog of business actions that produce an activity log entry.
///
/// Call sites build a variant and render it with [`ActivityAction::describe`];
/// the wording is part of the on-disk log format consumed by the admin
/// dashboard, so it stays centralized here rather than inlined per handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityAction {
    LoggedIn,
    LoggedOut,
    PasswordResetRequested,
    PasswordResetCompleted,
    UserAdded { username: String },
    UserUpdated { username: String },
    UserDeleted { username: String },
    ComplaintSubmitted { title: String },
    ComplaintStatusChanged { title: String, status: String },
    ComplaintDeleted { title: String },
}

impl ActivityAction {
    /// Render the free-text action description for the log line.
    pub fn describe(&self) -> String {
        match self {
            Self::LoggedIn => "logged in".to_string(),
            Self::LoggedOut => "logged out".to_string(),
            Self::PasswordResetRequested => "requested password reset".to_string(),
            Self::PasswordResetCompleted => "changed password via reset".to_string(),
            Self::UserAdded { username } => format!("added user {username}"),
            Self::UserUpdated { username } => format!("updated user {username}"),
            Self::UserDeleted { username } => format!("deleted user {username}"),
            Self::ComplaintSubmitted { title } => format!("submitted complaint: '{title}'"),
            Self::ComplaintStatusChanged { title, status } => {
                format!("changed status of complaint '{title}' to '{status}'")
            }
            Self::ComplaintDeleted { title } => format!("deleted complaint '{title}'"),
        }
    }
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
