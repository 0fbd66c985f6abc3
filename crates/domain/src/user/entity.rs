use serde::{Deserialize, Serialize};

/// Opaque user identifier assigned by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Employee,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered account, read-only input to the stats aggregator.
///
/// Ownership of the user collection (CRUD, password hashes, reset tokens)
/// stays with the excluded persistence layer; this entity carries only the
/// fields the core consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_predicates() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Employee.is_admin());
        assert_eq!(UserRole::Admin.as_str(), "admin");
        assert_eq!(UserRole::Employee.as_str(), "employee");
    }

    #[test]
    fn deserializes_from_snake_case() {
        let user: User = serde_json::from_str(
            r#"{"id":"u1","username":"alice","email":"alice@example.com","role":"employee","department":"IT"}"#,
        )
        .unwrap();
        assert_eq!(user.id, UserId("u1".to_string()));
        assert_eq!(user.role, UserRole::Employee);
    }
}
