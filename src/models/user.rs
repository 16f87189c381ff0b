use core::fmt;

use serde::{Deserialize, Serialize};
use sqlx::{prelude::Type, FromRow};
use time::OffsetDateTime;
use uuid::Uuid;

/// Role tag stored per user and resolved from the store at authorization
/// time. The session token never carries a role, so a role change is visible
/// on the very next request. The wire spellings (`admin`, `HR`, `Employee`)
/// are what the frontend sends and displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "user_role")] // Matches the Postgres enum name
#[sqlx(rename_all = "lowercase")] // Ensures matching labels
pub enum UserRole {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "Employee")]
    Employee,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Hr => "HR",
            UserRole::Employee => "Employee",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Option<UserRole>,
    pub designation: Option<String>,
    pub bank_account_no: Option<String>,
    pub salary: Option<i64>,
    pub photo_url: Option<String>,
    pub is_verified: bool,
    pub is_fired: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Profile fields the client submits on first login. Whatever arrives here is
/// written verbatim on insert; an existing record is never overwritten by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub bank_account_no: Option<String>,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::UserRole;

    #[test]
    fn role_tags_use_frontend_spellings() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&UserRole::Hr).unwrap(), "\"HR\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Employee).unwrap(),
            "\"Employee\""
        );

        let parsed: UserRole = serde_json::from_str("\"HR\"").unwrap();
        assert_eq!(parsed, UserRole::Hr);
    }
}
