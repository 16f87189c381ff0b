use async_trait::async_trait;
use uuid::Uuid;

use crate::models::user::{User, UserProfile, UserRole};

/// Result of the upsert-if-absent performed on first login. An existing
/// record wins: the submitted profile never overwrites stored fields.
#[derive(Debug, Clone)]
pub enum UpsertOutcome {
    Existing(User),
    Created(User),
}

impl UpsertOutcome {
    pub fn into_user(self) -> User {
        match self {
            UpsertOutcome::Existing(user) | UpsertOutcome::Created(user) => user,
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// The one read the authorization layer depends on.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;
    async fn insert_user_if_absent(
        &self,
        profile: &UserProfile,
    ) -> Result<UpsertOutcome, sqlx::Error>;
    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error>;
    /// Returns false when no record matched the email.
    async fn update_role(&self, email: &str, role: UserRole) -> Result<bool, sqlx::Error>;
    async fn set_fired(&self, id: Uuid) -> Result<bool, sqlx::Error>;
    async fn set_verified(&self, id: Uuid, verified: bool) -> Result<bool, sqlx::Error>;
}
