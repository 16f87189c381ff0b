use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::user::{User, UserProfile, UserRole};

use super::user_repository::{UpsertOutcome, UserRepository};

const USER_COLUMNS: &str = "id, email, name, role, designation, bank_account_no, salary, \
                            photo_url, is_verified, is_fired, created_at";

pub struct PostgresUserRepository {
    pub pool: PgPool,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn insert_user_if_absent(
        &self,
        profile: &UserProfile,
    ) -> Result<UpsertOutcome, sqlx::Error> {
        if let Some(existing) = self.find_user_by_email(&profile.email).await? {
            return Ok(UpsertOutcome::Existing(existing));
        }

        let inserted = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, name, role, designation, bank_account_no, salary, photo_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&profile.email)
        .bind(&profile.name)
        .bind(profile.role)
        .bind(&profile.designation)
        .bind(&profile.bank_account_no)
        .bind(profile.salary)
        .bind(&profile.photo_url)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(user) => Ok(UpsertOutcome::Created(user)),
            // Lost a concurrent first-login race; the record that won is the
            // authoritative one.
            None => {
                let user = self
                    .find_user_by_email(&profile.email)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok(UpsertOutcome::Existing(user))
            }
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await
    }

    async fn update_role(&self, email: &str, role: UserRole) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE email = $1")
            .bind(email)
            .bind(role)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_fired(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET is_fired = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_verified(&self, id: Uuid, verified: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET is_verified = $2 WHERE id = $1")
            .bind(id)
            .bind(verified)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
