use async_trait::async_trait;

use crate::models::work_entry::{NewWorkEntry, WorkEntry};

#[async_trait]
pub trait WorkRepository: Send + Sync {
    async fn insert_entry(&self, entry: &NewWorkEntry) -> Result<WorkEntry, sqlx::Error>;
    /// Newest first, across all employees (the HR progress view).
    async fn list_entries(&self) -> Result<Vec<WorkEntry>, sqlx::Error>;
    async fn list_entries_for_email(&self, email: &str) -> Result<Vec<WorkEntry>, sqlx::Error>;
}
