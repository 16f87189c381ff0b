use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::work_entry::{NewWorkEntry, WorkEntry};

use super::work_repository::WorkRepository;

const WORK_COLUMNS: &str =
    "id, employee_email, employee_name, task, hours_worked, work_date, created_at";

pub struct PostgresWorkRepository {
    pub pool: PgPool,
}

#[async_trait]
impl WorkRepository for PostgresWorkRepository {
    async fn insert_entry(&self, entry: &NewWorkEntry) -> Result<WorkEntry, sqlx::Error> {
        sqlx::query_as::<_, WorkEntry>(&format!(
            "INSERT INTO work_entries (employee_email, employee_name, task, hours_worked, work_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {WORK_COLUMNS}"
        ))
        .bind(&entry.employee_email)
        .bind(&entry.employee_name)
        .bind(&entry.task)
        .bind(entry.hours_worked)
        .bind(entry.work_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn list_entries(&self) -> Result<Vec<WorkEntry>, sqlx::Error> {
        sqlx::query_as::<_, WorkEntry>(&format!(
            "SELECT {WORK_COLUMNS} FROM work_entries ORDER BY work_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    async fn list_entries_for_email(&self, email: &str) -> Result<Vec<WorkEntry>, sqlx::Error> {
        sqlx::query_as::<_, WorkEntry>(&format!(
            "SELECT {WORK_COLUMNS} FROM work_entries WHERE employee_email = $1 ORDER BY work_date DESC"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await
    }
}
