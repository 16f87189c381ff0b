use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct WorkEntry {
    pub id: Uuid,
    pub employee_email: String,
    pub employee_name: Option<String>,
    pub task: String,
    pub hours_worked: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub work_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Payload an employee submits from the work-sheet form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkEntry {
    pub employee_email: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub task: String,
    pub hours_worked: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub work_date: OffsetDateTime,
}
