use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::work_entry::NewWorkEntry;
use crate::responses::JsonResponse;
use crate::routes::auth::session::AuthSession;
use crate::state::AppState;

pub async fn submit_work_entry(
    State(state): State<AppState>,
    AuthSession(_claims): AuthSession,
    Json(entry): Json<NewWorkEntry>,
) -> Response {
    if entry.task.trim().is_empty() {
        return JsonResponse::bad_request("A task description is required").into_response();
    }

    match state.work.insert_entry(&entry).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to store work entry");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

// HR-gated at the router layer: the progress view across every employee.
pub async fn list_work_entries(State(state): State<AppState>) -> Response {
    match state.work.list_entries().await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to list work entries");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

pub async fn list_work_entries_for_employee(
    State(state): State<AppState>,
    AuthSession(_claims): AuthSession,
    Path(email): Path<String>,
) -> Response {
    match state.work.list_entries_for_email(&email).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => {
            error!(error = ?err, %email, "failed to list work entries");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}
