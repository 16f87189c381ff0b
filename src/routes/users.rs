use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::db::user_repository::UpsertOutcome;
use crate::models::user::{UserProfile, UserRole};
use crate::responses::JsonResponse;
use crate::routes::auth::session::AuthSession;
use crate::state::AppState;

/// First-login upsert: an existing record is returned untouched so a repeat
/// login can never clobber role or status flags an admin/HR already set.
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Response {
    if profile.email.trim().is_empty() {
        return JsonResponse::bad_request("A user email is required").into_response();
    }

    match state.users.insert_user_if_absent(&profile).await {
        Ok(UpsertOutcome::Existing(user)) => Json(user).into_response(),
        Ok(UpsertOutcome::Created(user)) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to upsert user");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    AuthSession(_claims): AuthSession,
    Path(email): Path<String>,
) -> Response {
    match state.users.find_user_by_email(&email).await {
        Ok(Some(user)) => Json(user).into_response(),
        Ok(None) => JsonResponse::not_found("User not found").into_response(),
        Err(err) => {
            error!(error = ?err, "failed to load user");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

// Admin-gated at the router layer.
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.users.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to list users");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RoleUpdatePayload {
    pub role: UserRole,
}

pub async fn update_user_role(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<RoleUpdatePayload>,
) -> Response {
    match state.users.update_role(&email, payload.role).await {
        Ok(true) => JsonResponse::success("Role updated").into_response(),
        Ok(false) => JsonResponse::not_found("User not found").into_response(),
        Err(err) => {
            error!(error = ?err, %email, "failed to update role");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

pub async fn fire_user(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.users.set_fired(id).await {
        Ok(true) => JsonResponse::success("User fired").into_response(),
        Ok(false) => JsonResponse::not_found("User not found").into_response(),
        Err(err) => {
            error!(error = ?err, %id, "failed to fire user");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}
