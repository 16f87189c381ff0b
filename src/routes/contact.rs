use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::models::contact::NewContactMessage;
use crate::responses::JsonResponse;
use crate::state::AppState;

pub async fn store_contact_message(
    State(state): State<AppState>,
    Json(message): Json<NewContactMessage>,
) -> Response {
    if message.email.trim().is_empty() || message.message.trim().is_empty() {
        return JsonResponse::bad_request("An email and a message are required").into_response();
    }

    match state.contacts.insert_message(&message).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to store contact message");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}
