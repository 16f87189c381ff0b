use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use tracing::error;
use uuid::Uuid;

use crate::responses::JsonResponse;
use crate::state::AppState;

pub async fn list_services(State(state): State<AppState>) -> Response {
    match state.services.list_services().await {
        Ok(services) => Json(services).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to list services");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

pub async fn get_service(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.services.find_service_by_id(id).await {
        Ok(Some(service)) => Json(service).into_response(),
        Ok(None) => JsonResponse::not_found("Service not found").into_response(),
        Err(err) => {
            error!(error = ?err, %id, "failed to load service");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}
