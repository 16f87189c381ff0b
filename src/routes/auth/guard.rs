use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::db::user_repository::UserRepository;
use crate::models::user::UserRole;
use crate::responses::JsonResponse;
use crate::routes::auth::claims::Claims;
use crate::routes::auth::session::AuthSession;
use crate::state::AppState;

/// Role a protected operation demands. Exact match only: an admin does NOT
/// implicitly satisfy an HR requirement, so every route names the one role it
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    Admin,
    Hr,
}

impl RequiredRole {
    fn matches(self, role: Option<UserRole>) -> bool {
        matches!(
            (self, role),
            (RequiredRole::Admin, Some(UserRole::Admin)) | (RequiredRole::Hr, Some(UserRole::Hr))
        )
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential, or the credential failed the signature/expiry check.
    #[error("unauthorized access")]
    Unauthenticated,
    /// Credential valid, but the stored role does not match the requirement
    /// (including "no user record at all").
    #[error("forbidden access")]
    Forbidden,
    /// The user store itself failed. Surfaced as a server error so an outage
    /// never masquerades as a legitimate denial.
    #[error("user store unavailable")]
    Store(#[from] sqlx::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthenticated => {
                JsonResponse::unauthorized("unauthorized access").into_response()
            }
            AuthError::Forbidden => JsonResponse::forbidden("forbidden access").into_response(),
            AuthError::Store(err) => {
                error!(error = ?err, "user store read failed during authorization");
                JsonResponse::server_error("Internal error").into_response()
            }
        }
    }
}

/// The authorization decision: one store read, then an exact role match. No
/// caching — the store is re-consulted on every check so a role change is
/// honored on the next request.
pub async fn authorize(
    users: &dyn UserRepository,
    claims: &Claims,
    required: RequiredRole,
) -> Result<(), AuthError> {
    let record = users.find_user_by_email(&claims.email).await?;
    match record {
        Some(user) if required.matches(user.role) => Ok(()),
        _ => Err(AuthError::Forbidden),
    }
}

/// Ordered guard pipeline: verify the credential, then authorize the role.
/// Either rejection short-circuits before the inner handler runs, so a
/// guarded mutation can never partially execute.
async fn role_gate(
    state: AppState,
    required: RequiredRole,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let (mut parts, body) = req.into_parts();
    let claims = match AuthSession::from_request_parts(&mut parts, &state).await {
        Ok(AuthSession(claims)) => claims,
        Err(err) => return Err(err.into_response()),
    };

    if let Err(err) = authorize(state.users.as_ref(), &claims, required).await {
        return Err(err.into_response());
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

pub async fn admin_gate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    role_gate(state, RequiredRole::Admin, req, next).await
}

pub async fn hr_gate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    role_gate(state, RequiredRole::Hr, req, next).await
}
