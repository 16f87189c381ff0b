use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::responses::JsonResponse;
use crate::state::AppState;

// Both handlers sit behind the HR gate at the router layer.

pub async fn list_employees(State(state): State<AppState>) -> Response {
    match state.users.list_users().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => {
            error!(error = ?err, "failed to list employees");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyPayload {
    pub verified: bool,
}

pub async fn verify_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<VerifyPayload>,
) -> Response {
    match state.users.set_verified(id, payload.verified).await {
        Ok(true) => JsonResponse::success("Verification status updated").into_response(),
        Ok(false) => JsonResponse::not_found("User not found").into_response(),
        Err(err) => {
            error!(error = ?err, %id, "failed to update verification status");
            JsonResponse::server_error("Database error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        middleware,
        routing::{get, put},
        Router,
    };
    use tower::ServiceExt;

    use super::{list_employees, verify_employee};
    use crate::db::mock_db::MockDb;
    use crate::models::user::UserRole;
    use crate::routes::auth::guard::hr_gate;
    use crate::test_support::{auth_cookie_for, test_state, test_user};

    fn build_app(db: Arc<MockDb>) -> Router {
        let state = test_state(db);
        Router::new()
            .route("/employees", get(list_employees))
            .route("/employees/{id}/verify", put(verify_employee))
            .route_layer(middleware::from_fn_with_state(state.clone(), hr_gate))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_hr_toggles_verification_status() {
        let hr = test_user("hr@x.com", Some(UserRole::Hr));
        let employee = test_user("emp@x.com", Some(UserRole::Employee));
        let employee_id = employee.id;
        let db = Arc::new(MockDb::with_user(hr));
        db.users.lock().unwrap().push(employee);
        let app = build_app(db.clone());

        let res = app
            .oneshot(
                Request::put(format!("/employees/{}/verify", employee_id))
                    .header(header::COOKIE, auth_cookie_for("hr@x.com"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"verified":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let users = db.users.lock().unwrap();
        assert!(users.iter().find(|u| u.id == employee_id).unwrap().is_verified);
    }

    #[tokio::test]
    async fn test_admin_cannot_enter_hr_area() {
        // Exact-match roles: admin does not imply HR.
        let db = Arc::new(MockDb::with_user(test_user(
            "boss@x.com",
            Some(UserRole::Admin),
        )));
        let app = build_app(db);

        let res = app
            .oneshot(
                Request::get("/employees")
                    .header(header::COOKIE, auth_cookie_for("boss@x.com"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
}
