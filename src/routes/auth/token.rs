use axum::{
    extract::{Json, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use serde_json::json;
use time::Duration as TimeDuration;
use tracing::error;

use crate::responses::JsonResponse;
use crate::routes::auth::claims::Claims;
use crate::routes::auth::cookie::session_cookie;
use crate::state::AppState;
use crate::utils::jwt::{issue_token, TOKEN_TTL_DAYS};

/// Identity assertion posted after the client-side login completes. The
/// issuer packages it as-is; establishing the identity happened upstream.
#[derive(Deserialize, Serialize)]
pub struct IdentityPayload {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

pub async fn handle_issue_token(
    State(state): State<AppState>,
    Json(payload): Json<IdentityPayload>,
) -> Response {
    if payload.email.trim().is_empty() {
        return JsonResponse::bad_request("An identity payload is required").into_response();
    }

    let claims = Claims::new(payload.email, payload.name, Duration::days(TOKEN_TTL_DAYS));

    match issue_token(&claims, &state.jwt) {
        Ok(token) => {
            let cookie = session_cookie(
                token,
                state.config.environment,
                TimeDuration::days(TOKEN_TTL_DAYS),
            );

            let mut headers = HeaderMap::new();
            headers.insert(
                header::SET_COOKIE,
                HeaderValue::from_str(&cookie.to_string()).unwrap(),
            );
            (StatusCode::OK, headers, Json(json!({ "success": true }))).into_response()
        }
        Err(err) => {
            error!(error = ?err, "failed to sign session token");
            JsonResponse::server_error("Token generation failed").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    use super::handle_issue_token;
    use crate::db::mock_db::MockDb;
    use crate::test_support::{test_jwt_keys, test_state};
    use crate::utils::jwt::decode_token;

    fn build_app() -> Router {
        let state = test_state(Arc::new(MockDb::default()));
        Router::new()
            .route("/token", post(handle_issue_token))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_issues_cookie_for_identity_payload() {
        let app = build_app();

        let res = app
            .oneshot(
                Request::post("/token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"email":"a@x.com","name":"Ada"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);

        let set_cookie = res.headers().get("set-cookie").unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("token="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("SameSite=Strict"));

        // The cookie value is a token that verifies and carries the payload.
        let raw = set_cookie
            .trim_start_matches("token=")
            .split(';')
            .next()
            .unwrap();
        let decoded = decode_token(raw, &test_jwt_keys()).unwrap();
        assert_eq!(decoded.claims.email, "a@x.com");
        assert_eq!(decoded.claims.name.as_deref(), Some("Ada"));

        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
    }

    #[tokio::test]
    async fn test_rejects_empty_identity() {
        let app = build_app();

        let res = app
            .oneshot(
                Request::post("/token")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"email":"  "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
