use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::responses::JsonResponse;
use crate::routes::auth::cookie::expired_session_cookie;
use crate::state::AppState;

/// Client-side invalidation only: the stored cookie is overwritten with an
/// already-expired one. A copy of the token taken before logout keeps
/// verifying until its natural expiry.
pub async fn handle_logout(State(state): State<AppState>) -> impl IntoResponse {
    let expired_cookie = expired_session_cookie(state.config.environment);

    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&expired_cookie.to_string()).unwrap(),
    );

    (StatusCode::OK, headers, JsonResponse::success("Logged out"))
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
    use chrono::Duration;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::handle_logout;
    use crate::db::mock_db::MockDb;
    use crate::routes::auth::claims::Claims;
    use crate::test_support::{test_jwt_keys, test_state};
    use crate::utils::jwt::{decode_token, issue_token};

    fn build_app() -> Router {
        let state = test_state(Arc::new(MockDb::default()));
        Router::new()
            .route("/logout", post(handle_logout))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_logout_clears_session_cookie_and_returns_success() {
        let app = build_app();

        let res = app
            .oneshot(
                Request::post("/logout")
                    .header("Content-Type", "application/json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);

        let set_cookie_header = res.headers().get("set-cookie").unwrap().to_str().unwrap();
        assert!(set_cookie_header.starts_with("token="));
        assert!(set_cookie_header.contains("Max-Age=0"));
        assert!(set_cookie_header.contains("HttpOnly"));

        let body_bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Logged out");
    }

    #[tokio::test]
    async fn test_token_captured_before_logout_still_verifies() {
        // Documents the accepted limitation: logout clears the cookie but
        // cannot revoke the token itself.
        let keys = test_jwt_keys();
        let claims = Claims::new("a@x.com".into(), None, Duration::hours(1));
        let captured = issue_token(&claims, &keys).unwrap();

        let app = build_app();
        let res = app
            .oneshot(Request::post("/logout").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let decoded = decode_token(&captured, &keys).unwrap();
        assert_eq!(decoded.claims.email, "a@x.com");
    }
}
