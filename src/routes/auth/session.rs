use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::routes::auth::claims::Claims;
use crate::routes::auth::cookie::SESSION_COOKIE;
use crate::routes::auth::guard::AuthError;
use crate::utils::jwt::{decode_token, JwtKeys};

/// The verified identity for the current request. Extracting this IS the
/// verification step: an absent, tampered, or expired credential all reject
/// uniformly with 401 before the handler runs.
#[derive(Debug, PartialEq)]
pub struct AuthSession(pub Claims);

impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(AuthError::Unauthenticated)?;

        let data = decode_token(token.value(), &keys).map_err(|_| AuthError::Unauthenticated)?;

        Ok(AuthSession(data.claims))
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::FromRequestParts,
        http::{header, Method, Request},
    };
    use axum_extra::extract::cookie::Cookie;
    use chrono::Duration;

    use crate::routes::auth::claims::Claims;
    use crate::routes::auth::guard::AuthError;
    use crate::routes::auth::session::AuthSession;
    use crate::test_support::test_jwt_keys;
    use crate::utils::jwt::issue_token;

    fn make_valid_jwt() -> String {
        let claims = Claims::new(
            "test@example.com".into(),
            Some("Test User".into()),
            Duration::hours(1),
        );
        issue_token(&claims, &test_jwt_keys()).expect("JWT should create successfully")
    }

    #[tokio::test]
    async fn test_valid_token_extracted() {
        let jwt = make_valid_jwt();
        let cookie = Cookie::new("token", jwt);

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(header::COOKIE, cookie.to_string())
            .body(())
            .unwrap();

        let mut parts = request.into_parts().0;
        let result = AuthSession::from_request_parts(&mut parts, &test_jwt_keys()).await;

        let session = result.expect("valid token should be accepted");
        assert_eq!(session.0.email, "test@example.com");
        assert_eq!(session.0.name.as_deref(), Some("Test User"));
    }

    #[tokio::test]
    async fn test_missing_cookie_returns_unauthorized() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .body(())
            .unwrap();

        let mut parts = request.into_parts().0;
        let result = AuthSession::from_request_parts(&mut parts, &test_jwt_keys()).await;

        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_invalid_token_returns_unauthorized() {
        let cookie = Cookie::new("token", "invalid.token.here");

        let request = Request::builder()
            .method(Method::GET)
            .uri("/")
            .header(header::COOKIE, cookie.to_string())
            .body(())
            .unwrap();

        let mut parts = request.into_parts().0;
        let result = AuthSession::from_request_parts(&mut parts, &test_jwt_keys()).await;

        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }
}
