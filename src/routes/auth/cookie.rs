use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration as TimeDuration;

use crate::config::Environment;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

fn base_attributes(cookie: Cookie<'static>, environment: Environment) -> Cookie<'static> {
    let mut cookie = cookie;
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(environment.is_production());
    // The production frontend is served from a different origin, so the
    // cookie must be sent cross-site there; development stays strict.
    cookie.set_same_site(if environment.is_production() {
        SameSite::None
    } else {
        SameSite::Strict
    });
    cookie
}

pub fn session_cookie(
    token: String,
    environment: Environment,
    max_age: TimeDuration,
) -> Cookie<'static> {
    let mut cookie = base_attributes(Cookie::new(SESSION_COOKIE, token), environment);
    cookie.set_max_age(max_age);
    cookie
}

/// Logout credential: same attributes, empty value, Max-Age=0. This only
/// clears the client copy; the token itself stays cryptographically valid
/// until its natural expiry (there is no server-side revocation list).
pub fn expired_session_cookie(environment: Environment) -> Cookie<'static> {
    let mut cookie = base_attributes(Cookie::new(SESSION_COOKIE, ""), environment);
    cookie.set_max_age(TimeDuration::seconds(0));
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_cookie_is_cross_site_and_secure() {
        let cookie = session_cookie(
            "abc".into(),
            Environment::Production,
            TimeDuration::days(365),
        );
        let rendered = cookie.to_string();
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=None"));
    }

    #[test]
    fn development_cookie_is_strict_and_plaintext_friendly() {
        let cookie = session_cookie(
            "abc".into(),
            Environment::Development,
            TimeDuration::days(365),
        );
        let rendered = cookie.to_string();
        assert!(rendered.contains("HttpOnly"));
        assert!(!rendered.contains("Secure"));
        assert!(rendered.contains("SameSite=Strict"));
    }

    #[test]
    fn logout_cookie_expires_immediately() {
        let rendered = expired_session_cookie(Environment::Development).to_string();
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.starts_with("token="));
    }
}
