//! Shared fixtures for the colocated test modules.

use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use chrono::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::config::{Config, Environment};
use crate::db::mock_db::MockDb;
use crate::models::user::{User, UserRole};
use crate::routes::auth::claims::Claims;
use crate::routes::auth::cookie::SESSION_COOKIE;
use crate::services::payments::MockPaymentService;
use crate::state::AppState;
use crate::utils::jwt::{issue_token, JwtKeys};

const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

pub fn test_jwt_keys() -> JwtKeys {
    JwtKeys::from_secret(TEST_SECRET).expect("test secret should be accepted")
}

pub fn test_config() -> Arc<Config> {
    Arc::new(Config {
        database_url: String::new(),
        frontend_origin: "http://localhost:5173".into(),
        environment: Environment::Development,
        bind_port: 5000,
        stripe_secret_key: "sk_test_dummy".into(),
    })
}

pub fn test_state(db: Arc<MockDb>) -> AppState {
    test_state_with_payments(db, Arc::new(MockPaymentService::new()))
}

pub fn test_state_with_payments(
    db: Arc<MockDb>,
    payments: Arc<MockPaymentService>,
) -> AppState {
    AppState {
        users: db.clone(),
        services: db.clone(),
        work: db.clone(),
        contacts: db,
        payments,
        jwt: test_jwt_keys(),
        config: test_config(),
    }
}

pub fn test_user(email: &str, role: Option<UserRole>) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.into(),
        name: "Test User".into(),
        role,
        designation: None,
        bank_account_no: None,
        salary: Some(5000_00),
        photo_url: None,
        is_verified: false,
        is_fired: false,
        created_at: OffsetDateTime::now_utc(),
    }
}

/// Cookie header value carrying a freshly issued token for `email`.
pub fn auth_cookie_for(email: &str) -> String {
    let claims = Claims::new(email.into(), None, Duration::hours(1));
    let token = issue_token(&claims, &test_jwt_keys()).expect("token should encode");
    Cookie::new(SESSION_COOKIE, token).to_string()
}
