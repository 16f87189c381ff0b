use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::db::{
    contact_repository::ContactRepository, service_repository::ServiceRepository,
    user_repository::UserRepository, work_repository::WorkRepository,
};
use crate::services::payments::PaymentService;
use crate::utils::jwt::JwtKeys;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub work: Arc<dyn WorkRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub payments: Arc<dyn PaymentService>,
    pub jwt: JwtKeys,
    pub config: Arc<Config>,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> JwtKeys {
        state.jwt.clone()
    }
}
