pub mod auth;
pub mod contact;
pub mod employees;
pub mod payments;
pub mod services;
pub mod users;
pub mod work;
