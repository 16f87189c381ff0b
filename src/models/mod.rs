pub mod contact;
pub mod service;
pub mod user;
pub mod work_entry;
