pub mod contact_repository;
pub mod mock_db;
pub mod postgres_contact_repository;
pub mod postgres_service_repository;
pub mod postgres_user_repository;
pub mod postgres_work_repository;
pub mod service_repository;
pub mod user_repository;
pub mod work_repository;
