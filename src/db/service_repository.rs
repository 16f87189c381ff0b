use async_trait::async_trait;
use uuid::Uuid;

use crate::models::service::ServiceListing;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list_services(&self) -> Result<Vec<ServiceListing>, sqlx::Error>;
    async fn find_service_by_id(&self, id: Uuid) -> Result<Option<ServiceListing>, sqlx::Error>;
}
