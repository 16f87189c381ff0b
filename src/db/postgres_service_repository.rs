use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::service::ServiceListing;

use super::service_repository::ServiceRepository;

pub struct PostgresServiceRepository {
    pub pool: PgPool,
}

#[async_trait]
impl ServiceRepository for PostgresServiceRepository {
    async fn list_services(&self) -> Result<Vec<ServiceListing>, sqlx::Error> {
        sqlx::query_as::<_, ServiceListing>(
            "SELECT id, title, description, category, price, image_url FROM services ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_service_by_id(&self, id: Uuid) -> Result<Option<ServiceListing>, sqlx::Error> {
        sqlx::query_as::<_, ServiceListing>(
            "SELECT id, title, description, category, price, image_url FROM services WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
