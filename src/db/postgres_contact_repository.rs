use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::contact::{ContactMessage, NewContactMessage};

use super::contact_repository::ContactRepository;

pub struct PostgresContactRepository {
    pub pool: PgPool,
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn insert_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error> {
        sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (name, email, message) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, email, message, created_at",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await
    }
}
