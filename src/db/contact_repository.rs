use async_trait::async_trait;

use crate::models::contact::{ContactMessage, NewContactMessage};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert_message(
        &self,
        message: &NewContactMessage,
    ) -> Result<ContactMessage, sqlx::Error>;
}
