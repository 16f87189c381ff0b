use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A service listing shown on the public catalog page. Prices are minor
/// units (cents), the same unit the payment provider expects.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
}
