// NOTE: async-stripe is compiled with a minimal feature set (runtime only).
// PaymentIntent lives in the core resource set; pulling in checkout/billing
// APIs would need an explicit Cargo.toml change.
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum PaymentServiceError {
    #[error("payment provider error: {0}")]
    Provider(String),
    #[error("invalid payment request: {0}")]
    InvalidRequest(String),
}

impl From<stripe::StripeError> for PaymentServiceError {
    fn from(err: stripe::StripeError) -> Self {
        PaymentServiceError::Provider(err.to_string())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in the currency's minor units (cents).
    pub amount: i64,
    pub currency: String,
}

/// The slice of the provider's intent object the application needs: the id
/// for bookkeeping and the opaque client secret the frontend confirms with.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentIntentSummary {
    pub id: String,
    pub client_secret: Option<String>,
}

#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntentSummary, PaymentServiceError>;
}

mod live;
mod mock;

#[allow(unused_imports)]
pub use live::LivePaymentService;
#[allow(unused_imports)]
pub use mock::MockPaymentService;
