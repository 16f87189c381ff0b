use async_trait::async_trait;

use super::{CreatePaymentIntentRequest, PaymentIntentSummary, PaymentService, PaymentServiceError};

pub struct LivePaymentService {
    client: stripe::Client,
}

impl LivePaymentService {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            client: stripe::Client::new(secret_key),
        }
    }
}

#[async_trait]
impl PaymentService for LivePaymentService {
    async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntentSummary, PaymentServiceError> {
        if req.amount <= 0 {
            return Err(PaymentServiceError::InvalidRequest(format!(
                "amount must be positive, got {}",
                req.amount
            )));
        }

        let currency = req
            .currency
            .parse::<stripe::Currency>()
            .map_err(|e| PaymentServiceError::InvalidRequest(e.to_string()))?;

        let mut params = stripe::CreatePaymentIntent::new(req.amount, currency);
        params.payment_method_types = Some(vec!["card".to_string()]);

        let intent = stripe::PaymentIntent::create(&self.client, params).await?;
        Ok(PaymentIntentSummary {
            id: intent.id.to_string(),
            client_secret: intent.client_secret.clone(),
        })
    }
}
