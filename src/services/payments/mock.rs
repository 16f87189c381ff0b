use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;

use super::{CreatePaymentIntentRequest, PaymentIntentSummary, PaymentService, PaymentServiceError};

#[derive(Clone, Default)]
pub struct MockPaymentService {
    pub created_intents: Arc<Mutex<Vec<CreatePaymentIntentRequest>>>,
    pub should_fail: bool,
}

impl MockPaymentService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

fn make_id(prefix: &str) -> String {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    format!("{}_{}", prefix, ts)
}

#[async_trait]
impl PaymentService for MockPaymentService {
    async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> Result<PaymentIntentSummary, PaymentServiceError> {
        if self.should_fail {
            return Err(PaymentServiceError::Provider(
                "mock provider unavailable".into(),
            ));
        }

        self.created_intents.lock().unwrap().push(req);

        let id = make_id("pi_test");
        let client_secret = format!("{}_secret_test", id);
        Ok(PaymentIntentSummary {
            id,
            client_secret: Some(client_secret),
        })
    }
}
