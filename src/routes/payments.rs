use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::responses::JsonResponse;
use crate::services::payments::{CreatePaymentIntentRequest, PaymentServiceError};
use crate::state::AppState;

/// Salary payments are charged in USD minor units.
const PAYMENT_CURRENCY: &str = "usd";

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateIntentPayload {
    pub amount: i64,
}

// HR-gated at the router layer (the salary-payment flow).
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreateIntentPayload>,
) -> Response {
    let request = CreatePaymentIntentRequest {
        amount: payload.amount,
        currency: PAYMENT_CURRENCY.into(),
    };

    match state.payments.create_payment_intent(request).await {
        Ok(intent) => Json(json!({ "clientSecret": intent.client_secret })).into_response(),
        Err(PaymentServiceError::InvalidRequest(msg)) => {
            JsonResponse::bad_request(&msg).into_response()
        }
        Err(err) => {
            error!(error = ?err, "payment provider rejected intent creation");
            JsonResponse::server_error("Payment provider error").into_response()
        }
    }
}
