//! Adaptador de pago
//!
//! Crea payment intents contra la API de Stripe. Toda la máquina de
//! estados del pago vive en el proveedor; aquí solo se pide el
//! client secret que monta el payment element en el cliente.

use serde::Deserialize;
use std::time::Duration;

use crate::dto::payment_dto::CreatePaymentIntentResponse;
use crate::utils::errors::{AppError, AppResult};

const STRIPE_PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: Option<String>,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

pub struct PaymentService {
    secret_key: String,
    client: reqwest::Client,
}

impl PaymentService {
    pub fn new(secret_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { secret_key, client }
    }

    /// Crear un payment intent. El importe llega en céntimos de euro.
    pub async fn create_payment_intent(
        &self,
        amount: i64,
    ) -> AppResult<CreatePaymentIntentResponse> {
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "El importe debe ser mayor que cero".to_string(),
            ));
        }

        log::info!("💳 Creando payment intent por {} céntimos", amount);

        let params = [
            ("amount", amount.to_string()),
            ("currency", "eur".to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        let response = self
            .client
            .post(STRIPE_PAYMENT_INTENTS_URL)
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("stripe: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalApi(format!("stripe: {}", e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<StripeErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error.message)
                .unwrap_or_else(|| format!("status {}", status));
            log::error!("❌ Stripe rechazó el payment intent: {}", message);
            return Err(AppError::ExternalApi(format!("stripe: {}", message)));
        }

        let intent: StripePaymentIntent = serde_json::from_str(&body)
            .map_err(|e| AppError::ExternalApi(format!("stripe: invalid response: {}", e)))?;

        log::info!("✅ Payment intent creado: {}", intent.id);

        Ok(CreatePaymentIntentResponse {
            client_secret: intent.client_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_non_positive_amount() {
        let service = PaymentService::new("sk_test_dummy".to_string());
        assert!(service.create_payment_intent(0).await.is_err());
        assert!(service.create_payment_intent(-100).await.is_err());
    }

    #[test]
    fn test_parse_payment_intent() {
        let body = r#"{
            "id": "pi_123",
            "client_secret": "pi_123_secret_456",
            "amount": 6000,
            "currency": "eur"
        }"#;
        let intent: StripePaymentIntent = serde_json::from_str(body).unwrap();
        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret, "pi_123_secret_456");
    }

    #[test]
    fn test_parse_error_envelope() {
        let body = r#"{
            "error": { "message": "Invalid API Key provided", "type": "invalid_request_error" }
        }"#;
        let envelope: StripeErrorEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(
            envelope.error.message.as_deref(),
            Some("Invalid API Key provided")
        );
        assert_eq!(
            envelope.error.error_type.as_deref(),
            Some("invalid_request_error")
        );
    }
}
