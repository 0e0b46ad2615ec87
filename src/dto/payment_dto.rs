use serde::{Deserialize, Serialize};
use validator::Validate;

// Request de creación de payment intent. Importe en céntimos de euro.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentIntentRequest {
    #[validate(range(min = 1))]
    pub amount: i64,
}

// Response con el client secret del proveedor de pago
#[derive(Debug, Serialize)]
pub struct CreatePaymentIntentResponse {
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}
