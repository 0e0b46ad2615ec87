use validator::Validate;

use crate::dto::contact_dto::{ContactRequest, ContactResponse};
use crate::dto::ApiResponse;
use crate::middleware::rate_limit::FormRateLimiter;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::sanitize::{find_suspicious_pattern, sanitize_text};

const FORM_TYPE: &str = "contact";

pub struct ContactController {
    form_limiter: FormRateLimiter,
}

impl ContactController {
    pub fn new(state: &AppState) -> Self {
        Self {
            form_limiter: state.form_limiter.clone(),
        }
    }

    /// Envío del formulario de contacto. El mensaje se valida, se sanea
    /// y se registra en el log; no hay tabla de contacto que persistir.
    pub async fn submit(
        &self,
        client_key: &str,
        request: ContactRequest,
    ) -> Result<ApiResponse<ContactResponse>, AppError> {
        // Honeypot: responder como aceptado sin procesar
        if !request.website.trim().is_empty() {
            log::warn!(
                "🕵️ Actividad sospechosa: honeypot relleno desde {}",
                client_key
            );
            return Ok(ApiResponse::success(ContactResponse { received: true }));
        }

        // Patrones de inyección
        for field in [
            Some(request.full_name.as_str()),
            request.subject.as_deref(),
            Some(request.message.as_str()),
        ]
        .into_iter()
        .flatten()
        {
            if let Some(pattern) = find_suspicious_pattern(field) {
                log::warn!(
                    "🕵️ Actividad sospechosa detectada ({}) desde {}: envío bloqueado",
                    pattern,
                    client_key
                );
                return Err(AppError::BadRequest(
                    "El contenido del formulario no es válido".to_string(),
                ));
            }
        }

        // Rate limit independiente del formulario de reserva
        self.form_limiter
            .check_and_record(FORM_TYPE, client_key)
            .await?;

        request.validate()?;

        let full_name = sanitize_text(&request.full_name);
        let subject = request.subject.as_deref().map(sanitize_text);
        let message = sanitize_text(&request.message);

        log::info!(
            "📨 Mensaje de contacto de '{}' <{}> [{}]: {}",
            full_name,
            request.email,
            subject.unwrap_or_else(|| "sin asunto".to_string()),
            message
        );

        Ok(ApiResponse::success_with_message(
            ContactResponse { received: true },
            "Mensaje recibido, te responderemos lo antes posible".to_string(),
        ))
    }
}
