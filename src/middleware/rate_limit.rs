//! Middleware de Rate Limiting
//!
//! Dos niveles: un limitador general por IP para la API pública y un
//! limitador de envíos de formulario por cliente y tipo de formulario
//! con ventana deslizante (el envío más antiguo "caduca" y libera hueco).

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

/// Extraer la IP del cliente de los headers del proxy
pub fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .split(',')
        .next()
        .unwrap_or("unknown")
        .trim()
        .to_string()
}

// ---------------------------------------------------------------------------
// Limitador general por IP (ventana fija)
// ---------------------------------------------------------------------------

/// Información de rate limiting por IP
#[derive(Debug, Clone)]
struct RateLimitInfo {
    requests: u32,
    window_start: Instant,
}

/// Estado global del rate limiting por IP
#[derive(Clone)]
pub struct RateLimitState {
    requests: Arc<RwLock<HashMap<String, RateLimitInfo>>>,
    max_requests: u32,
    window_duration: Duration,
}

impl RateLimitState {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            requests: Arc::new(RwLock::new(HashMap::new())),
            max_requests: config.rate_limit_requests,
            window_duration: Duration::from_secs(config.rate_limit_window),
        }
    }

    /// Verificar si una IP ha excedido el límite
    pub async fn check_rate_limit(&self, ip: &str) -> Result<(), ()> {
        let mut requests = self.requests.write().await;
        let now = Instant::now();

        // Limpiar entradas expiradas
        requests.retain(|_, info| now.duration_since(info.window_start) < self.window_duration);

        let info = requests.entry(ip.to_string()).or_insert(RateLimitInfo {
            requests: 0,
            window_start: now,
        });

        if now.duration_since(info.window_start) >= self.window_duration {
            info.requests = 1;
            info.window_start = now;
            return Ok(());
        }

        if info.requests >= self.max_requests {
            return Err(());
        }

        info.requests += 1;
        Ok(())
    }
}

/// Middleware de rate limiting por IP
pub async fn rate_limit_middleware(
    State(rate_limit_state): State<RateLimitState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    let ip = client_ip(request.headers());

    if rate_limit_state.check_rate_limit(&ip).await.is_err() {
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            "Rate limit exceeded. Please try again later.".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

// ---------------------------------------------------------------------------
// Limitador de formularios (ventana deslizante por cliente y tipo)
// ---------------------------------------------------------------------------

/// Limitador de envíos de formulario. Guarda los timestamps de cada envío
/// y permite uno nuevo mientras haya menos de `max_submissions` dentro de
/// la ventana.
#[derive(Clone)]
pub struct FormRateLimiter {
    submissions: Arc<RwLock<HashMap<String, VecDeque<Instant>>>>,
    max_submissions: usize,
    window: Duration,
}

impl FormRateLimiter {
    pub fn new(max_submissions: usize, window: Duration) -> Self {
        Self {
            submissions: Arc::new(RwLock::new(HashMap::new())),
            max_submissions,
            window,
        }
    }

    fn key(form_type: &str, client_key: &str) -> String {
        format!("{}:{}", form_type, client_key)
    }

    fn prune(&self, queue: &mut VecDeque<Instant>, now: Instant) {
        while let Some(oldest) = queue.front() {
            if now.duration_since(*oldest) >= self.window {
                queue.pop_front();
            } else {
                break;
            }
        }
    }

    /// ¿Puede este cliente enviar este tipo de formulario ahora mismo?
    pub async fn can_submit(&self, form_type: &str, client_key: &str) -> bool {
        let key = Self::key(form_type, client_key);
        let now = Instant::now();
        let mut submissions = self.submissions.write().await;

        match submissions.get_mut(&key) {
            Some(queue) => {
                self.prune(queue, now);
                queue.len() < self.max_submissions
            }
            None => true,
        }
    }

    /// Registrar un envío aceptado
    pub async fn record_submission(&self, form_type: &str, client_key: &str) {
        let key = Self::key(form_type, client_key);
        let now = Instant::now();
        let mut submissions = self.submissions.write().await;

        let queue = submissions.entry(key).or_default();
        self.prune(queue, now);
        queue.push_back(now);
    }

    /// Segundos hasta que el envío más antiguo salga de la ventana
    pub async fn retry_after(&self, form_type: &str, client_key: &str) -> Option<Duration> {
        let key = Self::key(form_type, client_key);
        let now = Instant::now();
        let submissions = self.submissions.read().await;

        let oldest = submissions.get(&key)?.front()?;
        let elapsed = now.duration_since(*oldest);
        if elapsed >= self.window {
            None
        } else {
            Some(self.window - elapsed)
        }
    }

    /// Verificar y registrar en una sola operación. Devuelve 429 con el
    /// countdown cuando el límite está agotado.
    pub async fn check_and_record(
        &self,
        form_type: &str,
        client_key: &str,
    ) -> Result<(), AppError> {
        if self.can_submit(form_type, client_key).await {
            self.record_submission(form_type, client_key).await;
            Ok(())
        } else {
            let retry_after_seconds = self
                .retry_after(form_type, client_key)
                .await
                .map(|d| d.as_secs().max(1))
                .unwrap_or(1);
            Err(AppError::RateLimitExceeded {
                retry_after_seconds,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allows_up_to_limit() {
        let limiter = FormRateLimiter::new(5, Duration::from_secs(60));

        for _ in 0..5 {
            assert!(limiter.can_submit("reservation", "1.2.3.4").await);
            limiter.record_submission("reservation", "1.2.3.4").await;
        }

        assert!(!limiter.can_submit("reservation", "1.2.3.4").await);
    }

    #[tokio::test]
    async fn test_form_types_are_independent() {
        let limiter = FormRateLimiter::new(1, Duration::from_secs(60));

        limiter.record_submission("reservation", "1.2.3.4").await;
        assert!(!limiter.can_submit("reservation", "1.2.3.4").await);
        assert!(limiter.can_submit("contact", "1.2.3.4").await);
    }

    #[tokio::test]
    async fn test_clients_are_independent() {
        let limiter = FormRateLimiter::new(1, Duration::from_secs(60));

        limiter.record_submission("reservation", "1.2.3.4").await;
        assert!(limiter.can_submit("reservation", "5.6.7.8").await);
    }

    #[tokio::test]
    async fn test_oldest_submission_ages_out() {
        let limiter = FormRateLimiter::new(2, Duration::from_millis(100));

        limiter.record_submission("reservation", "1.2.3.4").await;
        limiter.record_submission("reservation", "1.2.3.4").await;
        assert!(!limiter.can_submit("reservation", "1.2.3.4").await);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(limiter.can_submit("reservation", "1.2.3.4").await);
    }

    #[tokio::test]
    async fn test_check_and_record_returns_countdown() {
        let limiter = FormRateLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.check_and_record("contact", "1.2.3.4").await.is_ok());

        match limiter.check_and_record("contact", "1.2.3.4").await {
            Err(AppError::RateLimitExceeded {
                retry_after_seconds,
            }) => {
                assert!(retry_after_seconds >= 1);
                assert!(retry_after_seconds <= 60);
            }
            other => panic!("Se esperaba RateLimitExceeded, llegó {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_client_ip_from_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());
        assert_eq!(client_ip(&headers), "203.0.113.9");

        let empty = HeaderMap::new();
        assert_eq!(client_ip(&empty), "unknown");
    }
}
