//! Propiedades del rate limit de formularios: 5 envíos por ventana,
//! ventana deslizante, contadores independientes por cliente y formulario.

use std::time::Duration;

use vtc_booking::middleware::rate_limit::FormRateLimiter;

#[tokio::test]
async fn test_five_submissions_allowed_then_blocked() {
    let limiter = FormRateLimiter::new(5, Duration::from_secs(3600));

    for i in 0..5 {
        assert!(
            limiter.can_submit("reservation", "client-a").await,
            "el envío {} debería estar permitido",
            i + 1
        );
        limiter.record_submission("reservation", "client-a").await;
    }

    assert!(!limiter.can_submit("reservation", "client-a").await);
}

#[tokio::test]
async fn test_blocked_until_oldest_ages_out() {
    let limiter = FormRateLimiter::new(2, Duration::from_millis(200));

    limiter.record_submission("reservation", "client-a").await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    limiter.record_submission("reservation", "client-a").await;

    assert!(!limiter.can_submit("reservation", "client-a").await);

    // Al caducar los envíos de la ventana se vuelve a permitir
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(limiter.can_submit("reservation", "client-a").await);
}

#[tokio::test]
async fn test_retry_after_counts_down() {
    let limiter = FormRateLimiter::new(1, Duration::from_secs(60));

    limiter.record_submission("contact", "client-a").await;

    let retry_after = limiter
        .retry_after("contact", "client-a")
        .await
        .expect("debería haber countdown");
    assert!(retry_after <= Duration::from_secs(60));
    assert!(retry_after > Duration::from_secs(50));
}

#[tokio::test]
async fn test_counters_are_per_client_and_per_form() {
    let limiter = FormRateLimiter::new(1, Duration::from_secs(3600));

    limiter.record_submission("reservation", "client-a").await;

    assert!(!limiter.can_submit("reservation", "client-a").await);
    assert!(limiter.can_submit("reservation", "client-b").await);
    assert!(limiter.can_submit("contact", "client-a").await);
}
