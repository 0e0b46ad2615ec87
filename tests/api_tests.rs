use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

// Router mínimo con los endpoints sin estado, para smoke tests del
// wiring HTTP sin base de datos ni Redis
fn create_test_app() -> Router {
    Router::new().route(
        "/health",
        get(|| async {
            Json(json!({
                "service": "vtc-booking",
                "status": "healthy"
            }))
        }),
    )
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["service"], "vtc-booking");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
