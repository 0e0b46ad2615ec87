use anyhow::Result;
use axum::{response::Json, routing::get};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vtc_booking::cache::{redis_client::RedisClient, CacheConfig};
use vtc_booking::config::database::DatabaseConfig;
use vtc_booking::config::environment::EnvironmentConfig;
use vtc_booking::routes;
use vtc_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚖 VTC Booking - API de reservas de transporte con chófer");
    info!("=========================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Inicializar Redis (caché de búsqueda de direcciones)
    let redis_url = std::env::var("REDIS_URL")
        .unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let redis_config = CacheConfig {
        redis_url,
        default_ttl: 3600,
        max_connections: 10,
    };

    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => {
            info!("✅ Redis conectado exitosamente");
            client
        }
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    // Construir estado compartido: todos los clientes externos se construyen
    // aquí una sola vez y fallan al arranque si la configuración es inválida
    let app_state = match AppState::new(pool, config, redis_client) {
        Ok(state) => state,
        Err(e) => {
            error!("❌ Error inicializando servicios: {}", e);
            return Err(e);
        }
    };

    let app = routes::create_router(app_state).route("/health", get(health_endpoint));

    // Puerto del servidor
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📝 Endpoints públicos - Reservas:");
    info!("   POST /api/reservations - Crear reserva");
    info!("   POST /api/reservations/estimate - Estimar precio indicativo");
    info!("   POST /api/contact - Formulario de contacto");
    info!("📍 Endpoints públicos - Direcciones y rutas:");
    info!("   GET  /api/address/search - Autocompletado de direcciones");
    info!("   GET  /api/route/preview - Preview de ruta (distancia/duración)");
    info!("💳 Endpoints públicos - Pago:");
    info!("   POST /api/create-payment-intent - Crear payment intent");
    info!("🔐 Endpoints Admin:");
    info!("   POST /api/admin/auth - Login admin");
    info!("   GET  /api/admin/verify - Verificar token");
    info!("🚗 Endpoints Admin - Vehicle:");
    info!("   GET  /api/admin/vehicles - Listar vehículos");
    info!("   POST /api/admin/vehicles - Crear vehículo");
    info!("   PUT  /api/admin/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/admin/vehicles/:id - Eliminar vehículo");
    info!("💶 Endpoints Admin - Pricing:");
    info!("   GET  /api/admin/pricing - Listar tarifas");
    info!("   POST /api/admin/pricing - Crear tarifa");
    info!("   PUT  /api/admin/pricing/:id - Actualizar tarifa");
    info!("   DELETE /api/admin/pricing/:id - Eliminar tarifa");
    info!("📋 Endpoints Admin - Reservations:");
    info!("   GET  /api/admin/reservations - Listar reservas (paginado)");
    info!("   GET  /api/admin/reservations/:id - Detalle de reserva");
    info!("   DELETE /api/admin/reservations/:id - Eliminar reserva");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vtc-booking",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
