//! Preview de ruta
//!
//! Cliente del servicio de routing OSRM. El preview es puramente
//! cosmético: cualquier fallo degrada a "sin preview", nunca bloquea
//! el formulario.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::dto::route_dto::RoutePreviewResponse;

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Metros
    distance: f64,
    /// Segundos
    duration: f64,
    geometry: Option<serde_json::Value>,
}

pub struct RoutingService {
    osrm_url: String,
    client: reqwest::Client,
}

impl RoutingService {
    pub fn new(osrm_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self { osrm_url, client }
    }

    /// Calcular el preview de ruta entre dos puntos. Nunca devuelve error:
    /// el fallo se materializa como success=false.
    pub async fn preview(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> RoutePreviewResponse {
        match self.fetch_route(from_lat, from_lon, to_lat, to_lon).await {
            Ok(preview) => preview,
            Err(e) => {
                log::warn!("⚠️ Preview de ruta no disponible: {}", e);
                RoutePreviewResponse::unavailable(format!("Route preview unavailable: {}", e))
            }
        }
    }

    async fn fetch_route(
        &self,
        from_lat: f64,
        from_lon: f64,
        to_lat: f64,
        to_lon: f64,
    ) -> Result<RoutePreviewResponse> {
        // OSRM espera lon,lat
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.osrm_url.trim_end_matches('/'),
            from_lon,
            from_lat,
            to_lon,
            to_lat
        );

        log::info!("🛣️ Calculando ruta: ({}, {}) -> ({}, {})", from_lat, from_lon, to_lat, to_lon);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "VtcBooking/1.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Routing service returned status {}", status));
        }

        let body: OsrmResponse = response.json().await?;

        if body.code != "Ok" {
            return Err(anyhow!("Routing service returned code {}", body.code));
        }

        let route = body
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No route found"))?;

        let distance_km = (route.distance / 1000.0 * 100.0).round() / 100.0;
        let duration_minutes = (route.duration / 60.0).ceil();

        Ok(RoutePreviewResponse {
            success: true,
            distance_km: Some(distance_km),
            duration_minutes: Some(duration_minutes),
            duration_text: Some(format_duration(duration_minutes)),
            geometry: route.geometry,
            error: None,
        })
    }
}

/// Formatear minutos como texto legible: "45 min", "1 h 05 min"
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as i64;
    let hours = total / 60;
    let mins = total % 60;
    if hours > 0 {
        format!("{} h {:02} min", hours, mins)
    } else {
        format!("{} min", mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(45.0), "45 min");
        assert_eq!(format_duration(0.0), "0 min");
    }

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_duration(65.0), "1 h 05 min");
        assert_eq!(format_duration(120.0), "2 h 00 min");
    }

    #[test]
    fn test_parse_osrm_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [
                {
                    "distance": 27894.3,
                    "duration": 2345.6,
                    "geometry": { "type": "LineString", "coordinates": [[2.35, 48.85], [2.55, 49.0]] }
                }
            ]
        }"#;

        let parsed: OsrmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, "Ok");
        assert_eq!(parsed.routes.len(), 1);
        assert!((parsed.routes[0].distance - 27894.3).abs() < 1e-6);
    }

    #[test]
    fn test_parse_osrm_error_response() {
        let body = r#"{ "code": "NoRoute", "message": "Impossible route between points" }"#;
        let parsed: OsrmResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.code, "NoRoute");
        assert!(parsed.routes.is_empty());
    }
}
