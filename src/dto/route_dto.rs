use serde::{Deserialize, Serialize};

// Query del preview de ruta entre dos puntos ya geocodificados
#[derive(Debug, Deserialize)]
pub struct RoutePreviewParams {
    pub from_lat: f64,
    pub from_lon: f64,
    pub to_lat: f64,
    pub to_lon: f64,
}

// Response del preview. El fallo degrada a success=false, nunca bloquea.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoutePreviewResponse {
    pub success: bool,
    pub distance_km: Option<f64>,
    pub duration_minutes: Option<f64>,
    pub duration_text: Option<String>,
    pub geometry: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RoutePreviewResponse {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            success: false,
            distance_km: None,
            duration_minutes: None,
            duration_text: None,
            geometry: None,
            error: Some(message.into()),
        }
    }
}
