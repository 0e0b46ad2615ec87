use serde::{Deserialize, Serialize};

// Query del autocompletado de direcciones
#[derive(Debug, Deserialize)]
pub struct AddressSearchParams {
    pub q: String,
    /// Forzar proveedor: "mapbox" o "nominatim" (opcional)
    pub provider: Option<String>,
}

// Sugerencia normalizada, independiente del proveedor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressSuggestion {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: Option<String>,
    pub provider: String,
}

// Response del endpoint de búsqueda
#[derive(Debug, Serialize)]
pub struct AddressSearchResponse {
    pub success: bool,
    pub suggestions: Vec<AddressSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
