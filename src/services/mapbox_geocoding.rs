//! Proveedor de autocompletado Mapbox
//!
//! Forward geocoding v6, restringido a Francia.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::dto::address_dto::AddressSuggestion;
use crate::services::address_search_service::AddressProvider;

#[derive(Debug, Deserialize)]
struct MapboxGeocodingResponse {
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    geometry: MapboxGeometry,
    properties: MapboxProperties,
}

#[derive(Debug, Deserialize)]
struct MapboxGeometry {
    coordinates: Vec<f64>, // [longitude, latitude]
}

#[derive(Debug, Deserialize)]
struct MapboxProperties {
    mapbox_id: Option<String>,
    full_address: Option<String>,
    name: Option<String>,
    place_formatted: Option<String>,
}

pub struct MapboxAddressProvider {
    mapbox_token: String,
    client: reqwest::Client,
}

impl MapboxAddressProvider {
    pub fn new(mapbox_token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            mapbox_token,
            client,
        }
    }

    fn parse_response(body: &str) -> Result<Vec<AddressSuggestion>> {
        let response: MapboxGeocodingResponse = serde_json::from_str(body)
            .map_err(|e| anyhow!("Failed to parse geocoding response: {}", e))?;

        let suggestions = response
            .features
            .into_iter()
            .filter(|feature| feature.geometry.coordinates.len() >= 2)
            .map(|feature| {
                let longitude = feature.geometry.coordinates[0];
                let latitude = feature.geometry.coordinates[1];

                let label = feature
                    .properties
                    .full_address
                    .or(feature.properties.place_formatted)
                    .or(feature.properties.name)
                    .unwrap_or_else(|| format!("{}, {}", latitude, longitude));

                AddressSuggestion {
                    label,
                    latitude,
                    longitude,
                    place_id: feature.properties.mapbox_id,
                    provider: "mapbox".to_string(),
                }
            })
            .collect();

        Ok(suggestions)
    }
}

#[async_trait]
impl AddressProvider for MapboxAddressProvider {
    fn name(&self) -> &'static str {
        "mapbox"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<AddressSuggestion>> {
        log::info!("🗺️ Buscando dirección en Mapbox: {}", query);

        let encoded_query = urlencoding::encode(query);

        let url = format!(
            "https://api.mapbox.com/search/geocode/v6/forward?q={}&access_token={}&country=fr&limit={}",
            encoded_query, self.mapbox_token, limit
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "VtcBooking/1.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Mapbox geocoding failed with status {}: {}", status, error_text);
            return Err(anyhow!("Geocoding failed: {}", status));
        }

        let body = response.text().await?;
        let suggestions = Self::parse_response(&body)?;

        log::info!("✅ Mapbox devolvió {} sugerencias", suggestions.len());
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [2.3522, 48.8566] },
                    "properties": {
                        "mapbox_id": "abc123",
                        "full_address": "10 Rue de Rivoli, 75004 Paris, France",
                        "name": "10 Rue de Rivoli"
                    }
                }
            ]
        }"#;

        let suggestions = MapboxAddressProvider::parse_response(body).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label, "10 Rue de Rivoli, 75004 Paris, France");
        assert_eq!(suggestions[0].latitude, 48.8566);
        assert_eq!(suggestions[0].longitude, 2.3522);
        assert_eq!(suggestions[0].place_id.as_deref(), Some("abc123"));
        assert_eq!(suggestions[0].provider, "mapbox");
    }

    #[test]
    fn test_parse_response_without_coordinates() {
        let body = r#"{
            "features": [
                { "geometry": { "coordinates": [] }, "properties": {} }
            ]
        }"#;

        let suggestions = MapboxAddressProvider::parse_response(body).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_parse_invalid_body() {
        assert!(MapboxAddressProvider::parse_response("not json").is_err());
    }

    #[tokio::test]
    async fn test_mapbox_search_live() {
        // Requiere un token válido: cargo test -- --ignored con MAPBOX_TOKEN
        let token = std::env::var("MAPBOX_TOKEN").unwrap_or_default();
        if token.is_empty() {
            println!("⚠️ Skipping test: MAPBOX_TOKEN not set");
            return;
        }

        let provider = MapboxAddressProvider::new(token);
        let result = provider.search("15 Rue de la Paix, Paris", 5).await;

        match result {
            Ok(suggestions) => {
                assert!(!suggestions.is_empty());
                assert!(suggestions[0].latitude > 40.0);
            }
            Err(e) => {
                println!("❌ Mapbox error: {}", e);
            }
        }
    }
}
