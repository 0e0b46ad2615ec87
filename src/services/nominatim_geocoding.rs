//! Proveedor de autocompletado Nominatim (datos abiertos OSM)
//!
//! La política de uso de Nominatim exige un User-Agent identificable.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::dto::address_dto::AddressSuggestion;
use crate::services::address_search_service::AddressProvider;

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    place_id: u64,
    display_name: String,
    lat: String,
    lon: String,
}

pub struct NominatimAddressProvider {
    base_url: String,
    client: reqwest::Client,
}

impl NominatimAddressProvider {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    fn parse_response(body: &str) -> Result<Vec<AddressSuggestion>> {
        let places: Vec<NominatimPlace> = serde_json::from_str(body)
            .map_err(|e| anyhow!("Failed to parse Nominatim response: {}", e))?;

        let suggestions = places
            .into_iter()
            .filter_map(|place| {
                let latitude = place.lat.parse::<f64>().ok()?;
                let longitude = place.lon.parse::<f64>().ok()?;
                Some(AddressSuggestion {
                    label: place.display_name,
                    latitude,
                    longitude,
                    place_id: Some(place.place_id.to_string()),
                    provider: "nominatim".to_string(),
                })
            })
            .collect();

        Ok(suggestions)
    }
}

#[async_trait]
impl AddressProvider for NominatimAddressProvider {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<AddressSuggestion>> {
        log::info!("🗺️ Buscando dirección en Nominatim: {}", query);

        let encoded_query = urlencoding::encode(query);

        let url = format!(
            "{}/search?q={}&format=jsonv2&limit={}&countrycodes=fr",
            self.base_url.trim_end_matches('/'),
            encoded_query,
            limit
        );

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "VtcBooking/1.0 (reservas)")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Nominatim failed with status {}: {}", status, error_text);
            return Err(anyhow!("Nominatim search failed: {}", status));
        }

        let body = response.text().await?;
        let suggestions = Self::parse_response(&body)?;

        log::info!("✅ Nominatim devolvió {} sugerencias", suggestions.len());
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        let body = r#"[
            {
                "place_id": 88063261,
                "display_name": "Rue de Rivoli, Quartier Saint-Merri, Paris, France",
                "lat": "48.8558962",
                "lon": "2.3563536"
            },
            {
                "place_id": 12345,
                "display_name": "Rue de Rivoli, Quartier des Halles, Paris, France",
                "lat": "48.8611474",
                "lon": "2.3413526"
            }
        ]"#;

        let suggestions = NominatimAddressProvider::parse_response(body).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(
            suggestions[0].label,
            "Rue de Rivoli, Quartier Saint-Merri, Paris, France"
        );
        assert!((suggestions[0].latitude - 48.8558962).abs() < 1e-9);
        assert_eq!(suggestions[0].place_id.as_deref(), Some("88063261"));
        assert_eq!(suggestions[0].provider, "nominatim");
    }

    #[test]
    fn test_parse_empty_response() {
        let suggestions = NominatimAddressProvider::parse_response("[]").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_parse_skips_bad_coordinates() {
        let body = r#"[
            { "place_id": 1, "display_name": "x", "lat": "not-a-number", "lon": "2.0" }
        ]"#;
        let suggestions = NominatimAddressProvider::parse_response(body).unwrap();
        assert!(suggestions.is_empty());
    }
}
