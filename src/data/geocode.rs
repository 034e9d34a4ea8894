use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::CityMatch;

use super::{ApiConfig, DataError, REQUEST_TIMEOUT, error::decode};

pub const SEARCH_RESULT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeocodeClient {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client"),
            base_url: config.geo_base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<CityMatch>, DataError> {
        let response = self
            .client
            .get(format!("{}/direct", self.base_url))
            .query(&[
                ("q", query.to_string()),
                ("limit", limit.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let payload: Vec<GeoEntry> = decode("geocoding", response).await?;
        Ok(payload
            .into_iter()
            .map(|entry| CityMatch {
                name: entry.name,
                country: entry.country,
                state: entry.state,
                lat: entry.lat,
                lon: entry.lon,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct GeoEntry {
    name: String,
    #[serde(default)]
    country: String,
    state: Option<String>,
    lat: f64,
    lon: f64,
}
