use std::time::Duration;

use serde::Deserialize;

pub mod air_quality;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod geoip;
pub mod weather;

pub use error::DataError;

pub const DATA_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
pub const GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint roots and credentials shared by every client. Base URLs are
/// overridable so tests can point at a local mock server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub data_base_url: String,
    pub geo_base_url: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            data_base_url: DATA_BASE_URL.to_string(),
            geo_base_url: GEO_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionBlock {
    pub(crate) id: u32,
    pub(crate) description: String,
    pub(crate) icon: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WindBlock {
    #[serde(default)]
    pub(crate) speed: f64,
    #[serde(default)]
    pub(crate) deg: f64,
}

/// The provider sends `weather` as an array; only the head entry matters.
pub(crate) fn first_condition(blocks: &[ConditionBlock]) -> (u32, String, String) {
    blocks.first().map_or_else(
        || (0, "Unknown".to_string(), String::new()),
        |block| (block.id, block.description.clone(), block.icon.clone()),
    )
}
