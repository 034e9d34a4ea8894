use std::collections::BTreeMap;

use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::AirQualitySnapshot;

use super::{ApiConfig, DataError, REQUEST_TIMEOUT, error::decode};

#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AirQualityClient {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client"),
            base_url: config.data_base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn fetch(&self, lat: f64, lon: f64) -> Result<AirQualitySnapshot, DataError> {
        let response = self
            .client
            .get(format!("{}/air_pollution", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let payload: AirPollutionResponse = decode("air_pollution", response).await?;
        let entry = payload.list.into_iter().next().ok_or_else(|| {
            DataError::UnexpectedPayload("air pollution response contained no samples".to_string())
        })?;

        Ok(AirQualitySnapshot {
            aqi: entry.main.aqi,
            components: entry.components,
        })
    }
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AqiBlock,
    #[serde(default)]
    components: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct AqiBlock {
    aqi: u8,
}
