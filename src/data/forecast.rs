use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{ForecastSample, Units};

use super::{
    ApiConfig, ConditionBlock, DataError, REQUEST_TIMEOUT, WindBlock, error::decode,
    first_condition,
};

/// 5 days x 8 three-hour intervals, the provider's full page.
const FORECAST_SAMPLE_COUNT: u32 = 40;

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastClient {
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

    pub async fn fetch(&self, city: &str, units: Units) -> Result<Vec<ForecastSample>, DataError> {
        let response = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("q", city.to_string()),
                ("appid", self.api_key.clone()),
                ("units", units.as_query().to_string()),
                ("cnt", FORECAST_SAMPLE_COUNT.to_string()),
            ])
            .send()
            .await?;

        let payload: ForecastResponse = decode("forecast", response).await?;
        Ok(payload.into_samples())
    }

    pub async fn fetch_by_coords(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<Vec<ForecastSample>, DataError> {
        let response = self
            .client
            .get(format!("{}/forecast", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", units.as_query().to_string()),
                ("cnt", FORECAST_SAMPLE_COUNT.to_string()),
            ])
            .send()
            .await?;

        let payload: ForecastResponse = decode("forecast", response).await?;
        Ok(payload.into_samples())
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt: i64,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
    #[serde(default)]
    pop: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
}

impl ForecastResponse {
    fn into_samples(self) -> Vec<ForecastSample> {
        self.list
            .into_iter()
            .map(|entry| {
                let (condition_id, condition, icon) = first_condition(&entry.weather);
                ForecastSample {
                    timestamp: DateTime::from_timestamp(entry.dt, 0).unwrap_or_else(Utc::now),
                    temp: entry.main.temp,
                    temp_min: entry.main.temp_min,
                    temp_max: entry.main.temp_max,
                    condition_id,
                    condition,
                    icon,
                    wind_speed: entry.wind.map_or(0.0, |wind| wind.speed),
                    pop: entry.pop,
                }
            })
            .collect()
    }
}
