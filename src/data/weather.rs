use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::{Coordinates, Units, WeatherSnapshot};

use super::{
    ApiConfig, ConditionBlock, DataError, REQUEST_TIMEOUT, WindBlock, error::decode,
    first_condition,
};

#[derive(Debug, Clone)]
pub struct CurrentWeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CurrentWeatherClient {
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

    pub async fn fetch(&self, city: &str, units: Units) -> Result<WeatherSnapshot, DataError> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", units.as_query()),
            ])
            .send()
            .await?;

        let payload: CurrentResponse = decode("weather", response).await?;
        Ok(payload.into_snapshot())
    }

    pub async fn fetch_by_coords(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
    ) -> Result<WeatherSnapshot, DataError> {
        let response = self
            .client
            .get(format!("{}/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", units.as_query().to_string()),
            ])
            .send()
            .await?;

        let payload: CurrentResponse = decode("weather", response).await?;
        Ok(payload.into_snapshot())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    dt: i64,
    coord: Option<CoordBlock>,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<ConditionBlock>,
    wind: Option<WindBlock>,
    visibility: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CoordBlock {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

impl CurrentResponse {
    fn into_snapshot(self) -> WeatherSnapshot {
        let (condition_id, condition, icon) = first_condition(&self.weather);
        let (wind_speed, wind_direction_deg) = self
            .wind
            .map_or((0.0, 0.0), |wind| (wind.speed, wind.deg));

        WeatherSnapshot {
            location_name: self.name,
            coordinates: self.coord.map(|coord| Coordinates {
                lat: coord.lat,
                lon: coord.lon,
            }),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed,
            wind_direction_deg,
            visibility_m: self.visibility,
            condition_id,
            condition,
            icon,
            observed_at: DateTime::from_timestamp(self.dt, 0).unwrap_or_else(Utc::now),
        }
    }
}
