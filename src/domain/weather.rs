use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod bucket;
pub mod conversions;

pub use bucket::{MAX_FORECAST_DAYS, bucket_by_day, bucket_by_day_in};

/// Unit system passed through to the provider, which converts server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Standard,
}

impl Units {
    #[must_use]
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    #[must_use]
    pub fn temp_symbol(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Standard => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// One observation of current conditions. Replaced wholesale on every
/// fetch cycle, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub coordinates: Option<Coordinates>,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure_hpa: u32,
    pub wind_speed: f64,
    pub wind_direction_deg: f64,
    pub visibility_m: Option<u32>,
    pub condition_id: u32,
    pub condition: String,
    pub icon: String,
    pub observed_at: DateTime<Utc>,
}

/// Raw 3-hour forecast sample as returned by the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition_id: u32,
    pub condition: String,
    pub icon: String,
    pub wind_speed: f64,
    pub pop: f64,
}

/// Per-calendar-day aggregate derived from [`ForecastSample`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition_id: u32,
    pub condition: String,
    pub icon: String,
    pub wind_speed: f64,
    pub pop: f64,
}

/// Air-quality reading for the coordinates of the current snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct AirQualitySnapshot {
    pub aqi: u8,
    pub components: BTreeMap<String, f64>,
}

/// Geocoding candidate for an in-flight search query.
#[derive(Debug, Clone, PartialEq)]
pub struct CityMatch {
    pub name: String,
    pub country: String,
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl CityMatch {
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.state {
            Some(state) => format!("{}, {}, {}", self.name, state, self.country),
            None => format!("{}, {}", self.name, self.country),
        }
    }
}
