use crate::{
    data::{DataError, geoip::DetectedLocation},
    domain::weather::{AirQualitySnapshot, CityMatch, ForecastSample, Units, WeatherSnapshot},
};

/// Everything the store reacts to: user intents plus the completions posted
/// back by spawned fetch tasks. Completions carry the sequence tag they were
/// dispatched under so stale ones can be dropped.
#[derive(Debug)]
pub enum AppEvent {
    SelectCity(String),
    SetUnits(Units),
    ToggleDarkMode,
    SearchInput(String),
    SearchReady(String),
    SelectSearchResult(CityMatch),
    UseCurrentLocation,
    LocationDetected {
        cycle: u64,
        located: Option<DetectedLocation>,
    },
    WeatherFetched {
        cycle: u64,
        result: Result<WeatherSnapshot, DataError>,
    },
    ForecastFetched {
        cycle: u64,
        result: Result<Vec<ForecastSample>, DataError>,
    },
    AirQualityFetched {
        cycle: u64,
        result: Result<AirQualitySnapshot, DataError>,
    },
    SearchCompleted {
        seq: u64,
        result: Result<Vec<CityMatch>, DataError>,
    },
    ComparisonFetched {
        seq: u64,
        snapshots: Vec<WeatherSnapshot>,
    },
}
