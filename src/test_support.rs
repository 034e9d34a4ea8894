use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{
        AirQualitySnapshot, CityMatch, Coordinates, ForecastSample, WeatherSnapshot,
    },
};

pub(crate) fn test_cli() -> Cli {
    Cli {
        city: None,
        units: None,
        search: None,
        locate: false,
        compare: false,
        toggle_dark_mode: false,
        api_key: Some("test-key".to_string()),
        data_url: Some("http://127.0.0.1:9".to_string()),
        geo_url: Some("http://127.0.0.1:9".to_string()),
        no_persist: true,
    }
}

pub(crate) fn test_state() -> AppState {
    AppState::new(&test_cli(), "test-key".to_string())
}

pub(crate) fn sample_snapshot(name: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: name.to_string(),
        coordinates: Some(Coordinates {
            lat: 59.9139,
            lon: 10.7522,
        }),
        temperature: 4.5,
        feels_like: 1.8,
        humidity: 68,
        pressure_hpa: 1012,
        wind_speed: 5.2,
        wind_direction_deg: 230.0,
        visibility_m: Some(10_000),
        condition_id: 803,
        condition: "broken clouds".to_string(),
        icon: "04d".to_string(),
        observed_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap(),
    }
}

pub(crate) fn sample_series() -> Vec<ForecastSample> {
    let base = Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap();
    (0..40)
        .map(|idx| ForecastSample {
            timestamp: base + Duration::hours(idx * 3),
            temp: 3.0 + f64::from(idx as i32 % 8),
            temp_min: 2.0,
            temp_max: 12.0,
            condition_id: 500,
            condition: "light rain".to_string(),
            icon: "10d".to_string(),
            wind_speed: 4.0,
            pop: 0.3,
        })
        .collect()
}

pub(crate) fn sample_air_quality() -> AirQualitySnapshot {
    let mut components = BTreeMap::new();
    components.insert("pm2_5".to_string(), 7.4);
    components.insert("pm10".to_string(), 11.0);
    components.insert("o3".to_string(), 55.3);
    AirQualitySnapshot { aqi: 2, components }
}

pub(crate) fn city_match(name: &str) -> CityMatch {
    CityMatch {
        name: name.to_string(),
        country: "NO".to_string(),
        state: None,
        lat: 59.9139,
        lon: 10.7522,
    }
}
