#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use skycast::{
    app::{events::AppEvent, state::AppState},
    cli::Cli,
};
use tokio::sync::mpsc;

pub fn cli_with_endpoints(data_url: &str, geo_url: &str) -> Cli {
    Cli {
        city: None,
        units: None,
        search: None,
        locate: false,
        compare: false,
        toggle_dark_mode: false,
        api_key: Some("test-key".to_string()),
        data_url: Some(data_url.to_string()),
        geo_url: Some(geo_url.to_string()),
        no_persist: true,
    }
}

pub fn app_against(server_uri: &str) -> (AppState, mpsc::Sender<AppEvent>, mpsc::Receiver<AppEvent>) {
    let cli = cli_with_endpoints(server_uri, server_uri);
    let (tx, rx) = mpsc::channel(256);
    (AppState::new(&cli, "test-key".to_string()), tx, rx)
}

/// Pump completions through the store until nothing is in flight.
pub async fn pump_until_settled(
    app: &mut AppState,
    rx: &mut mpsc::Receiver<AppEvent>,
    tx: &mpsc::Sender<AppEvent>,
) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !app.settled() {
            let Some(event) = rx.recv().await else { break };
            app.handle_event(event, tx);
        }
    })
    .await
    .expect("store did not settle in time");
}

pub fn weather_body(name: &str, temp: f64) -> String {
    json!({
        "name": name,
        "dt": 1_772_000_000i64,
        "coord": { "lat": 48.8589, "lon": 2.3200 },
        "main": { "temp": temp, "feels_like": temp - 2.0, "humidity": 70, "pressure": 1015 },
        "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
        "wind": { "speed": 4.1, "deg": 200 },
        "visibility": 9000
    })
    .to_string()
}

pub fn weather_body_without_coords(name: &str) -> String {
    json!({
        "name": name,
        "dt": 1_772_000_000i64,
        "main": { "temp": 8.0, "feels_like": 6.0, "humidity": 70, "pressure": 1015 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }]
    })
    .to_string()
}

/// 40 three-hour samples starting at `base_dt`, the provider's full page.
pub fn forecast_body(base_dt: i64) -> String {
    let list: Vec<_> = (0..40)
        .map(|idx: i64| {
            json!({
                "dt": base_dt + idx * 10_800,
                "main": {
                    "temp": 5.0 + (idx % 8) as f64,
                    "temp_min": 4.0,
                    "temp_max": 13.0
                },
                "weather": [{ "id": 500, "main": "Rain", "description": "light rain", "icon": "10d" }],
                "wind": { "speed": 3.5, "deg": 190 },
                "pop": 0.4
            })
        })
        .collect();
    json!({ "list": list }).to_string()
}

pub fn air_body(aqi: u8) -> String {
    json!({
        "list": [{
            "main": { "aqi": aqi },
            "components": { "co": 230.3, "no2": 14.9, "o3": 48.6, "pm2_5": 6.8, "pm10": 9.9 }
        }]
    })
    .to_string()
}

pub fn geo_body() -> String {
    json!([
        { "name": "Paris", "country": "FR", "lat": 48.8589, "lon": 2.3200 },
        { "name": "Paris", "country": "US", "state": "Texas", "lat": 33.6617, "lon": -95.5555 }
    ])
    .to_string()
}

pub fn provider_error_body(message: &str) -> String {
    json!({ "cod": "404", "message": message }).to_string()
}
