use reqwest::Client;
use serde::Deserialize;

use crate::domain::weather::Coordinates;

const GEOIP_URL: &str = "https://ipapi.co/json/";

/// City resolved from the caller's public IP address.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLocation {
    pub city: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    city: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

/// Best-effort probe; `None` covers unreachable service, timeout, and
/// payloads without a usable city.
pub async fn detect_location() -> Option<DetectedLocation> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .ok()?;
    let response: IpApiResponse = client.get(GEOIP_URL).send().await.ok()?.json().await.ok()?;
    let city = response.city.filter(|city| !city.is_empty())?;
    let lat = response.latitude?;
    let lon = response.longitude?;
    Some(DetectedLocation {
        city,
        coordinates: Coordinates { lat, lon },
    })
}
