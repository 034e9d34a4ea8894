use super::Units;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

#[must_use]
pub fn format_temperature(temp: f64, units: Units) -> String {
    format!("{}{}", temp.round() as i64, units.temp_symbol())
}

#[must_use]
pub fn compass_direction(deg: f64) -> &'static str {
    let idx = ((deg / 22.5).round() as i64).rem_euclid(16) as usize;
    COMPASS_POINTS[idx]
}

/// Wind speed arrives as m/s for metric/standard and mph for imperial.
#[must_use]
pub fn format_wind(speed: f64, deg: f64, units: Units) -> String {
    let (value, label) = match units {
        Units::Imperial => (speed, "mph"),
        Units::Metric | Units::Standard => (speed * 3.6, "km/h"),
    };
    format!("{} {} {}", value.round() as i64, label, compass_direction(deg))
}

#[must_use]
pub fn format_humidity(humidity: u8) -> String {
    format!("{humidity}%")
}

#[must_use]
pub fn format_pressure(pressure_hpa: u32) -> String {
    format!("{pressure_hpa} hPa")
}

#[must_use]
pub fn format_visibility(meters: u32, units: Units) -> String {
    if units == Units::Imperial {
        let miles = f64::from(meters) * 0.000_621_371;
        return format!("{miles:.1} mi");
    }
    if meters >= 1000 {
        format!("{:.1} km", f64::from(meters) / 1000.0)
    } else {
        format!("{meters} m")
    }
}

#[must_use]
pub fn capitalize_words(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Provider icon codes to emoji, day and night variants.
#[must_use]
pub fn weather_emoji(icon: &str) -> &'static str {
    match icon {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" => "⛅",
        "09d" | "09n" | "10n" => "🌧️",
        "10d" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "❄️",
        "50d" | "50n" => "🌫️",
        _ => "☁️",
    }
}

/// Provider AQI severity labels, index 1 (best) through 5 (worst).
#[must_use]
pub fn aqi_label(aqi: u8) -> &'static str {
    match aqi {
        1 => "Excellent",
        2 => "Good",
        3 => "Moderate",
        4 => "Poor",
        5 => "Very Poor",
        _ => "Unknown",
    }
}
