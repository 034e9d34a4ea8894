//! Thin text rendering of the store's current snapshot.

use std::fmt::Write as _;

use crate::{
    app::state::AppState,
    domain::weather::{
        CityMatch,
        conversions::{
            aqi_label, capitalize_words, format_humidity, format_pressure, format_temperature,
            format_visibility, format_wind, weather_emoji,
        },
    },
};

#[must_use]
pub fn render_dashboard(state: &AppState) -> String {
    let mut out = String::new();
    let units = state.prefs.units;

    if let Some(error) = &state.last_error {
        let _ = writeln!(out, "error: {error}");
    }

    match &state.current {
        Some(current) => {
            let _ = writeln!(
                out,
                "{}  {}  {} {}",
                current.location_name,
                format_temperature(current.temperature, units),
                weather_emoji(&current.icon),
                capitalize_words(&current.condition),
            );
            let _ = writeln!(
                out,
                "Feels like {}  Humidity {}  Wind {}",
                format_temperature(current.feels_like, units),
                format_humidity(current.humidity),
                format_wind(current.wind_speed, current.wind_direction_deg, units),
            );
            let mut line = format!("Pressure {}", format_pressure(current.pressure_hpa));
            if let Some(visibility) = current.visibility_m {
                let _ = write!(line, "  Visibility {}", format_visibility(visibility, units));
            }
            let _ = writeln!(out, "{line}");
        }
        None if state.last_error.is_none() => {
            let _ = writeln!(out, "Select a city to view weather data");
        }
        None => {}
    }

    if !state.daily.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Forecast");
        for day in &state.daily {
            let _ = writeln!(
                out,
                "  {}  {} {:>4} / {:<4}  rain {}%",
                day.date.format("%a %d %b"),
                weather_emoji(&day.icon),
                format_temperature(day.temp_min, units),
                format_temperature(day.temp_max, units),
                (day.pop * 100.0).round() as i64,
            );
        }
    }

    if let Some(air) = &state.air_quality {
        let _ = writeln!(out);
        let _ = writeln!(out, "Air quality: {} ({})", aqi_label(air.aqi), air.aqi);
        for key in ["pm2_5", "pm10", "o3", "no2"] {
            if let Some(value) = air.components.get(key) {
                let _ = writeln!(out, "  {key}: {value:.1} ug/m3");
            }
        }
    }

    if !state.city_comparison.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Elsewhere");
        for snapshot in &state.city_comparison {
            let _ = writeln!(
                out,
                "  {}  {}  {}",
                snapshot.location_name,
                format_temperature(snapshot.temperature, units),
                capitalize_words(&snapshot.condition),
            );
        }
    }

    out
}

#[must_use]
pub fn render_search(query: &str, results: &[CityMatch]) -> String {
    if results.is_empty() {
        return format!("No cities found for \"{query}\".\n");
    }
    let mut out = String::new();
    for city in results {
        let _ = writeln!(
            out,
            "{}  ({:.4}, {:.4})",
            city.display_name(),
            city.lat,
            city.lon
        );
    }
    out
}
