use clap::{Parser, ValueEnum};

use crate::domain::weather::Units;

pub const API_KEY_ENV: &str = "SKYCAST_API_KEY";

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Metric,
    Imperial,
    Standard,
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => Units::Metric,
            UnitsArg::Imperial => Units::Imperial,
            UnitsArg::Standard => Units::Standard,
        }
    }
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "skycast",
    version,
    about = "Weather dashboard: city search, forecasts, and air quality"
)]
pub struct Cli {
    /// City name (default: the last selected city)
    pub city: Option<String>,

    /// Temperature unit system for this run
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// List matching cities instead of fetching a dashboard
    #[arg(long, conflicts_with = "city")]
    pub search: Option<String>,

    /// Detect the city from the network connection
    #[arg(long, conflicts_with_all = ["city", "search"])]
    pub locate: bool,

    /// Append the fixed multi-city comparison strip
    #[arg(long)]
    pub compare: bool,

    /// Flip the persisted dark-mode preference
    #[arg(long)]
    pub toggle_dark_mode: bool,

    /// Provider API key (falls back to $SKYCAST_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Weather data endpoint override
    #[arg(long)]
    pub data_url: Option<String>,

    /// Geocoding endpoint override
    #[arg(long)]
    pub geo_url: Option<String>,

    /// Skip reading and writing preferences on disk
    #[arg(long)]
    pub no_persist: bool,
}

impl Cli {
    pub fn resolve_api_key(&self) -> anyhow::Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => anyhow::bail!("no API key: pass --api-key or set {API_KEY_ENV}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, UnitsArg};
    use crate::domain::weather::Units;

    #[test]
    fn parses_units_enum_values() {
        let cli = Cli::parse_from(["skycast", "--units", "imperial"]);
        assert_eq!(cli.units, Some(UnitsArg::Imperial));
        assert_eq!(Units::from(UnitsArg::Imperial), Units::Imperial);
    }

    #[test]
    fn city_and_search_conflict() {
        let err = Cli::try_parse_from(["skycast", "Madrid", "--search", "Par"])
            .expect_err("expected conflict");
        let rendered = err.to_string();
        assert!(rendered.contains("--search"));
    }

    #[test]
    fn locate_conflicts_with_city() {
        Cli::try_parse_from(["skycast", "Madrid", "--locate"]).expect_err("expected conflict");
    }

    #[test]
    fn api_key_flag_takes_precedence() {
        let cli = Cli::parse_from(["skycast", "--api-key", "abc123"]);
        assert_eq!(cli.resolve_api_key().expect("key"), "abc123");
    }
}
