use std::{path::PathBuf, time::Duration};

use tokio::sync::mpsc;

use crate::{
    app::{
        debounce::Debouncer,
        events::AppEvent,
        prefs::{Preferences, load_preferences, save_preferences},
    },
    cli::Cli,
    data::{
        ApiConfig,
        air_quality::AirQualityClient,
        forecast::ForecastClient,
        geocode::{GeocodeClient, SEARCH_RESULT_LIMIT},
        geoip::{self, DetectedLocation},
        weather::CurrentWeatherClient,
    },
    domain::weather::{
        AirQualitySnapshot, CityMatch, Coordinates, DailyForecast, ForecastSample, Units,
        WeatherSnapshot, bucket_by_day,
    },
};

mod methods_fetch;
mod methods_search;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// What the in-flight fetch cycle is keyed on. City-name cycles come from
/// selection and unit changes; coordinate cycles from location detection.
#[derive(Debug, Clone)]
pub(crate) enum FetchTarget {
    City(String),
    Coords(Coordinates),
}

/// The application state store. Exactly one owner mutates it, by pumping
/// [`AppEvent`]s through [`AppState::handle_event`]; spawned fetch tasks only
/// ever post completions back to the channel.
#[derive(Debug)]
pub struct AppState {
    pub prefs: Preferences,
    pub current: Option<WeatherSnapshot>,
    pub forecast: Vec<ForecastSample>,
    pub daily: Vec<DailyForecast>,
    pub air_quality: Option<AirQualitySnapshot>,
    pub city_comparison: Vec<WeatherSnapshot>,
    pub search_results: Vec<CityMatch>,
    pub is_loading: bool,
    pub is_searching: bool,
    pub last_error: Option<String>,
    prefs_path: Option<PathBuf>,
    api: ApiConfig,
    fetch_seq: u64,
    fetch_target: FetchTarget,
    search_seq: u64,
    comparison_seq: u64,
    comparison_pending: bool,
    search_debounce: Debouncer,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli, api_key: String) -> Self {
        let (mut prefs, prefs_path) = load_preferences(!cli.no_persist);
        if let Some(units) = cli.units {
            prefs.units = units.into();
        }

        let mut api = ApiConfig::new(api_key);
        if let Some(url) = &cli.data_url {
            api.data_base_url = url.clone();
        }
        if let Some(url) = &cli.geo_url {
            api.geo_base_url = url.clone();
        }

        let fetch_target = FetchTarget::City(prefs.selected_city.clone());
        Self {
            prefs,
            current: None,
            forecast: Vec::new(),
            daily: Vec::new(),
            air_quality: None,
            city_comparison: Vec::new(),
            search_results: Vec::new(),
            is_loading: false,
            is_searching: false,
            last_error: None,
            prefs_path,
            api,
            fetch_seq: 0,
            fetch_target,
            search_seq: 0,
            comparison_seq: 0,
            comparison_pending: false,
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::SelectCity(name) => self.select_city(&name, tx),
            AppEvent::SetUnits(units) => self.set_temperature_unit(units, tx),
            AppEvent::ToggleDarkMode => self.toggle_dark_mode(),
            AppEvent::SearchInput(query) => self.search(&query, tx),
            AppEvent::SearchReady(query) => self.dispatch_search(query, tx),
            AppEvent::SelectSearchResult(candidate) => self.select_search_result(candidate, tx),
            AppEvent::UseCurrentLocation => self.use_current_location(tx),
            AppEvent::LocationDetected { cycle, located } => {
                self.handle_location_detected(cycle, located, tx);
            }
            AppEvent::WeatherFetched { cycle, result } => {
                self.handle_weather_fetched(cycle, result, tx);
            }
            AppEvent::ForecastFetched { cycle, result } => {
                self.handle_forecast_fetched(cycle, result, tx);
            }
            AppEvent::AirQualityFetched { cycle, result } => {
                self.handle_air_quality_fetched(cycle, result);
            }
            AppEvent::SearchCompleted { seq, result } => self.handle_search_completed(seq, result),
            AppEvent::ComparisonFetched { seq, snapshots } => {
                self.handle_comparison_fetched(seq, snapshots);
            }
        }
    }

    /// True once nothing is in flight: no fetch cycle, no armed or running
    /// search, no comparison sweep.
    #[must_use]
    pub fn settled(&self) -> bool {
        !self.is_loading
            && !self.is_searching
            && !self.comparison_pending
            && !self.search_debounce.is_pending()
    }

    pub fn toggle_dark_mode(&mut self) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        self.persist_prefs();
    }

    /// Fire-and-forget by contract: a failed write is logged, never fatal.
    pub(crate) fn persist_prefs(&self) {
        if let Some(path) = &self.prefs_path
            && let Err(err) = save_preferences(path, &self.prefs)
        {
            tracing::warn!(error = %err, "failed to persist preferences");
        }
    }
}
