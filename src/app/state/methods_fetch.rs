use super::*;

/// Fixed comparison strip: name, latitude, longitude.
pub(crate) const COMPARISON_CITIES: [(&str, f64, f64); 3] = [
    ("Beijing", 39.9042, 116.4074),
    ("Shanghai", 31.2304, 121.4737),
    ("Chongqing", 29.4316, 106.9123),
];

impl AppState {
    pub fn select_city(&mut self, name: &str, tx: &mpsc::Sender<AppEvent>) {
        self.prefs.selected_city = name.to_string();
        self.persist_prefs();
        self.start_fetch_cycle(FetchTarget::City(name.to_string()), tx);
    }

    /// Unit conversion happens provider-side, so a unit change re-runs the
    /// whole cycle for the current target.
    pub fn set_temperature_unit(&mut self, units: Units, tx: &mpsc::Sender<AppEvent>) {
        if self.prefs.units == units {
            return;
        }
        self.prefs.units = units;
        self.persist_prefs();
        if let FetchTarget::City(city) = &self.fetch_target
            && city.is_empty()
        {
            return;
        }
        self.start_fetch_cycle(self.fetch_target.clone(), tx);
    }

    pub fn use_current_location(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.fetch_seq += 1;
        self.is_loading = true;
        self.last_error = None;

        let cycle = self.fetch_seq;
        let tx = tx.clone();
        tokio::spawn(async move {
            let located = geoip::detect_location().await;
            let _ = tx.send(AppEvent::LocationDetected { cycle, located }).await;
        });
    }

    pub fn refresh_comparison(&mut self, tx: &mpsc::Sender<AppEvent>) {
        self.comparison_seq += 1;
        self.comparison_pending = true;

        let seq = self.comparison_seq;
        let api = self.api.clone();
        let units = self.prefs.units;
        let tx = tx.clone();
        tokio::spawn(async move {
            let client = CurrentWeatherClient::new(&api);
            let mut snapshots = Vec::with_capacity(COMPARISON_CITIES.len());
            for (name, lat, lon) in COMPARISON_CITIES {
                match client.fetch_by_coords(lat, lon, units).await {
                    Ok(snapshot) => snapshots.push(snapshot),
                    Err(err) => {
                        tracing::warn!(city = name, error = %err, "comparison fetch failed");
                    }
                }
            }
            let _ = tx.send(AppEvent::ComparisonFetched { seq, snapshots }).await;
        });
    }

    pub(crate) fn start_fetch_cycle(&mut self, target: FetchTarget, tx: &mpsc::Sender<AppEvent>) {
        self.fetch_seq += 1;
        self.fetch_target = target.clone();
        self.is_loading = true;
        self.last_error = None;
        Self::spawn_weather_fetch(
            tx.clone(),
            self.api.clone(),
            target,
            self.prefs.units,
            self.fetch_seq,
        );
    }

    pub(crate) fn handle_location_detected(
        &mut self,
        cycle: u64,
        located: Option<DetectedLocation>,
        tx: &mpsc::Sender<AppEvent>,
    ) {
        if cycle != self.fetch_seq {
            tracing::debug!(cycle, latest = self.fetch_seq, "discarding stale location");
            return;
        }
        match located {
            Some(detected) => {
                self.prefs.selected_city = detected.city;
                self.persist_prefs();
                self.fetch_target = FetchTarget::Coords(detected.coordinates);
                Self::spawn_weather_fetch(
                    tx.clone(),
                    self.api.clone(),
                    self.fetch_target.clone(),
                    self.prefs.units,
                    cycle,
                );
            }
            None => {
                self.last_error =
                    Some("Unable to detect your location. Search for a city instead.".to_string());
                self.is_loading = false;
            }
        }
    }

    pub(crate) fn handle_weather_fetched(
        &mut self,
        cycle: u64,
        result: Result<WeatherSnapshot, crate::data::DataError>,
        tx: &mpsc::Sender<AppEvent>,
    ) {
        if cycle != self.fetch_seq {
            tracing::debug!(cycle, latest = self.fetch_seq, "discarding stale weather");
            return;
        }
        match result {
            Ok(snapshot) => {
                self.current = Some(snapshot);
                // The old reading belonged to the previous snapshot's coordinates.
                self.air_quality = None;
                Self::spawn_forecast_fetch(
                    tx.clone(),
                    self.api.clone(),
                    self.fetch_target.clone(),
                    self.prefs.units,
                    cycle,
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "current weather fetch failed");
                self.fail_cycle();
            }
        }
    }

    pub(crate) fn handle_forecast_fetched(
        &mut self,
        cycle: u64,
        result: Result<Vec<ForecastSample>, crate::data::DataError>,
        tx: &mpsc::Sender<AppEvent>,
    ) {
        if cycle != self.fetch_seq {
            tracing::debug!(cycle, latest = self.fetch_seq, "discarding stale forecast");
            return;
        }
        match result {
            Ok(series) => {
                self.daily = bucket_by_day(&series);
                self.forecast = series;
                match self.current.as_ref().and_then(|weather| weather.coordinates) {
                    Some(coords) => {
                        Self::spawn_air_quality_fetch(tx.clone(), self.api.clone(), coords, cycle);
                    }
                    // No coordinates means the reading is skipped, not errored.
                    None => self.is_loading = false,
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "forecast fetch failed");
                self.fail_cycle();
            }
        }
    }

    pub(crate) fn handle_air_quality_fetched(
        &mut self,
        cycle: u64,
        result: Result<AirQualitySnapshot, crate::data::DataError>,
    ) {
        if cycle != self.fetch_seq {
            tracing::debug!(cycle, latest = self.fetch_seq, "discarding stale air quality");
            return;
        }
        match result {
            Ok(reading) => self.air_quality = Some(reading),
            Err(err) => {
                tracing::warn!(error = %err, "air quality fetch failed; keeping weather and forecast");
            }
        }
        self.is_loading = false;
    }

    pub(crate) fn handle_comparison_fetched(&mut self, seq: u64, snapshots: Vec<WeatherSnapshot>) {
        if seq != self.comparison_seq {
            tracing::debug!(seq, latest = self.comparison_seq, "discarding stale comparison");
            return;
        }
        self.city_comparison = snapshots;
        self.comparison_pending = false;
    }

    fn fail_cycle(&mut self) {
        self.last_error = Some(fetch_error_message(&self.prefs.selected_city));
        self.is_loading = false;
    }

    fn spawn_weather_fetch(
        tx: mpsc::Sender<AppEvent>,
        api: ApiConfig,
        target: FetchTarget,
        units: Units,
        cycle: u64,
    ) {
        tokio::spawn(async move {
            let client = CurrentWeatherClient::new(&api);
            let result = match &target {
                FetchTarget::City(city) => client.fetch(city, units).await,
                FetchTarget::Coords(coords) => {
                    client.fetch_by_coords(coords.lat, coords.lon, units).await
                }
            };
            let _ = tx.send(AppEvent::WeatherFetched { cycle, result }).await;
        });
    }

    fn spawn_forecast_fetch(
        tx: mpsc::Sender<AppEvent>,
        api: ApiConfig,
        target: FetchTarget,
        units: Units,
        cycle: u64,
    ) {
        tokio::spawn(async move {
            let client = ForecastClient::new(&api);
            let result = match &target {
                FetchTarget::City(city) => client.fetch(city, units).await,
                FetchTarget::Coords(coords) => {
                    client.fetch_by_coords(coords.lat, coords.lon, units).await
                }
            };
            let _ = tx.send(AppEvent::ForecastFetched { cycle, result }).await;
        });
    }

    fn spawn_air_quality_fetch(
        tx: mpsc::Sender<AppEvent>,
        api: ApiConfig,
        coords: Coordinates,
        cycle: u64,
    ) {
        tokio::spawn(async move {
            let client = AirQualityClient::new(&api);
            let result = client.fetch(coords.lat, coords.lon).await;
            let _ = tx.send(AppEvent::AirQualityFetched { cycle, result }).await;
        });
    }
}

pub(crate) fn fetch_error_message(city: &str) -> String {
    format!("Failed to fetch weather data for {city}. Please check the city name and try again.")
}
