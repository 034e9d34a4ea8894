use super::*;

impl AppState {
    /// Keystroke-level entry point. Short queries clear synchronously and
    /// never reach the network; longer ones arm the debouncer.
    pub fn search(&mut self, query: &str, tx: &mpsc::Sender<AppEvent>) {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            self.search_debounce.cancel();
            // Invalidate any lookup still in flight so its results cannot
            // resurface after the clear.
            self.search_seq += 1;
            self.search_results.clear();
            self.is_searching = false;
            return;
        }
        self.search_debounce
            .schedule(tx.clone(), AppEvent::SearchReady(query.to_string()));
    }

    /// The quiet window elapsed; dispatch the tagged lookup.
    pub(crate) fn dispatch_search(&mut self, query: String, tx: &mpsc::Sender<AppEvent>) {
        self.search_seq += 1;
        self.is_searching = true;

        let seq = self.search_seq;
        let api = self.api.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let client = GeocodeClient::new(&api);
            let result = client.search(&query, SEARCH_RESULT_LIMIT).await;
            let _ = tx.send(AppEvent::SearchCompleted { seq, result }).await;
        });
    }

    pub(crate) fn handle_search_completed(
        &mut self,
        seq: u64,
        result: Result<Vec<CityMatch>, crate::data::DataError>,
    ) {
        if seq != self.search_seq {
            tracing::debug!(seq, latest = self.search_seq, "discarding stale search results");
            return;
        }
        self.is_searching = false;
        match result {
            Ok(matches) => self.search_results = matches,
            Err(err) => {
                tracing::warn!(error = %err, "city search failed");
                self.search_results.clear();
            }
        }
    }

    pub fn select_search_result(&mut self, candidate: CityMatch, tx: &mpsc::Sender<AppEvent>) {
        self.search_debounce.cancel();
        self.search_seq += 1;
        self.search_results.clear();
        self.is_searching = false;
        self.select_city(&candidate.name, tx);
    }
}
