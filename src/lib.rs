pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::Result;
use tokio::sync::mpsc;

use app::{events::AppEvent, state::AppState};
use cli::Cli;

/// One-shot driver: dispatch the action the CLI asked for, pump completions
/// until the store settles, print the resulting snapshot.
pub async fn run(cli: Cli) -> Result<()> {
    let api_key = cli.resolve_api_key()?;
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let mut app = AppState::new(&cli, api_key);

    if cli.toggle_dark_mode {
        app.toggle_dark_mode();
    }

    if let Some(query) = &cli.search {
        app.search(query, &tx);
    } else if cli.locate {
        app.use_current_location(&tx);
    } else {
        let city = cli
            .city
            .clone()
            .unwrap_or_else(|| app.prefs.selected_city.clone());
        app.select_city(&city, &tx);
    }
    if cli.compare {
        app.refresh_comparison(&tx);
    }

    while !app.settled() {
        let Some(event) = rx.recv().await else { break };
        app.handle_event(event, &tx);
    }

    if let Some(query) = &cli.search {
        print!("{}", ui::render_search(query, &app.search_results));
    } else {
        print!("{}", ui::render_dashboard(&app));
    }
    Ok(())
}
