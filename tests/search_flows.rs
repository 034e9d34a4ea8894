mod common;

use common::{air_body, app_against, forecast_body, geo_body, pump_until_settled, weather_body};
use skycast::domain::weather::CityMatch;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

#[tokio::test]
async fn rapid_keystrokes_collapse_to_one_lookup_with_the_last_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .and(query_param("q", "Paris"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(geo_body(), "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, tx, mut rx) = app_against(&server.uri());
    for query in ["Pa", "Par", "Pari", "Paris"] {
        app.search(query, &tx);
    }
    pump_until_settled(&mut app, &mut rx, &tx).await;

    assert_eq!(app.search_results.len(), 2);
    assert_eq!(app.search_results[0].name, "Paris");
    assert!(!app.is_searching);
}

#[tokio::test]
async fn single_character_query_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(geo_body(), "application/json"))
        .expect(0)
        .mount(&server)
        .await;

    let (mut app, tx, _rx) = app_against(&server.uri());
    app.search_results.push(CityMatch {
        name: "Paris".to_string(),
        country: "FR".to_string(),
        state: None,
        lat: 48.8589,
        lon: 2.32,
    });

    // Backspacing below the threshold clears immediately, no lookup.
    app.search("P", &tx);
    assert!(app.search_results.is_empty());
    assert!(!app.is_searching);
    assert!(app.settled());
}

#[tokio::test]
async fn failed_lookup_leaves_an_empty_result_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (mut app, tx, mut rx) = app_against(&server.uri());
    app.search("Paris", &tx);
    pump_until_settled(&mut app, &mut rx, &tx).await;

    assert!(app.search_results.is_empty());
    assert!(!app.is_searching);
}

#[tokio::test]
async fn selecting_a_candidate_runs_a_fetch_cycle_for_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(geo_body(), "application/json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(weather_body("Paris", 12.0), "application/json"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(forecast_body(1_772_000_000), "application/json"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/air_pollution"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(air_body(2), "application/json"))
        .mount(&server)
        .await;

    let (mut app, tx, mut rx) = app_against(&server.uri());
    app.search("Paris", &tx);
    pump_until_settled(&mut app, &mut rx, &tx).await;
    let candidate = app.search_results.first().cloned().expect("a candidate");

    app.select_search_result(candidate, &tx);
    pump_until_settled(&mut app, &mut rx, &tx).await;

    assert!(app.search_results.is_empty());
    assert_eq!(app.prefs.selected_city, "Paris");
    assert_eq!(
        app.current.as_ref().map(|w| w.location_name.as_str()),
        Some("Paris")
    );
    assert!(app.last_error.is_none());
}
