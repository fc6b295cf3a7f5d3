use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::LOCATION},
    routing::get,
};
use catalog::{GameRecord, Ratings};
use http_body_util::BodyExt;
use serde_json::Value;
use server::{app, config::Config, state::State};
use tokio::net::TcpListener;
use tower::ServiceExt;

const CSV: &str = "Name,Dev,Desc,Age,Cat,Link,H,S,F,A\n\
Foo,Bar,Desc1,9+,Adventure,url1,4,5,3,4\n\
Baz,Qux,Desc2,13+,Puzzle,url2,5,5,5,5\n";

fn game(id: &str, name: &str, developer: &str, category: &str) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        name: name.to_string(),
        developer: developer.to_string(),
        category: category.to_string(),
        ratings: Ratings {
            honesty: 5.0,
            safety: 4.0,
            fairness: 4.0,
            age_appropriate: 4.0,
        },
        ..Default::default()
    }
}

fn config(catalog_url: String) -> Config {
    Config {
        catalog_url,
        community_url: "https://discord.example/invite".to_string(),
        ..Default::default()
    }
}

fn seeded_state() -> Arc<State> {
    let state = State::with_config(config("http://127.0.0.1:1/unused.csv".to_string()));
    state.catalog.replace(vec![
        game("0", "Alpha", "X", "Puzzle"),
        game("1", "Beta", "Y", "Adventure"),
        game("2", "Gamma", "Roblox", "Obby"),
        game("3", "Delta", "Z", "Tycoon"),
    ]);

    state
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    (status, headers, body)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, "GET", uri).await;

    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn names(body: &Value) -> Vec<&str> {
    body["games"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect()
}

async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{address}/catalog.csv")
}

#[tokio::test]
async fn search_without_query_lists_everything() {
    let (status, body) = get_json(app(seeded_state()), "/games").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 4);
    assert_eq!(names(&body), vec!["Alpha", "Beta", "Gamma", "Delta"]);
    assert!(body["loadedAt"].is_string());
}

#[tokio::test]
async fn search_filters_case_insensitively() {
    let (_, upper) = get_json(app(seeded_state()), "/games?q=ROBLOX").await;
    let (_, lower) = get_json(app(seeded_state()), "/games?q=roblox").await;

    assert_eq!(names(&upper), vec!["Gamma"]);
    assert_eq!(names(&upper), names(&lower));

    let (_, body) = get_json(app(seeded_state()), "/games?q=vent").await;
    assert_eq!(names(&body), vec!["Beta"]);
}

#[tokio::test]
async fn featured_is_first_three() {
    let (_, body) = get_json(app(seeded_state()), "/games/featured").await;

    assert_eq!(names(&body), vec!["Alpha", "Beta", "Gamma"]);
}

#[tokio::test]
async fn game_detail_includes_average() {
    let (status, body) = get_json(app(seeded_state()), "/games/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Beta");
    assert_eq!(body["ageGroup"], "");
    assert_eq!(body["average"], 4.3);
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let (status, _, _) = send(app(seeded_state()), "GET", "/games/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(app(seeded_state()), "GET", "/games/42/rate").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn submit_and_rate_redirect_to_community() {
    for uri in ["/submit", "/games/0/rate"] {
        let (status, headers, _) = send(app(seeded_state()), "GET", uri).await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(headers[LOCATION], "https://discord.example/invite");
    }
}

#[tokio::test]
async fn empty_catalog_before_first_load() {
    let state = State::with_config(config(closed_url().await));
    let (status, body) = get_json(app(state), "/games").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["loadedAt"].is_null());
}

#[tokio::test]
async fn reload_replaces_catalog() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let source = Router::new().route("/catalog.csv", get(|| async { CSV }));
        axum::serve(listener, source).await.unwrap();
    });

    let state = State::with_config(config(format!("http://{address}/catalog.csv")));
    state.catalog.replace(vec![game("0", "Stale", "X", "Puzzle")]);

    let (status, body) = get_json(app(state.clone()), "/reload").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, Value::Null);

    let (status, _, body) = send(app(state.clone()), "POST", "/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap()["count"], 2);

    let (_, body) = get_json(app(state), "/games").await;
    assert_eq!(names(&body), vec!["Foo", "Baz"]);
}

#[tokio::test]
async fn failed_reload_keeps_catalog() {
    let state = State::with_config(config(closed_url().await));
    state.catalog.replace(vec![game("0", "Alpha", "X", "Puzzle")]);
    let before = state.catalog.snapshot();

    let (status, _, _) = send(app(state.clone()), "POST", "/reload").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let after = state.catalog.snapshot();
    assert_eq!(after.records, before.records);
    assert_eq!(after.loaded_at, before.loaded_at);
}
