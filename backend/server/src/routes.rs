use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State as AxumState},
    response::{IntoResponse, Redirect, Response},
};
use catalog::{GameRecord, Snapshot, featured, filter, find};
use serde::Deserialize;

use crate::{
    error::AppError,
    payloads::{GameView, GamesResponse, ReloadResponse},
    state::State,
};

#[derive(Deserialize, Default)]
pub struct SearchParams {
    #[serde(default)]
    q: String,
}

fn games_response(snapshot: &Snapshot, games: Vec<&GameRecord>) -> Response {
    Json(GamesResponse {
        count: games.len(),
        games: games.into_iter().map(GameView::from).collect(),
        loaded_at: snapshot.loaded_at.map(|at| at.to_rfc3339()),
    })
    .into_response()
}

pub async fn search_handler(
    AxumState(state): AxumState<Arc<State>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let snapshot = state.catalog.snapshot();

    games_response(&snapshot, filter(&snapshot.records, &params.q))
}

pub async fn featured_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    let snapshot = state.catalog.snapshot();

    games_response(&snapshot, featured(&snapshot.records).iter().collect())
}

pub async fn game_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.catalog.snapshot();
    let game = find(&snapshot.records, &id).ok_or(AppError::NotFound)?;

    Ok(Json(GameView::from(game)).into_response())
}

pub async fn reload_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<impl IntoResponse, AppError> {
    let count = state.reload().await?;

    Ok(Json(ReloadResponse { count }))
}

pub async fn submit_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    Redirect::to(&state.config.community_url)
}

pub async fn rate_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let snapshot = state.catalog.snapshot();
    find(&snapshot.records, &id).ok_or(AppError::NotFound)?;

    Ok(Redirect::to(&state.config.community_url))
}
