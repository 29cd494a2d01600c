use axum::extract::{Query, State};
use axum::Json;
use client_search_core::{DuplicateGroups, Record, DEFAULT_FIELD};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Results<T> {
    pub results: T,
}

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub q: Option<String>,
    pub field: Option<String>,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Results<Vec<Record>>>, ApiError> {
    let q = params
        .q
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter 'q' is required".to_string()))?;
    let field = params.field.unwrap_or_else(|| DEFAULT_FIELD.to_string());

    let results = state
        .run(move |search| search.try_search(&q, &field))
        .await?;
    Ok(Json(Results { results }))
}

pub async fn duplicates(
    State(state): State<AppState>,
) -> Result<Json<Results<DuplicateGroups>>, ApiError> {
    let results = state
        .run(|search| search.try_find_duplicate_emails())
        .await?;
    Ok(Json(Results { results }))
}
