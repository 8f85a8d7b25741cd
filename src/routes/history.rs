use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::MSG_UPDATED;
use crate::db;
use crate::error::Result;
use crate::models::normalize_username;
use crate::routes::session::{load_authenticated, UserParams};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryUpdate {
    pub history: Value,
}

/// Replace the stored chat history (token required)
///
/// The history blob is client-defined JSON and is stored wholesale; there
/// is no merging, pagination, or schema validation on the server side.
pub async fn update_history(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
    Json(payload): Json<HistoryUpdate>,
) -> Result<Json<Value>> {
    let username = normalize_username(&params.user);
    let mut record = load_authenticated(&state.db, &username, &headers).await?;

    record.history = payload.history;
    db::store_user(&state.db, &username, &record).await?;

    tracing::info!("History updated for user {}", username);

    Ok(Json(json!({ "response": MSG_UPDATED })))
}

/// Return the stored chat history (token required)
pub async fn get_history(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let username = normalize_username(&params.user);
    let record = load_authenticated(&state.db, &username, &headers).await?;

    Ok(Json(json!({ "response": record.history })))
}
