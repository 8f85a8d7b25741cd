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
pub struct AvatarUpdate {
    pub avatar: String,
}

/// Replace the stored avatar (token required)
///
/// The avatar is an opaque blob, typically a data-URI-encoded image; no
/// decoding or size validation happens here.
pub async fn update_avatar(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
    Json(payload): Json<AvatarUpdate>,
) -> Result<Json<Value>> {
    let username = normalize_username(&params.user);
    let mut record = load_authenticated(&state.db, &username, &headers).await?;

    record.avatar = payload.avatar;
    db::store_user(&state.db, &username, &record).await?;

    tracing::info!("Avatar updated for user {}", username);

    Ok(Json(json!({ "response": MSG_UPDATED })))
}

/// Return the stored avatar (token required)
pub async fn get_avatar(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let username = normalize_username(&params.user);
    let record = load_authenticated(&state.db, &username, &headers).await?;

    Ok(Json(json!({ "response": record.avatar })))
}
