use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::MSG_USER_CREATED;
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{normalize_username, UserRecord};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Create a new account
///
/// The username is lowercased before the store lookup, so uniqueness is
/// enforced on the normalized form. The existence check and the write are
/// two separate KV operations; the backend offers no conditional put, so a
/// concurrent signup race for the same name resolves to last writer wins.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<Value>> {
    let (user, password) = match (payload.user, payload.password) {
        (Some(user), Some(password)) if !user.is_empty() && !password.is_empty() => {
            (user, password)
        }
        _ => return Err(AppError::MissingCredentials),
    };

    let username = normalize_username(&user);

    if db::fetch_user(&state.db, &username).await?.is_some() {
        tracing::info!("Signup rejected, user {} already exists", username);
        return Err(AppError::UserAlreadyExists);
    }

    db::store_user(&state.db, &username, &UserRecord::new(password)).await?;

    tracing::info!("New user registered: {}", username);

    Ok(Json(json!({ "response": MSG_USER_CREATED })))
}
