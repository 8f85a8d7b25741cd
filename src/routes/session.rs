use axum::{
    extract::{Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::MSG_LOGGED_OUT;
use crate::db::{self, Db};
use crate::error::{AppError, Result};
use crate::models::{normalize_username, UserInfo, UserRecord};
use crate::{security, AppState};

/// Query parameters shared by every endpoint that identifies the account
/// via `?user=`
#[derive(Debug, Deserialize)]
pub struct UserParams {
    pub user: String,
}

/// The Authorization header carries the plaintext password on login and the
/// session token everywhere else
pub(crate) fn auth_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Fetch the record and require the request's token to be an active session
///
/// An absent record fails the membership check the same way an unknown token
/// does: 405 "Not Authenticate".
pub(crate) async fn load_authenticated(
    db: &Db,
    username: &str,
    headers: &HeaderMap,
) -> Result<UserRecord> {
    let token = auth_header(headers).unwrap_or_default();

    let record = db::fetch_user(db, username)
        .await?
        .ok_or(AppError::NotAuthenticated)?;

    if !security::validate_token(&record, token) {
        return Err(AppError::NotAuthenticated);
    }

    Ok(record)
}

/// Log in with username (query) and password (Authorization header)
///
/// On success a fresh session token is appended to the record's token list,
/// the login count is incremented, and the token is handed back in the
/// Authorization response header next to the `{history, avatar, logincount}`
/// body. An unknown account and a wrong password both answer 404, with
/// distinct messages.
pub async fn login(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
) -> Result<Response> {
    let username = normalize_username(&params.user);

    let mut record = db::fetch_user(&state.db, &username)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    if auth_header(&headers) != Some(record.password.as_str()) {
        tracing::info!("Failed login attempt for user {}", username);
        return Err(AppError::InvalidCredentials);
    }

    let token = security::issue_token();
    record.authentication.push(token.clone());
    record.logincount += 1;

    db::store_user(&state.db, &username, &record).await?;

    tracing::info!(
        "User {} logged in ({} active sessions)",
        username,
        record.authentication.len()
    );

    let info = UserInfo::from(&record);
    Ok(([(header::AUTHORIZATION, token)], Json(info)).into_response())
}

/// Return `{history, avatar, logincount}` for an authenticated session
pub async fn getinfo(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
) -> Result<Json<UserInfo>> {
    let username = normalize_username(&params.user);
    let record = load_authenticated(&state.db, &username, &headers).await?;

    Ok(Json(UserInfo::from(&record)))
}

/// Remove the request's session token from the record
///
/// Only the presented token is revoked; sessions on other devices stay
/// active. A token that is not in the list (including a repeated signout)
/// answers 405 "Already logged out" without touching the record.
pub async fn signout(
    State(state): State<AppState>,
    Query(params): Query<UserParams>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let username = normalize_username(&params.user);
    let token = auth_header(&headers).unwrap_or_default();

    let mut record = db::fetch_user(&state.db, &username)
        .await?
        .ok_or(AppError::AlreadyLoggedOut)?;

    if !security::revoke_token(&mut record, token) {
        return Err(AppError::AlreadyLoggedOut);
    }

    db::store_user(&state.db, &username, &record).await?;

    tracing::info!("User {} logged out", username);

    Ok(Json(json!({ "response": MSG_LOGGED_OUT })))
}
