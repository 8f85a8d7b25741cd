use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::constants::DEFAULT_AVATAR;

/// Per-user record stored in the KV backend, JSON-serialized under the
/// lowercase username
///
/// `history` is an uninterpreted blob owned by the client; the server only
/// ever replaces it wholesale. `authentication` holds the active session
/// tokens, membership means "logged in".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String,
    pub history: Value,
    pub avatar: String,
    pub authentication: Vec<String>,
    pub logincount: u64,
}

impl UserRecord {
    /// Build the record a fresh signup gets: empty history/messages
    /// structure, the built-in default avatar, no sessions, zero logins
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            history: json!({ "history": {}, "messages": {} }),
            avatar: DEFAULT_AVATAR.to_string(),
            authentication: Vec::new(),
            logincount: 0,
        }
    }
}

/// Success payload for login and getinfo
///
/// Returned bare, without the `{"response": ...}` envelope the status
/// messages use. The deployed client depends on this shape.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub history: Value,
    pub avatar: String,
    pub logincount: u64,
}

impl From<&UserRecord> for UserInfo {
    fn from(record: &UserRecord) -> Self {
        Self {
            history: record.history.clone(),
            avatar: record.avatar.clone(),
            logincount: record.logincount,
        }
    }
}

/// Lowercase a username before any store access
///
/// Every lookup and write keys on the normalized form, so "Alice" and
/// "alice" are the same account.
pub fn normalize_username(raw: &str) -> String {
    raw.to_lowercase()
}
