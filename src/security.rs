//! Session token management
//!
//! Tokens are opaque random identifiers with no embedded expiry. A token is
//! valid exactly as long as it sits in the record's `authentication` list;
//! signout removes it, nothing else does. There is no cap on concurrently
//! active tokens per user.

use uuid::Uuid;

use crate::models::UserRecord;

/// Issue a new opaque session token
pub fn issue_token() -> String {
    Uuid::new_v4().to_string()
}

/// A token is valid iff it is currently a member of the record's token list
pub fn validate_token(record: &UserRecord, token: &str) -> bool {
    record.authentication.iter().any(|t| t == token)
}

/// Remove the first occurrence of `token` from the record's token list,
/// leaving any other tokens untouched
///
/// Returns false if the token was not present (nothing removed).
pub fn revoke_token(record: &mut UserRecord, token: &str) -> bool {
    match record.authentication.iter().position(|t| t == token) {
        Some(index) => {
            record.authentication.remove(index);
            true
        }
        None => false,
    }
}
