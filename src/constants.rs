/// Default avatar assigned to new accounts: an 8x8 placeholder PNG as a data URI.
/// Clients replace it through POST /avatar.
pub const DEFAULT_AVATAR: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAgAAAAIAQMAAAD+wSzIAAAABlBMVEX///+/v7+jQ3Y5AAAADklEQVQI12P4AIX8EAgALgAD/aNpbtEAAAAASUVORK5CYII";

/// Methods advertised on every response, preflight or not
pub const ALLOWED_METHODS: &str = "GET,POST,DELETE";

// =============================================================================
// Response Messages
// =============================================================================
// Message texts are part of the wire contract with the deployed client,
// including the "Not Authenticate" wording. Do not reword them.

pub const MSG_USER_CREATED: &str = "User created successfully";

pub const MSG_MISSING_CREDENTIALS: &str = "Missing user or password";

pub const MSG_USER_EXISTS: &str = "User already exists";

pub const MSG_ACCOUNT_NOT_FOUND: &str = "Account not found";

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid user or password";

pub const MSG_NOT_AUTHENTICATED: &str = "Not Authenticate";

pub const MSG_LOGGED_OUT: &str = "Logged out";

pub const MSG_ALREADY_LOGGED_OUT: &str = "Already logged out";

pub const MSG_UPDATED: &str = "Updated";

pub const MSG_METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

pub const MSG_NOT_FOUND: &str = "Not Found";

pub const MSG_INTERNAL_ERROR: &str = "Internal server error";
