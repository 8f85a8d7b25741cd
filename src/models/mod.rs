pub mod user;

pub use user::{normalize_username, UserInfo, UserRecord};
