pub mod tables;

use redb::{Database, Error as RedbError};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::models::UserRecord;

/// Database handle type (Arc-wrapped for sharing across handlers)
pub type Db = Arc<Database>;

/// Open or create the redb database at the given path
///
/// Creates the users table on first run.
#[allow(clippy::result_large_err)]
pub fn open_database(path: impl AsRef<Path>) -> Result<Db> {
    tracing::info!("Opening database at: {:?}", path.as_ref());

    // Create parent directory if it doesn't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                RedbError::Io(e)
            })?;
        }
    }

    let db = Database::create(path).map_err(RedbError::from)?;

    // Initialize tables on first run
    let write_txn = db.begin_write()?;
    {
        let _ = write_txn.open_table(tables::USERS)?;
    }
    write_txn.commit()?;

    tracing::info!("Database initialized successfully");

    Ok(Arc::new(db))
}

/// Look up a user record by normalized username
///
/// This is the `get(key) -> value | absent` half of the KV contract. A record
/// that fails to deserialize surfaces as a serialization error (500), it is
/// never silently treated as absent.
pub async fn fetch_user(db: &Db, username: &str) -> Result<Option<UserRecord>> {
    let db = db.clone();
    let username = username.to_owned();

    tokio::task::spawn_blocking(move || -> Result<Option<UserRecord>> {
        let read_txn = db.begin_read()?;
        let users = read_txn.open_table(tables::USERS)?;

        let record = users
            .get(username.as_str())?
            .map(|v| serde_json::from_slice(v.value()))
            .transpose()?;

        Ok(record)
    })
    .await?
}

/// Write a user record under its normalized username, replacing any
/// previous value
///
/// The `put(key, value)` half of the KV contract. There is no conditional
/// put: concurrent read-modify-write cycles on the same record are not
/// serialized and the last writer wins.
pub async fn store_user(db: &Db, username: &str, record: &UserRecord) -> Result<()> {
    let db = db.clone();
    let username = username.to_owned();
    let bytes = serde_json::to_vec(record)?;

    tokio::task::spawn_blocking(move || -> Result<()> {
        let write_txn = db.begin_write()?;
        {
            let mut users = write_txn.open_table(tables::USERS)?;
            users.insert(username.as_str(), bytes.as_slice())?;
        }
        write_txn.commit()?;

        Ok(())
    })
    .await?
}
