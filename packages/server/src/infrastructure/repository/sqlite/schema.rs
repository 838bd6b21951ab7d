//! Table definition for the customer store.

use rusqlite::Connection;

use crate::domain::RepositoryError;

/// Creates the `customers` table if it does not exist yet.
///
/// `AUTOINCREMENT` keeps deleted ids from being handed out again.
/// The `*_key` columns hold the trimmed, lower-cased names used by prefix search.
pub(super) fn create_tables(conn: &Connection) -> Result<(), RepositoryError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS customers (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name     TEXT NOT NULL,
            last_name      TEXT NOT NULL,
            first_name_key TEXT NOT NULL,
            last_name_key  TEXT NOT NULL,
            date_of_birth  TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_customers_last_name_key ON customers(last_name_key);
        CREATE INDEX IF NOT EXISTS idx_customers_first_name_key ON customers(first_name_key);",
    )
    .map_err(|e| RepositoryError::StoreUnavailable {
        message: format!("failed to create tables: {e}"),
    })
}
