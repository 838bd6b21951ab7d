//! SQLite Customer Repository 実装
//!
//! ドメイン層が定義する CustomerRepository trait の具体的な実装。
//!
//! ## 競合の扱い
//!
//! 更新・削除時に SQLite がビジー／ロック状態を返した場合は、同時更新による
//! 競合とみなしてエラーではなく `false`（適用されなかった）を返します。
//! それ以外の SQLite エラーは全て `RepositoryError::StoreUnavailable` になります。

use std::{
    path::Path,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

use super::schema::create_tables;
use crate::domain::{
    Customer, CustomerId, CustomerProfile, CustomerRepository, NamePrefix, PersonName,
    RepositoryError, SearchSettings,
};

/// Column list shared by every SELECT.
const COLS: &str = "id, first_name, last_name, date_of_birth";

/// SQLite Customer Repository 実装
pub struct SqliteCustomerRepository {
    conn: Mutex<Connection>,
    settings: SearchSettings,
}

impl SqliteCustomerRepository {
    /// データベースファイルを開く（存在しなければ作成する）
    ///
    /// # Errors
    ///
    /// ファイルを開けない場合、またはテーブル作成に失敗した場合
    pub fn open(path: impl AsRef<Path>, settings: SearchSettings) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path).map_err(map_sqlite_err)?;
        Self::from_connection(conn, settings)
    }

    /// インメモリの SQLite データベースを開く
    pub fn open_in_memory(settings: SearchSettings) -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory().map_err(map_sqlite_err)?;
        Self::from_connection(conn, settings)
    }

    fn from_connection(conn: Connection, settings: SearchSettings) -> Result<Self, RepositoryError> {
        create_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            settings,
        })
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, RepositoryError> {
        self.conn.lock().map_err(|e| RepositoryError::StoreUnavailable {
            message: format!("connection lock poisoned: {e}"),
        })
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn add(&self, profile: &CustomerProfile) -> Result<CustomerId, RepositoryError> {
        let conn = self.lock_conn()?;
        conn.execute(
            "INSERT INTO customers \
             (first_name, last_name, first_name_key, last_name_key, date_of_birth) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                profile.first_name.as_str(),
                profile.last_name.as_str(),
                profile.first_name.search_key(),
                profile.last_name.search_key(),
                profile.date_of_birth,
            ],
        )
        .map_err(map_sqlite_err)?;
        Ok(CustomerId::new(conn.last_insert_rowid()))
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let conn = self.lock_conn()?;
        let sql = format!("SELECT {COLS} FROM customers WHERE id = ?1");
        conn.query_row(&sql, params![id.value()], row_to_customer)
            .optional()
            .map_err(map_sqlite_err)
    }

    async fn search_by_name(
        &self,
        first_name: &NamePrefix,
        last_name: &NamePrefix,
    ) -> Result<Vec<Customer>, RepositoryError> {
        let conn = self.lock_conn()?;
        // substr() compares characters, so no LIKE escaping is needed
        let sql = format!(
            "SELECT {COLS} FROM customers \
             WHERE substr(first_name_key, 1, length(?1)) = ?1 \
             AND substr(last_name_key, 1, length(?2)) = ?2 \
             ORDER BY id ASC LIMIT ?3"
        );
        let limit = i64::try_from(self.settings.max_results).unwrap_or(i64::MAX);
        let mut stmt = conn.prepare(&sql).map_err(map_sqlite_err)?;
        let customers = stmt
            .query_map(
                params![first_name.as_str(), last_name.as_str(), limit],
                row_to_customer,
            )
            .map_err(map_sqlite_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlite_err)?;
        Ok(customers)
    }

    async fn update(&self, customer: &Customer) -> Result<bool, RepositoryError> {
        let conn = self.lock_conn()?;
        let result = conn.execute(
            "UPDATE customers SET first_name = ?2, last_name = ?3, \
             first_name_key = ?4, last_name_key = ?5, date_of_birth = ?6 \
             WHERE id = ?1",
            params![
                customer.id.value(),
                customer.first_name.as_str(),
                customer.last_name.as_str(),
                customer.first_name.search_key(),
                customer.last_name.search_key(),
                customer.date_of_birth,
            ],
        );
        applied(result, "update", customer.id)
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError> {
        let conn = self.lock_conn()?;
        let result = conn.execute("DELETE FROM customers WHERE id = ?1", params![id.value()]);
        applied(result, "delete", id)
    }
}

/// Turn the outcome of a mutating statement into the "applied" flag.
fn applied(
    result: rusqlite::Result<usize>,
    operation: &str,
    id: CustomerId,
) -> Result<bool, RepositoryError> {
    match result {
        Ok(affected) => Ok(affected > 0),
        Err(e) if is_write_conflict(&e) => {
            tracing::warn!("Write conflict on {} of customer {}: {}", operation, id, e);
            Ok(false)
        }
        Err(e) => Err(map_sqlite_err(e)),
    }
}

fn is_write_conflict(e: &rusqlite::Error) -> bool {
    matches!(
        e.sqlite_error_code(),
        Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
    )
}

/// Maps a `rusqlite::Error` to `RepositoryError::StoreUnavailable`.
fn map_sqlite_err(e: rusqlite::Error) -> RepositoryError {
    RepositoryError::StoreUnavailable {
        message: e.to_string(),
    }
}

fn row_to_customer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Customer> {
    let id: i64 = row.get(0)?;
    let first_name: String = row.get(1)?;
    let last_name: String = row.get(2)?;
    let date_of_birth: Option<NaiveDate> = row.get(3)?;

    let first_name = PersonName::new(first_name).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let last_name = PersonName::new(last_name).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Customer::new(
        CustomerId::new(id),
        CustomerProfile::new(first_name, last_name, date_of_birth),
    ))
}
