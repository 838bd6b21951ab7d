//! SQLite Repository 実装
//!
//! 本番環境で使用する永続ストア。rusqlite を介して単一のデータベースファイルを扱います。

mod customer;
mod schema;

pub use customer::SqliteCustomerRepository;
