//! Customer CRUD service library.
//!
//! Layered as `domain` (entities, value objects, repository trait),
//! `usecase` (validation and outcome mapping), `infrastructure`
//! (DTOs, SQLite and in-memory stores) and `ui` (axum handlers and server).

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
