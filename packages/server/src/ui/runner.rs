//! Server bootstrap: wire the repository, bind the socket and serve.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    domain::{CustomerRepository, SearchSettings},
    error::ServerError,
    infrastructure::repository::{InMemoryCustomerRepository, SqliteCustomerRepository},
};

use super::{router::build_router, signal::shutdown_signal, state::AppState};

/// Run the HTTP server until a shutdown signal is received.
///
/// # Errors
///
/// Returns an error if the store cannot be opened, the TCP bind fails,
/// or the server stops unexpectedly.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repository = open_repository(&config)?;
    let app = build_router(Arc::new(AppState::new(repository)));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind {
            addr: addr.to_string(),
            source: e,
        })?;

    tracing::info!("Customer API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

fn open_repository(config: &ServerConfig) -> Result<Arc<dyn CustomerRepository>, ServerError> {
    let settings = SearchSettings::new(config.max_search_results.get());

    if config.in_memory {
        tracing::warn!("Using in-memory store; data will be lost on shutdown");
        let repository: Arc<dyn CustomerRepository> =
            Arc::new(InMemoryCustomerRepository::new(settings));
        return Ok(repository);
    }

    tracing::info!("Opening SQLite store at {}", config.database.display());
    let repository: Arc<dyn CustomerRepository> =
        Arc::new(SqliteCustomerRepository::open(&config.database, settings)?);
    Ok(repository)
}
