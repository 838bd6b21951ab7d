//! Shared fixtures for HTTP integration tests.

use std::{net::SocketAddr, sync::Arc};

use customer_api_server::{
    domain::{CustomerRepository, SearchSettings},
    infrastructure::repository::InMemoryCustomerRepository,
    ui::{AppState, build_router},
};
use tokio::{net::TcpListener, task::JoinHandle};

/// A server bound to an ephemeral port, stopped when dropped.
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server backed by a fresh in-memory store.
    pub async fn start(max_search_results: usize) -> Self {
        let repository = Arc::new(InMemoryCustomerRepository::new(SearchSettings::new(
            max_search_results,
        )));
        Self::start_with(repository).await
    }

    /// Start a server backed by the given repository.
    pub async fn start_with(repository: Arc<dyn CustomerRepository>) -> Self {
        let app = build_router(Arc::new(AppState::new(repository)));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn customer_url(&self) -> String {
        format!("{}/api/v1/customer", self.base_url())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
