//! Customer CRUD HTTP server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin customer-api-server -- --max-search-results 50
//! ```

use clap::Parser;
use customer_api_server::ServerConfig;
use customer_api_shared::setup_logger;

#[tokio::main]
async fn main() {
    // Configuration errors exit here, before anything else starts
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = customer_api_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
