//! Process configuration.
//!
//! Every option can be given on the command line or through the environment.
//! `--max-search-results` has no default: a missing, non-numeric or zero
//! value makes the process exit at startup.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    num::NonZeroUsize,
    path::PathBuf,
};

use clap::Parser;

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "customer-api-server", version, about = "Customer CRUD HTTP server")]
pub struct ServerConfig {
    /// Maximum number of customers returned by a single search
    #[arg(long, env = "SEARCH_CUSTOMERS_MAX_RESULTS")]
    pub max_search_results: NonZeroUsize,

    /// Address to bind
    #[arg(long, env = "CUSTOMER_API_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind
    #[arg(short, long, env = "CUSTOMER_API_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file
    #[arg(long, env = "CUSTOMER_API_DATABASE", default_value = "customers.db")]
    pub database: PathBuf,

    /// Keep customers in memory instead of SQLite
    #[arg(long, env = "CUSTOMER_API_IN_MEMORY")]
    pub in_memory: bool,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "CUSTOMER_API_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
