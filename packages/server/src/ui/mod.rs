//! HTTP server implementation.

mod handler;
mod middleware;
mod router;
mod runner;
mod signal;
pub mod state;

pub use handler::{ApiError, INTERNAL_ERROR_MESSAGE};
pub use router::{CUSTOMER_ROUTE, build_router};
pub use runner::run;
pub use state::AppState;
