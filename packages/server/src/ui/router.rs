//! Axum router for the customer API.
//! Routes: `/api/v1/customer` (CRUD), `GET /api/health` (liveness).

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use super::{
    handler::{
        add_customer, delete_customer, get_customer, handle_panic, health_check,
        search_customers, update_customer,
    },
    middleware::log_internal_errors,
    state::AppState,
};

/// Collection route of the customer resource
pub const CUSTOMER_ROUTE: &str = "/api/v1/customer";

/// Builds the axum `Router` with all routes and layers.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(CUSTOMER_ROUTE, get(search_customers).post(add_customer))
        .route(
            &format!("{CUSTOMER_ROUTE}/{{customer_id}}"),
            get(get_customer)
                .put(update_customer)
                .delete(delete_customer),
        )
        .with_state(state)
        // Innermost first: panics become 500s before the logger sees them
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(log_internal_errors))
        .layer(TraceLayer::new_for_http())
}
