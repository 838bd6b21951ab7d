//! Handler modules for HTTP endpoints.

pub mod error;
pub mod http;

pub use error::{ApiError, INTERNAL_ERROR_MESSAGE, InternalErrorDetail, handle_panic};

// Re-export HTTP handlers
pub use http::{
    add_customer, delete_customer, get_customer, health_check, search_customers, update_customer,
};
