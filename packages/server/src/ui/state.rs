//! Shared application state.

use std::sync::Arc;

use crate::domain::CustomerRepository;

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn CustomerRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}
