//! Repository trait (port) for customer persistence.
//!
//! The use case layer depends on this trait only; concrete stores live in
//! `infrastructure::repository`.

use async_trait::async_trait;

use super::{
    entity::{Customer, CustomerProfile},
    error::RepositoryError,
    value_object::{CustomerId, NamePrefix},
};

/// Settings injected into repository implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    /// Maximum number of records returned by a single search
    pub max_results: usize,
}

impl SearchSettings {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }
}

/// Abstract customer store.
///
/// Every method fails only with [`RepositoryError::StoreUnavailable`].
/// Missing records and write conflicts are reported through the return value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Persist a new customer and return the store-assigned id.
    async fn add(&self, profile: &CustomerProfile) -> Result<CustomerId, RepositoryError>;

    /// Find a customer by id.
    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Find customers whose names start with both prefixes, in ascending id
    /// order, capped at [`SearchSettings::max_results`].
    async fn search_by_name(
        &self,
        first_name: &NamePrefix,
        last_name: &NamePrefix,
    ) -> Result<Vec<Customer>, RepositoryError>;

    /// Replace the record with the same id. Returns false if nothing was updated.
    async fn update(&self, customer: &Customer) -> Result<bool, RepositoryError>;

    /// Delete a customer by id. Returns false if nothing was deleted.
    async fn delete(&self, id: CustomerId) -> Result<bool, RepositoryError>;
}
