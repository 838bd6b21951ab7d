//! Domain layer for the customer service.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{Customer, CustomerProfile, FieldViolation};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::{CustomerRepository, SearchSettings};
pub use value_object::{CustomerId, NAME_MAX_CHARS, NamePrefix, PersonName};

#[cfg(test)]
pub use repository::MockCustomerRepository;
