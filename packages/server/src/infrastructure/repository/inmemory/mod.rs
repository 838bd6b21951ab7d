//! InMemory Repository 実装

mod customer;

pub use customer::InMemoryCustomerRepository;
