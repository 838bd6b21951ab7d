//! Infrastructure layer: DTOs and concrete repositories.

pub mod dto;
pub mod repository;
