//! Core domain models for the customer service.

use chrono::NaiveDate;
use std::fmt;

use super::value_object::{CustomerId, PersonName};

/// A single rule violation found while validating customer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the offending field (e.g. `firstName`)
    pub field: &'static str,
    /// Human-readable description
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validated customer attributes, without identity.
///
/// This is what gets persisted on create and fully replaced on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub date_of_birth: Option<NaiveDate>,
}

impl CustomerProfile {
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        date_of_birth: Option<NaiveDate>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
        }
    }

    /// Validate raw input and build a profile.
    ///
    /// Every field is checked, so the error lists all violations at once
    /// rather than stopping at the first one.
    ///
    /// # Errors
    ///
    /// Returns the list of violations if any required field is missing,
    /// blank or too long.
    pub fn parse(
        first_name: Option<String>,
        last_name: Option<String>,
        date_of_birth: Option<NaiveDate>,
    ) -> Result<Self, Vec<FieldViolation>> {
        let mut violations = Vec::new();
        let first_name = parse_name("firstName", first_name, &mut violations);
        let last_name = parse_name("lastName", last_name, &mut violations);

        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) if violations.is_empty() => {
                Ok(Self::new(first_name, last_name, date_of_birth))
            }
            _ => Err(violations),
        }
    }
}

fn parse_name(
    field: &'static str,
    value: Option<String>,
    violations: &mut Vec<FieldViolation>,
) -> Option<PersonName> {
    let Some(value) = value else {
        violations.push(FieldViolation::new(field, format!("{field} is required")));
        return None;
    };
    match PersonName::new(value) {
        Ok(name) => Some(name),
        Err(e) => {
            violations.push(FieldViolation::new(field, format!("{field} {e}")));
            None
        }
    }
}

/// A persisted customer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Store-assigned identifier
    pub id: CustomerId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    /// Optional date of birth
    pub date_of_birth: Option<NaiveDate>,
}

impl Customer {
    /// Attach an identity to a validated profile
    pub fn new(id: CustomerId, profile: CustomerProfile) -> Self {
        Self {
            id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            date_of_birth: profile.date_of_birth,
        }
    }

    /// Copy of the attributes without identity
    pub fn profile(&self) -> CustomerProfile {
        CustomerProfile::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.date_of_birth,
        )
    }
}
