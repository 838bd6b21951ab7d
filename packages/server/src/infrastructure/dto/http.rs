//! HTTP API request/response DTOs for the customer service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Customer, FieldViolation};

/// Customer representation used in request and response bodies.
///
/// Name fields are optional on input so that a missing field is reported as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>, // ISO 8601 date
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: Some(customer.id.value()),
            first_name: Some(customer.first_name.into_string()),
            last_name: Some(customer.last_name.into_string()),
            date_of_birth: customer.date_of_birth,
        }
    }
}

/// Query string of the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCustomersQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Error body shared by every structured error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub error_description: String,
}

impl ErrorDetails {
    pub fn new(error_description: impl Into<String>) -> Self {
        Self {
            error_description: error_description.into(),
        }
    }
}

/// Error body for field validation failures, keyed by field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorDetails {
    pub error_description: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<&[FieldViolation]> for ValidationErrorDetails {
    fn from(violations: &[FieldViolation]) -> Self {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for violation in violations {
            errors
                .entry(violation.field.to_string())
                .or_default()
                .push(violation.message.clone());
        }
        Self {
            error_description: "one or more validation errors occurred".to_string(),
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, CustomerProfile, PersonName};

    #[test]
    fn test_customer_dto_uses_camel_case() {
        // テスト項目: JSON のフィールド名は camelCase になる
        // given (前提条件):
        let customer = Customer::new(
            CustomerId::new(3),
            CustomerProfile::new(
                PersonName::new("Jane".to_string()).unwrap(),
                PersonName::new("Smith".to_string()).unwrap(),
                NaiveDate::from_ymd_opt(1990, 4, 1),
            ),
        );

        // when (操作):
        let json = serde_json::to_value(CustomerDto::from(customer)).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "firstName": "Jane",
                "lastName": "Smith",
                "dateOfBirth": "1990-04-01"
            })
        );
    }

    #[test]
    fn test_customer_dto_missing_fields_deserialize_as_none() {
        // テスト項目: 欠けているフィールドは None としてデシリアライズされる
        // when (操作):
        let dto: CustomerDto = serde_json::from_str(r#"{"firstName":"Jane"}"#).unwrap();

        // then (期待する結果):
        assert_eq!(dto.id, None);
        assert_eq!(dto.first_name.as_deref(), Some("Jane"));
        assert_eq!(dto.last_name, None);
        assert_eq!(dto.date_of_birth, None);
    }

    #[test]
    fn test_validation_error_details_groups_by_field() {
        // テスト項目: 違反はフィールドごとにまとめられる
        // given (前提条件):
        let violations = vec![
            FieldViolation::new("firstName", "firstName is required"),
            FieldViolation::new("lastName", "lastName cannot be empty"),
        ];

        // when (操作):
        let details = ValidationErrorDetails::from(violations.as_slice());

        // then (期待する結果):
        assert_eq!(details.errors.len(), 2);
        assert_eq!(details.errors["firstName"], vec!["firstName is required"]);
    }
}
