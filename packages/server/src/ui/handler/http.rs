//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
};

use crate::{
    domain::CustomerId,
    infrastructure::dto::http::{CustomerDto, SearchCustomersQuery},
    ui::{router::CUSTOMER_ROUTE, state::AppState},
    usecase::{
        AddCustomerUseCase, DeleteCustomerUseCase, GetCustomerUseCase, SearchCustomersUseCase,
        UpdateCustomerUseCase,
    },
};

use super::error::ApiError;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `GET /api/v1/customer/{customer_id}`
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<CustomerDto>, ApiError> {
    let Path(customer_id) = path?;

    let usecase = GetCustomerUseCase::new(state.repository.clone());
    let customer = usecase.execute(CustomerId::new(customer_id)).await?;

    Ok(Json(customer.into()))
}

/// `GET /api/v1/customer?firstName=&lastName=`
pub async fn search_customers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SearchCustomersQuery>, QueryRejection>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let Query(query) = query?;

    let usecase = SearchCustomersUseCase::new(state.repository.clone());
    let customers = usecase.execute(query).await?;

    Ok(Json(customers.into_iter().map(CustomerDto::from).collect()))
}

/// `POST /api/v1/customer`
///
/// Responds `201 Created` with a `Location` header pointing at the new record.
pub async fn add_customer(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CustomerDto>), ApiError> {
    let Json(input) = body?;

    let usecase = AddCustomerUseCase::new(state.repository.clone());
    let customer = usecase.execute(input).await?;

    let location = format!("{}/{}", CUSTOMER_ROUTE, customer.id);
    tracing::info!("Customer {} created", customer.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer.into()),
    ))
}

/// `PUT /api/v1/customer/{customer_id}`
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CustomerDto>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(customer_id) = path?;
    let Json(input) = body?;

    let usecase = UpdateCustomerUseCase::new(state.repository.clone());
    usecase.execute(CustomerId::new(customer_id), input).await?;

    tracing::info!("Customer {} updated", customer_id);
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/v1/customer/{customer_id}`
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(customer_id) = path?;

    let usecase = DeleteCustomerUseCase::new(state.repository.clone());
    usecase.execute(CustomerId::new(customer_id)).await?;

    tracing::info!("Customer {} deleted", customer_id);
    Ok(StatusCode::NO_CONTENT)
}
