//! Request middleware.

use axum::{extract::Request, middleware::Next, response::Response};

use super::handler::InternalErrorDetail;

/// Log every internal failure together with the request that caused it.
///
/// Handlers and the panic layer attach an [`InternalErrorDetail`] to 500
/// responses; the caller only ever sees the generic message.
pub async fn log_internal_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let query = request.uri().query().unwrap_or_default().to_owned();

    let response = next.run(request).await;

    if let Some(InternalErrorDetail(detail)) = response.extensions().get::<InternalErrorDetail>() {
        tracing::error!(
            %method,
            %path,
            %query,
            "Unhandled error while processing request: {}",
            detail
        );
    }

    response
}
