//! Fault rescue at the request boundary.
//!
//! Faults raised while handling a request are classified into exactly one
//! canonical error record and rendered as the error envelope, terminating
//! the request with the mapped status. Handlers opt in by returning
//! `Result<_, RequestFault>`; the [`rescue_middleware`] guard additionally
//! re-wraps bare framework error responses (routing 404s, panic 500s) so
//! a client never sees an empty-body failure.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use jsonapi_errors::{ErrorDocument, ErrorObject, MEDIA_TYPE, catalog};

/// A fault intercepted at the request boundary.
///
/// The specific categories map to fixed records; everything else is
/// carried as the unclassified catch-all and surfaces only its message.
#[derive(Debug, thiserror::Error)]
pub enum RequestFault {
    #[error("resource not found")]
    NotFound,

    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Map a fault to its response status and single-record envelope.
/// Specific categories are matched before the catch-all.
#[must_use]
pub fn fault_to_document(fault: &RequestFault) -> (StatusCode, ErrorDocument) {
    match fault {
        RequestFault::NotFound => (
            catalog::NOT_FOUND.status_code(),
            ErrorDocument::single(catalog::NOT_FOUND.as_error_object("Resource not found")),
        ),
        RequestFault::MissingParameter(name) => {
            tracing::debug!(parameter = %name, "required parameter missing");
            (
                catalog::UNPROCESSABLE_ENTITY.status_code(),
                ErrorDocument::single(
                    catalog::UNPROCESSABLE_ENTITY
                        .as_error_object("Required parameter missing or invalid"),
                ),
            )
        }
        RequestFault::Internal(err) => {
            tracing::error!(error = %err, "unhandled fault in request handler");
            (
                catalog::INTERNAL_SERVER_ERROR.status_code(),
                ErrorDocument::single(
                    catalog::INTERNAL_SERVER_ERROR.as_error_object(err.to_string()),
                ),
            )
        }
    }
}

impl IntoResponse for RequestFault {
    fn into_response(self) -> Response {
        let (status, document) = fault_to_document(&self);
        (status, document).into_response()
    }
}

/// Boundary guard: passes successful and already-enveloped responses
/// through untouched and re-wraps any other error status into the
/// envelope.
pub async fn rescue_middleware(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }
    if is_document_response(&response) {
        return response;
    }

    (status, envelope_for_status(status)).into_response()
}

/// Check if a response already carries a JSON:API document.
fn is_document_response(response: &Response) -> bool {
    response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains(MEDIA_TYPE))
}

/// Build the envelope for a bare error status. The two classified
/// statuses get their fixed details; everything else gets the required
/// members only, since no message is available to surface.
fn envelope_for_status(status: StatusCode) -> ErrorDocument {
    match status.as_u16() {
        404 => ErrorDocument::single(catalog::NOT_FOUND.as_error_object("Resource not found")),
        422 => ErrorDocument::single(
            catalog::UNPROCESSABLE_ENTITY.as_error_object("Required parameter missing or invalid"),
        ),
        other => ErrorDocument::single(ErrorObject::new(
            other.to_string(),
            status_code_token(status),
            status.canonical_reason().unwrap_or("Error"),
        )),
    }
}

/// Machine-readable token for a status, e.g. `method_not_allowed`.
fn status_code_token(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("error")
        .to_lowercase()
        .replace([' ', '-'], "_")
}
