//! Top-level `{ "errors": [...] }` error document.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::normalize::{NormalizeOptions, normalize};
use crate::object::ErrorObject;
use crate::source::ErrorSource;

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// The error envelope: an ordered list of error objects under the
/// `errors` key and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(feature = "utoipa", schema(title = "ErrorDocument"))]
#[must_use]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl ErrorDocument {
    pub fn new(errors: Vec<ErrorObject>) -> Self {
        Self { errors }
    }

    /// Envelope holding a single error object.
    pub fn single(error: ErrorObject) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Classify, normalize and wrap loosely-shaped input in one step.
    pub fn from_values(values: &[serde_json::Value], options: &NormalizeOptions) -> Self {
        let sources: Vec<ErrorSource> = values.iter().map(ErrorSource::classify).collect();
        Self::from_sources(&sources, options)
    }

    /// Normalize and wrap already-classified sources.
    pub fn from_sources(sources: &[ErrorSource], options: &NormalizeOptions) -> Self {
        Self::new(normalize(sources, options))
    }

    /// The response status implied by this document: the first record's
    /// status text, falling back to 422 (the validation-shaped default)
    /// when the document is empty or the text is not a status code.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.errors
            .first()
            .and_then(|error| error.status.parse::<u16>().ok())
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Serialize the envelope. Deterministic: the same records always
    /// produce byte-identical output.
    ///
    /// # Errors
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Axum integration: render the envelope directly as a response. The
/// status comes from [`ErrorDocument::status`]; classifier code that
/// knows the status explicitly should pair the document with it instead.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ErrorDocument {
    fn into_response(self) -> axum::response::Response {
        use axum::http::HeaderValue;

        let status = self.status();
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            axum::http::header::CONTENT_TYPE,
            HeaderValue::from_static(crate::MEDIA_TYPE),
        );
        resp
    }
}
