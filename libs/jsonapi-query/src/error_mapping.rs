//! Mapping from query parsing errors to the error envelope (pure data).
//!
//! Limit violations are client errors: each maps to a single 422 record.
//! The HTTP layer decides how the `(status, document)` pair becomes a
//! response.

use http::StatusCode;
use jsonapi_errors::{ErrorDocument, ErrorObject};

use crate::limits::Error;

impl From<&Error> for ErrorObject {
    fn from(err: &Error) -> Self {
        let code = match err {
            Error::FieldsetTooLong { .. } | Error::TooManyFields { .. } => "invalid_fieldset",
            Error::IncludeTooLong { .. } | Error::TooManyIncludePaths { .. } => "invalid_include",
        };
        ErrorObject::new("422", code, "Error").with_detail(err.to_string())
    }
}

/// Wrap a parsing error in a renderable envelope with its status.
#[must_use]
pub fn to_error_document(err: &Error) -> (StatusCode, ErrorDocument) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        ErrorDocument::single(ErrorObject::from(err)),
    )
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn fieldset_errors_map_to_invalid_fieldset() {
        let err = Error::TooManyFields {
            resource: "user".to_owned(),
            max: 100,
        };
        let object = ErrorObject::from(&err);

        assert_eq!(object.status, "422");
        assert_eq!(object.code, "invalid_fieldset");
        assert_eq!(object.title, "Error");
        assert!(object.detail.as_deref().unwrap().contains("user"));
    }

    #[test]
    fn include_errors_map_to_invalid_include() {
        let err = Error::TooManyIncludePaths { max: 50 };
        let object = ErrorObject::from(&err);
        assert_eq!(object.code, "invalid_include");
    }

    #[test]
    fn document_carries_unprocessable_status() {
        let err = Error::IncludeTooLong { max: 2048 };
        let (status, document) = to_error_document(&err);

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(document.errors.len(), 1);
        assert_eq!(document.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
