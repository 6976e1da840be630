//! Static fault definitions used by boundary classifiers.

use crate::object::ErrorObject;
use http::StatusCode;

/// Unclassified runtime fault.
pub const INTERNAL_SERVER_ERROR: FaultDef = FaultDef {
    status: 500,
    code: "internal_server_error",
};

/// Resource-not-found fault.
pub const NOT_FOUND: FaultDef = FaultDef {
    status: 404,
    code: "not_found",
};

/// Missing-required-input fault.
pub const UNPROCESSABLE_ENTITY: FaultDef = FaultDef {
    status: 422,
    code: "unprocessable_entity",
};

/// Static fault definition: a status code plus the machine-readable
/// category. The title is resolved from the status's canonical phrase.
#[derive(Debug, Clone, Copy)]
pub struct FaultDef {
    pub status: u16,
    pub code: &'static str,
}

impl FaultDef {
    /// Canonical phrase for the definition's status code.
    #[must_use]
    pub fn title(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Error")
    }

    /// The definition's status as a typed code, falling back to 500 for
    /// out-of-range values.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Produce a complete error object from this definition with the
    /// given detail text.
    #[inline]
    pub fn as_error_object(&self, detail: impl Into<String>) -> ErrorObject {
        ErrorObject::new(self.status.to_string(), self.code, self.title()).with_detail(detail)
    }
}
