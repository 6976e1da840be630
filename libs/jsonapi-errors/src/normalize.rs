//! Normalization of heterogeneous error input into canonical error objects.

use crate::object::{ErrorObject, OptionalMember};
use crate::source::ErrorSource;

/// Options accepted by [`normalize`]. Currently empty; kept as a slot for
/// forward compatibility with callers that already thread options through.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {}

/// Turn a sequence of error sources into canonical error objects,
/// preserving input order. Pure and infallible: every source variant maps
/// to exactly one object.
#[must_use]
pub fn normalize(sources: &[ErrorSource], _options: &NormalizeOptions) -> Vec<ErrorObject> {
    sources.iter().map(normalize_one).collect()
}

fn normalize_one(source: &ErrorSource) -> ErrorObject {
    match source {
        ErrorSource::Pair { attribute, fields } => ErrorObject {
            status: fields.status.clone().unwrap_or_else(|| "422".to_owned()),
            code: fields.code.clone().unwrap_or_else(|| "invalid".to_owned()),
            title: fields.title.clone().unwrap_or_else(|| "Error".to_owned()),
            detail: fields.message.clone(),
            attribute: OptionalMember::Present(attribute.clone()),
        },
        ErrorSource::Map(fields) => ErrorObject {
            status: fields.status.clone().unwrap_or_else(|| "422".to_owned()),
            code: fields.code.clone().unwrap_or_else(|| "invalid".to_owned()),
            title: fields.title.clone().unwrap_or_else(|| "Error".to_owned()),
            detail: fields.detail.clone(),
            attribute: OptionalMember::Absent,
        },
        // Generic faults always emit the attribute key, null when the
        // fault names no attribute. The asymmetry with the branches above
        // is part of the wire contract.
        ErrorSource::Fault(fault) => ErrorObject {
            status: "422".to_owned(),
            code: fault.kind.clone(),
            title: "Error".to_owned(),
            detail: Some(fault.message.clone()),
            attribute: OptionalMember::from(fault.attribute.clone()),
        },
    }
}
