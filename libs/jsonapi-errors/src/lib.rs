#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! JSON:API error envelope support: canonical error objects, normalization
//! of heterogeneous error input, and the top-level `{ "errors": [...] }`
//! document.
//!
//! See: <https://jsonapi.org/format/#errors>

pub mod catalog;
pub mod document;
pub mod normalize;
pub mod object;
pub mod source;

pub use document::ErrorDocument;
pub use normalize::{NormalizeOptions, normalize};
pub use object::{ErrorObject, OptionalMember};
pub use source::{ErrorFields, ErrorSource, GenericFault};

/// JSON:API media type.
pub const MEDIA_TYPE: &str = "application/vnd.api+json";
