#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Query parameter interpreter for JSON:API fetching.
//!
//! Parses the `fields[<type>]` sparse-fieldset and `include` relationship
//! query parameters into structured selection directives for a
//! serialization layer:
//!
//! - `GET /resource?fields[user]=id,first_name`
//! - `GET /resource?include=notes,notes.author`
//!
//! The plain parsers are infallible by contract: malformed input yields
//! an empty selection, never an error. Input caps live in [`limits`] and
//! are enforced only by the `*_checked` entry points.

pub mod error_mapping;
pub mod fields;
pub mod include;
pub mod limits;
pub mod schema;

pub use fields::{Fieldset, Fieldsets, parse_fields, parse_fields_checked};
pub use include::{parse_include, parse_include_checked};
pub use limits::{Error, FetchLimits};
pub use schema::ResourceSchema;

/// Split a comma-separated value into trimmed, non-empty tokens,
/// preserving order and duplicates.
pub(crate) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
