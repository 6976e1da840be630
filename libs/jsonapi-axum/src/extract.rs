//! Query-string extraction into selection directives.
//!
//! Bracketed sparse-fieldset keys (`fields[user]=id,name`) are folded
//! into an ordered mapping and handed to the interpreter together with
//! the `include` parameter. Extraction is lenient by contract: a
//! malformed query yields empty directives, never a rejection.

use http::request::Parts;
use serde_json::Value;

use jsonapi_query::{
    Error, FetchLimits, Fieldsets, ResourceSchema, parse_fields, parse_fields_checked,
    parse_include, parse_include_checked,
};

/// Parsed selection directives for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct FetchParams {
    /// Sparse fieldsets, in query encounter order.
    pub fields: Fieldsets,
    /// Relationship inclusion paths, in query order.
    pub include: Vec<String>,
}

/// Extract selection directives from request parts. `schema` enables the
/// default-fieldset fallback for the one resource type it describes.
#[must_use]
pub fn fetch_params(parts: &Parts, schema: Option<&ResourceSchema>) -> FetchParams {
    from_query_str(parts.uri.query().unwrap_or(""), schema)
}

/// Extract selection directives from a raw (still percent-encoded) query
/// string.
#[must_use]
pub fn from_query_str(query: &str, schema: Option<&ResourceSchema>) -> FetchParams {
    let (raw_fields, raw_include) = decode(query);
    FetchParams {
        fields: parse_fields(raw_fields.as_ref(), schema),
        include: raw_include.as_deref().map(parse_include).unwrap_or_default(),
    }
}

/// [`from_query_str`] with input caps applied.
///
/// # Errors
/// Returns [`Error`] when a directive exceeds the given limits.
pub fn from_query_str_checked(
    query: &str,
    schema: Option<&ResourceSchema>,
    limits: &FetchLimits,
) -> Result<FetchParams, Error> {
    let (raw_fields, raw_include) = decode(query);
    Ok(FetchParams {
        fields: parse_fields_checked(raw_fields.as_ref(), schema, limits)?,
        include: match raw_include.as_deref() {
            Some(raw) => parse_include_checked(raw, limits)?,
            None => Vec::new(),
        },
    })
}

/// Decode the query string into the raw `fields` value (a mapping when
/// bracketed keys were used, a scalar when a bare `fields` key was) and
/// the raw `include` value. Duplicate keys: last value wins, first
/// position is kept.
fn decode(query: &str) -> (Option<Value>, Option<String>) {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

    let mut fields_map = serde_json::Map::new();
    let mut fields_scalar: Option<String> = None;
    let mut include: Option<String> = None;

    for (key, value) in pairs {
        if let Some(resource) = key
            .strip_prefix("fields[")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            fields_map.insert(resource.to_owned(), Value::String(value));
        } else if key == "fields" {
            fields_scalar = Some(value);
        } else if key == "include" {
            include = Some(value);
        }
    }

    let raw_fields = if fields_map.is_empty() {
        // A bare `fields` key is a malformed (non-mapping) parameter; it
        // flows through so the interpreter can ignore it uniformly.
        fields_scalar.map(Value::String)
    } else {
        Some(Value::Object(fields_map))
    };

    (raw_fields, include)
}
