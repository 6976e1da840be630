#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Axum boundary integration for the JSON:API compliance layer.
//!
//! Two seams with the framework live here and nowhere else:
//!
//! - [`extract`]: decoding `fields[<type>]` and `include` query
//!   parameters from a request into selection directives.
//! - [`rescue`]: converting faults raised during request handling into
//!   rendered error envelopes that terminate the request.

pub mod extract;
pub mod rescue;

pub use extract::{FetchParams, fetch_params, from_query_str};
pub use rescue::{RequestFault, fault_to_document, rescue_middleware};

pub use jsonapi_errors::MEDIA_TYPE;
