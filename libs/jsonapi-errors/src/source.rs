//! Input shapes accepted by the normalization engine.
//!
//! Error-producing collaborators hand over errors in three shapes: an
//! attribute paired with a field mapping (validation collections), a
//! free-standing field mapping, or a generic fault object. The shapes are
//! modeled as one explicit tagged union so the dispatch precedence is
//! auditable instead of being spread over duck-typed branches.

use serde_json::Value;

/// One field mapping, normalized to a single key representation at
/// ingestion. Mixed-origin input (symbol vs. string keys in the source
/// system) collapses here; downstream code never does a dual lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorFields {
    pub status: Option<String>,
    pub code: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub detail: Option<String>,
}

impl ErrorFields {
    /// Read the known keys out of a JSON mapping. Non-mapping input
    /// yields an empty set of fields.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            status: text("status"),
            code: text("code"),
            title: text("title"),
            message: text("message"),
            detail: text("detail"),
        }
    }
}

/// A fault object surfaced by a collaborator: a category code, a human
/// message, and optionally the attribute the fault concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericFault {
    pub kind: String,
    pub message: String,
    pub attribute: Option<String>,
}

impl GenericFault {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

/// The tagged union consumed by [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    /// An attribute name paired with a field mapping.
    Pair {
        attribute: String,
        fields: ErrorFields,
    },
    /// A free-standing field mapping; produces no `attribute` member.
    Map(ErrorFields),
    /// A generic fault; always produces an `attribute` member.
    Fault(GenericFault),
}

impl ErrorSource {
    /// Classify one loosely-shaped input value, in precedence order:
    /// two-element pair first, then mapping, then the generic-fault
    /// fallback. Classification never fails; unrecognized shapes land in
    /// the fault branch so a malformed input cannot take down the
    /// response pipeline.
    #[must_use]
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Array(items) if items.len() == 2 && items[0].is_string() => ErrorSource::Pair {
                attribute: items[0].as_str().unwrap_or_default().to_owned(),
                fields: ErrorFields::from_value(&items[1]),
            },
            Value::Object(_) => ErrorSource::Map(ErrorFields::from_value(value)),
            other => ErrorSource::Fault(GenericFault::new("invalid", display_text(other))),
        }
    }

    /// Build a pair source from one validation-error entry, the
    /// `(attribute, detail)` shape exposed by ORM validation collections.
    pub fn from_validation(attribute: impl Into<String>, detail: impl Into<String>) -> Self {
        ErrorSource::Pair {
            attribute: attribute.into(),
            fields: ErrorFields {
                message: Some(detail.into()),
                ..ErrorFields::default()
            },
        }
    }

    /// Convert a whole validation-error collection into pair sources,
    /// preserving iteration order.
    pub fn from_validation_errors<I, A, D>(entries: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (A, D)>,
        A: Into<String>,
        D: Into<String>,
    {
        entries
            .into_iter()
            .map(|(attribute, detail)| Self::from_validation(attribute, detail))
            .collect()
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
