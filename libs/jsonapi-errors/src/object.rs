//! Canonical error object (pure data model, no HTTP framework dependencies)

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(feature = "utoipa")]
use utoipa::ToSchema;

/// An optional member that distinguishes "key omitted" from "key present
/// with a null value".
///
/// Error objects built from attribute/detail pairs or plain field mappings
/// omit an absent `attribute` entirely, while objects built from generic
/// faults always carry the key, `null` when the fault names no attribute.
/// `Option<String>` cannot express both behaviors in one struct, so the
/// three states are made explicit here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionalMember {
    /// Key is omitted from the serialized object.
    #[default]
    Absent,
    /// Key is present with a `null` value.
    Null,
    /// Key is present with a string value.
    Present(String),
}

impl OptionalMember {
    /// True when the member must be omitted from the serialized form.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, OptionalMember::Absent)
    }

    /// The contained value, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionalMember::Present(value) => Some(value),
            OptionalMember::Absent | OptionalMember::Null => None,
        }
    }
}

impl From<Option<String>> for OptionalMember {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) => OptionalMember::Present(value),
            None => OptionalMember::Null,
        }
    }
}

impl Serialize for OptionalMember {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            // Absent is skipped at the field level; serializing it anyway
            // degrades to null rather than inventing a value.
            OptionalMember::Absent | OptionalMember::Null => serializer.serialize_none(),
            OptionalMember::Present(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for OptionalMember {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<String>::deserialize(deserializer)? {
            Some(value) => OptionalMember::Present(value),
            None => OptionalMember::Null,
        })
    }
}

/// A single JSON:API error object.
///
/// `status`, `code` and `title` are always present on the wire. `detail`
/// and `attribute` are omitted when absent, never emitted as null, with
/// one exception: objects produced from generic faults always carry
/// `attribute` (see [`OptionalMember`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
#[cfg_attr(
    feature = "utoipa",
    schema(title = "ErrorObject", description = "JSON:API error object")
)]
#[must_use]
pub struct ErrorObject {
    /// HTTP status code as text, e.g. `"422"`.
    pub status: String,
    /// Short machine-readable category, e.g. `"invalid"`, `"not_found"`.
    pub code: String,
    /// Human-readable status label.
    pub title: String,
    /// Human-readable explanation for this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub detail: Option<String>,
    /// The attribute the error concerns, for attribute-scoped errors.
    #[serde(default, skip_serializing_if = "OptionalMember::is_absent")]
    #[cfg_attr(feature = "utoipa", schema(value_type = Option<String>))]
    pub attribute: OptionalMember,
}

impl ErrorObject {
    /// Create an error object with the three required members.
    pub fn new(
        status: impl Into<String>,
        code: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            code: code.into(),
            title: title.into(),
            detail: None,
            attribute: OptionalMember::Absent,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = OptionalMember::Present(attribute.into());
        self
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn required_members_only() {
        let object = ErrorObject::new("422", "invalid", "Error");
        let json = serde_json::to_string(&object).unwrap();
        assert_eq!(json, r#"{"status":"422","code":"invalid","title":"Error"}"#);
    }

    #[test]
    fn absent_members_are_omitted_not_null() {
        let object = ErrorObject::new("422", "invalid", "Error");
        let value = serde_json::to_value(&object).unwrap();
        let map = value.as_object().unwrap();
        assert!(!map.contains_key("detail"));
        assert!(!map.contains_key("attribute"));
    }

    #[test]
    fn null_attribute_is_emitted() {
        let mut object = ErrorObject::new("422", "blank", "Error");
        object.attribute = OptionalMember::Null;
        let value = serde_json::to_value(&object).unwrap();
        assert!(value.as_object().unwrap().contains_key("attribute"));
        assert!(value["attribute"].is_null());
    }

    #[test]
    fn builder_sets_optional_members() {
        let object = ErrorObject::new("422", "blank", "Error")
            .with_detail("User must exist")
            .with_attribute("user");
        assert_eq!(object.detail.as_deref(), Some("User must exist"));
        assert_eq!(object.attribute, OptionalMember::Present("user".to_owned()));
    }

    #[test]
    fn deserializes_missing_attribute_as_absent() {
        let object: ErrorObject =
            serde_json::from_str(r#"{"status":"422","code":"invalid","title":"Error"}"#).unwrap();
        assert!(object.attribute.is_absent());
    }

    #[test]
    fn deserializes_null_attribute_as_null() {
        let object: ErrorObject = serde_json::from_str(
            r#"{"status":"422","code":"invalid","title":"Error","attribute":null}"#,
        )
        .unwrap();
        assert_eq!(object.attribute, OptionalMember::Null);
    }
}
