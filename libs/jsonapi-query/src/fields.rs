//! Sparse fieldset parsing: `fields[<type>]=a,b,c`.

use serde_json::Value;

use crate::limits::{Error, FetchLimits};
use crate::schema::ResourceSchema;
use crate::split_csv;

/// One selection directive: a resource type key and the ordered set of
/// field names requested for it. An empty `fields` list is meaningful:
/// it selects zero fields, which is distinct from having no directive for
/// the type at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fieldset {
    pub resource: String,
    pub fields: Vec<String>,
}

/// Ordered sequence of fieldsets. Insertion order reflects the order the
/// resource types appeared in the query string, not the order entities
/// will serialize in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Fieldsets(Vec<Fieldset>);

impl Fieldsets {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field names requested for a resource type, if a directive exists.
    #[must_use]
    pub fn get(&self, resource: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|set| set.resource == resource)
            .map(|set| set.fields.as_slice())
    }

    #[must_use]
    pub fn contains(&self, resource: &str) -> bool {
        self.0.iter().any(|set| set.resource == resource)
    }

    pub fn push(&mut self, fieldset: Fieldset) {
        self.0.push(fieldset);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fieldset> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Fieldsets {
    type Item = &'a Fieldset;
    type IntoIter = std::slice::Iter<'a, Fieldset>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Fieldsets {
    type Item = Fieldset;
    type IntoIter = std::vec::IntoIter<Fieldset>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Fieldset> for Fieldsets {
    fn from_iter<I: IntoIterator<Item = Fieldset>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse the raw `fields` parameter into ordered selection directives.
///
/// `raw` is the decoded parameter as a JSON value: a mapping from
/// resource type key to a comma-separated field list. Anything that is
/// not a mapping (absent parameter, flat list, scalar from a malformed
/// query) yields an empty result rather than an error.
///
/// When `schema` is given and its resource type was not named in the
/// query, one directive with the schema's full attribute set is appended
/// after the parsed entries, at most once and only for that type.
pub fn parse_fields(raw: Option<&Value>, schema: Option<&ResourceSchema>) -> Fieldsets {
    let mut out = Fieldsets::new();

    if let Some(Value::Object(map)) = raw {
        for (resource, value) in map {
            out.push(Fieldset {
                resource: resource.clone(),
                fields: split_csv(&value_text(value)),
            });
        }
    }

    if let Some(schema) = schema {
        if !out.contains(schema.resource_type()) {
            out.push(Fieldset {
                resource: schema.resource_type().to_owned(),
                fields: schema.attributes().to_vec(),
            });
        }
    }

    out
}

/// [`parse_fields`] with input caps applied to each parsed directive.
/// The schema-derived default fieldset is trusted and not capped.
///
/// # Errors
/// Returns [`Error`] when a raw field list or a parsed directive exceeds
/// the given limits.
pub fn parse_fields_checked(
    raw: Option<&Value>,
    schema: Option<&ResourceSchema>,
    limits: &FetchLimits,
) -> Result<Fieldsets, Error> {
    if let Some(Value::Object(map)) = raw {
        for (resource, value) in map {
            limits.validate_fieldset(resource, &value_text(value))?;
        }
    }

    let out = parse_fields(raw, schema);
    for set in &out {
        if schema.is_some_and(|s| s.resource_type() == set.resource) && raw_lacks_key(raw, &set.resource) {
            continue;
        }
        limits.validate_field_count(&set.resource, set.fields.len())?;
    }
    Ok(out)
}

fn raw_lacks_key(raw: Option<&Value>, resource: &str) -> bool {
    !matches!(raw, Some(Value::Object(map)) if map.contains_key(resource))
}

/// Coerce one mapping value to the text form the splitter expects.
/// `null` reads as the empty string, matching an explicitly empty field
/// selection.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
