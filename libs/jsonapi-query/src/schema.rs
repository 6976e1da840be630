//! Schema descriptors for the default-fieldset fallback.

/// Describes one resource type: its canonical type name and its full
/// ordered attribute set. Supplied explicitly by the caller; nothing is
/// inferred from naming conventions.
///
/// Used by [`crate::parse_fields`] to back-fill a default fieldset when
/// the request did not name fields for this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSchema {
    resource: String,
    attributes: Vec<String>,
}

impl ResourceSchema {
    /// Create a descriptor for the given canonical resource type name.
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            attributes: Vec::new(),
        }
    }

    /// Append one attribute name. Order is preserved and significant: it
    /// becomes the order of the default fieldset.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Append several attribute names.
    #[must_use]
    pub fn with_attributes<I, A>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    /// The canonical resource type name.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource
    }

    /// The full ordered attribute set.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}
