//! Input validation and safety limits for query parameter parsing.
//!
//! The plain parsers accept anything; these caps exist for hosts that
//! expose the parameters to untrusted clients and want to bound what a
//! single request can ask for.

/// Caps applied by the `*_checked` parse entry points.
#[derive(Debug, Clone)]
pub struct FetchLimits {
    /// Maximum length of one raw `fields[<type>]` value in characters
    /// (default: 2048).
    pub max_fieldset_length: usize,
    /// Maximum number of fields selected for one type (default: 100).
    pub max_fields_per_type: usize,
    /// Maximum length of the raw `include` value in characters
    /// (default: 2048).
    pub max_include_length: usize,
    /// Maximum number of relationship paths in `include` (default: 50).
    pub max_include_paths: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            max_fieldset_length: 2048,
            max_fields_per_type: 100,
            max_include_length: 2048,
            max_include_paths: 50,
        }
    }
}

impl FetchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_fieldset_length(mut self, max: usize) -> Self {
        self.max_fieldset_length = max;
        self
    }

    #[must_use]
    pub fn with_max_fields_per_type(mut self, max: usize) -> Self {
        self.max_fields_per_type = max;
        self
    }

    #[must_use]
    pub fn with_max_include_length(mut self, max: usize) -> Self {
        self.max_include_length = max;
        self
    }

    #[must_use]
    pub fn with_max_include_paths(mut self, max: usize) -> Self {
        self.max_include_paths = max;
        self
    }

    /// Validate one raw fieldset value.
    ///
    /// # Errors
    /// Returns [`Error::FieldsetTooLong`] when the raw value exceeds
    /// `max_fieldset_length`.
    pub fn validate_fieldset(&self, resource: &str, raw: &str) -> Result<(), Error> {
        if raw.len() > self.max_fieldset_length {
            return Err(Error::FieldsetTooLong {
                resource: resource.to_owned(),
                max: self.max_fieldset_length,
            });
        }
        Ok(())
    }

    /// Validate the number of fields parsed for one type.
    ///
    /// # Errors
    /// Returns [`Error::TooManyFields`] when the count exceeds
    /// `max_fields_per_type`.
    pub fn validate_field_count(&self, resource: &str, count: usize) -> Result<(), Error> {
        if count > self.max_fields_per_type {
            return Err(Error::TooManyFields {
                resource: resource.to_owned(),
                max: self.max_fields_per_type,
            });
        }
        Ok(())
    }

    /// Validate the raw include value.
    ///
    /// # Errors
    /// Returns [`Error::IncludeTooLong`] when the raw value exceeds
    /// `max_include_length`.
    pub fn validate_include(&self, raw: &str) -> Result<(), Error> {
        if raw.len() > self.max_include_length {
            return Err(Error::IncludeTooLong {
                max: self.max_include_length,
            });
        }
        Ok(())
    }

    /// Validate the number of parsed include paths.
    ///
    /// # Errors
    /// Returns [`Error::TooManyIncludePaths`] when the count exceeds
    /// `max_include_paths`.
    pub fn validate_include_count(&self, count: usize) -> Result<(), Error> {
        if count > self.max_include_paths {
            return Err(Error::TooManyIncludePaths {
                max: self.max_include_paths,
            });
        }
        Ok(())
    }
}

/// Errors produced by the checked parse entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("fields[{resource}] exceeds maximum length of {max} characters")]
    FieldsetTooLong { resource: String, max: usize },

    #[error("fields[{resource}] selects too many fields (max: {max})")]
    TooManyFields { resource: String, max: usize },

    #[error("include exceeds maximum length of {max} characters")]
    IncludeTooLong { max: usize },

    #[error("include lists too many relationship paths (max: {max})")]
    TooManyIncludePaths { max: usize },
}
