//! Error types for field type construction and configuration.
//!
//! Every error here describes programmer misuse. None of them is transient,
//! so nothing is retried: the error is returned to the immediate caller.
//! Validation itself (`is_type_of`) has no error channel.

use std::collections::HashMap;
use thiserror::Error;

/// The main error type for field type operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldTypeError {
    /// A field type could not be constructed.
    #[error("{0}")]
    Construction(#[from] ConstructionError),

    /// The attribute is not declared by the field type's kind.
    #[error("The attribute '{attribute}' is not supported on '{kind}' field types")]
    UnsupportedAttribute {
        /// The attribute name as given by the caller.
        attribute: String,
        /// The kind that rejected it.
        kind: String,
    },

    /// A non-boolean value was supplied for an attribute.
    #[error("The attribute '{attribute}' must be of 'boolean' type, got '{found}'")]
    InvalidAttributeType {
        /// The attribute name.
        attribute: String,
        /// A short description of the supplied value.
        found: String,
    },

    /// The attribute is already active.
    #[error("Chaining the attribute '{attribute}' has no effect")]
    NoEffect {
        /// The attribute name.
        attribute: String,
    },

    /// The attribute is mutually exclusive with one already active.
    #[error("A field cannot be '{attribute}' and '{conflicting}' at the same time")]
    Conflict {
        /// The attribute being enabled.
        attribute: String,
        /// The active attribute it excludes.
        conflicting: String,
    },

    /// Chaining and method calls were mixed on one instance.
    #[error("Attributes cannot be set by {attempted} once they were set by {established}")]
    MixedConfigurationStyle {
        /// The style the caller tried to use.
        attempted: String,
        /// The style already recorded on the instance.
        established: String,
    },
}

impl FieldTypeError {
    /// Creates an unsupported attribute error.
    #[must_use]
    pub fn unsupported_attribute(attribute: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::UnsupportedAttribute {
            attribute: attribute.into(),
            kind: kind.into(),
        }
    }

    /// Creates an invalid attribute type error.
    #[must_use]
    pub fn invalid_attribute_type(attribute: impl Into<String>, found: impl Into<String>) -> Self {
        Self::InvalidAttributeType {
            attribute: attribute.into(),
            found: found.into(),
        }
    }

    /// Creates a no-effect error.
    #[must_use]
    pub fn no_effect(attribute: impl Into<String>) -> Self {
        Self::NoEffect {
            attribute: attribute.into(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict(attribute: impl Into<String>, conflicting: impl Into<String>) -> Self {
        Self::Conflict {
            attribute: attribute.into(),
            conflicting: conflicting.into(),
        }
    }

    /// Creates a mixed configuration style error.
    #[must_use]
    pub fn mixed_configuration_style(
        attempted: impl Into<String>,
        established: impl Into<String>,
    ) -> Self {
        Self::MixedConfigurationStyle {
            attempted: attempted.into(),
            established: established.into(),
        }
    }

    /// Stable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Construction(err) => err.code(),
            Self::UnsupportedAttribute { .. } => "FIELD-ATTR-UNSUPPORTED",
            Self::InvalidAttributeType { .. } => "FIELD-ATTR-TYPE",
            Self::NoEffect { .. } => "FIELD-ATTR-NO_EFFECT",
            Self::Conflict { .. } => "FIELD-ATTR-CONFLICT",
            Self::MixedConfigurationStyle { .. } => "FIELD-ATTR-MIXED_STYLE",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = match self {
            Self::Construction(err) => return err.to_dict(),
            Self::UnsupportedAttribute { attribute, kind } => {
                let mut map = HashMap::new();
                map.insert("attribute".to_string(), serde_json::json!(attribute));
                map.insert("kind".to_string(), serde_json::json!(kind));
                map
            }
            Self::InvalidAttributeType { attribute, found } => {
                let mut map = HashMap::new();
                map.insert("attribute".to_string(), serde_json::json!(attribute));
                map.insert("found".to_string(), serde_json::json!(found));
                map
            }
            Self::NoEffect { attribute } => {
                let mut map = HashMap::new();
                map.insert("attribute".to_string(), serde_json::json!(attribute));
                map
            }
            Self::Conflict {
                attribute,
                conflicting,
            } => {
                let mut map = HashMap::new();
                map.insert("attribute".to_string(), serde_json::json!(attribute));
                map.insert("conflicting".to_string(), serde_json::json!(conflicting));
                map
            }
            Self::MixedConfigurationStyle {
                attempted,
                established,
            } => {
                let mut map = HashMap::new();
                map.insert("attempted".to_string(), serde_json::json!(attempted));
                map.insert("established".to_string(), serde_json::json!(established));
                map
            }
        };

        map.insert("code".to_string(), serde_json::json!(self.code()));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// Errors raised while constructing a field type.
///
/// Construction either succeeds completely or fails with one of these; no
/// partially built instance is ever observable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The primitive tag is not in the supported enumeration.
    #[error("The type '{tag}' is not supported")]
    UnsupportedPrimitive {
        /// The rejected tag.
        tag: String,
    },

    /// The determiner has the wrong shape for the kind.
    #[error("Invalid determiner for '{kind}': {reason}")]
    InvalidDeterminer {
        /// The kind being constructed.
        kind: String,
        /// Why the determiner was rejected.
        reason: String,
    },

    /// The determiner is required but was `undefined`.
    #[error("The determiner of '{kind}' field types cannot be 'undefined', make the field optional instead")]
    MissingDeterminer {
        /// The kind being constructed.
        kind: String,
    },

    /// Too few variants were supplied.
    #[error("The determiner of '{kind}' must contain {required} or more variants, got {found}")]
    TooFewVariants {
        /// The kind being constructed.
        kind: String,
        /// The minimum number of variants.
        required: usize,
        /// The number supplied.
        found: usize,
    },

    /// Two variants are duplicates of each other.
    #[error("The determiner of '{kind}' cannot contain duplicate variants")]
    DuplicateVariants {
        /// The kind being constructed.
        kind: String,
    },

    /// The initial attribute map is not an ordinary object.
    #[error("Attributes of a field type must be in an ordinary object, got '{found}'")]
    InvalidAttributes {
        /// A short description of what was supplied.
        found: String,
    },

    /// The kind declares more attributes than a selector can address.
    #[error("'{kind}' declares {count} attributes, at most {max} can be memoized")]
    TooManyAttributes {
        /// The kind being wrapped.
        kind: String,
        /// The number of declared attributes.
        count: usize,
        /// The selector capacity.
        max: usize,
    },
}

impl ConstructionError {
    /// Creates an invalid determiner error.
    #[must_use]
    pub fn invalid_determiner(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDeterminer {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedPrimitive { .. } => "FIELD-CONSTRUCT-PRIMITIVE",
            Self::InvalidDeterminer { .. } => "FIELD-CONSTRUCT-DETERMINER",
            Self::MissingDeterminer { .. } => "FIELD-CONSTRUCT-MISSING",
            Self::TooFewVariants { .. } => "FIELD-CONSTRUCT-ARITY",
            Self::DuplicateVariants { .. } => "FIELD-CONSTRUCT-DUPLICATE",
            Self::InvalidAttributes { .. } => "FIELD-CONSTRUCT-ATTRIBUTES",
            Self::TooManyAttributes { .. } => "FIELD-CONSTRUCT-CAPACITY",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), serde_json::json!(self.code()));
        map.insert("message".to_string(), serde_json::json!(self.to_string()));

        match self {
            Self::UnsupportedPrimitive { tag } => {
                map.insert("tag".to_string(), serde_json::json!(tag));
            }
            Self::InvalidDeterminer { kind, .. }
            | Self::MissingDeterminer { kind }
            | Self::DuplicateVariants { kind } => {
                map.insert("kind".to_string(), serde_json::json!(kind));
            }
            Self::TooFewVariants {
                kind,
                required,
                found,
            } => {
                map.insert("kind".to_string(), serde_json::json!(kind));
                map.insert("required".to_string(), serde_json::json!(required));
                map.insert("found".to_string(), serde_json::json!(found));
            }
            Self::InvalidAttributes { found } => {
                map.insert("found".to_string(), serde_json::json!(found));
            }
            Self::TooManyAttributes { kind, count, max } => {
                map.insert("kind".to_string(), serde_json::json!(kind));
                map.insert("count".to_string(), serde_json::json!(count));
                map.insert("max".to_string(), serde_json::json!(max));
            }
        }

        map
    }
}
