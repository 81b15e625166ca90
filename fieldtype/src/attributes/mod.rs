//! Field type attributes.
//!
//! An attribute is a named boolean modifier. Each kind declares an ordered
//! list of [`AttributeDescriptor`]s: the order fixes an attribute's selector
//! bit in the reusable cache, the default is immutable, and `excludes` names
//! a mutually exclusive partner.

mod map;
mod state;

pub use map::AttributeMap;
pub use state::Attributes;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every attribute name known to the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    /// `undefined` is accepted.
    IsOptional,
    /// Marker for the record-schema layer; ignored by validation.
    IsReadonly,
    /// Empty strings and arrays are rejected.
    IsFilled,
    /// Non-integral numbers are rejected.
    IsInteger,
    /// Negative numbers are rejected.
    IsNonNegative,
    /// Non-positive numbers (or a zero bigint) are rejected.
    IsPositive,
    /// Callables are accepted where objects are expected.
    IsGeneric,
    /// Empty arrays are accepted.
    IsEmptiable,
    /// Literal comparison distinguishes `+0` from `-0`.
    IsZeroSignIdentifier,
    /// Symbol-keyed properties are checked too.
    HasGenericKeys,
    /// Non-enumerable properties are checked too.
    IgnoresEnumerability,
}

impl Attribute {
    /// All attributes, in a stable order.
    pub const ALL: [Attribute; 11] = [
        Self::IsOptional,
        Self::IsReadonly,
        Self::IsFilled,
        Self::IsInteger,
        Self::IsNonNegative,
        Self::IsPositive,
        Self::IsGeneric,
        Self::IsEmptiable,
        Self::IsZeroSignIdentifier,
        Self::HasGenericKeys,
        Self::IgnoresEnumerability,
    ];

    /// Returns the attribute's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsOptional => "isOptional",
            Self::IsReadonly => "isReadonly",
            Self::IsFilled => "isFilled",
            Self::IsInteger => "isInteger",
            Self::IsNonNegative => "isNonNegative",
            Self::IsPositive => "isPositive",
            Self::IsGeneric => "isGeneric",
            Self::IsEmptiable => "isEmptiable",
            Self::IsZeroSignIdentifier => "isZeroSignIdentifier",
            Self::HasGenericKeys => "hasGenericKeys",
            Self::IgnoresEnumerability => "ignoresEnumerability",
        }
    }

    /// Parses an attribute name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attribute| attribute.name() == name)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that names an attribute: an [`Attribute`] or its string name.
pub trait AttributeKey {
    /// Resolves to a known attribute.
    fn resolve(&self) -> Option<Attribute>;

    /// The name to report when resolution fails.
    fn key_name(&self) -> String;
}

impl AttributeKey for Attribute {
    fn resolve(&self) -> Option<Attribute> {
        Some(*self)
    }

    fn key_name(&self) -> String {
        self.name().to_string()
    }
}

impl AttributeKey for &str {
    fn resolve(&self) -> Option<Attribute> {
        Attribute::from_name(self)
    }

    fn key_name(&self) -> String {
        (*self).to_string()
    }
}

impl AttributeKey for String {
    fn resolve(&self) -> Option<Attribute> {
        Attribute::from_name(self)
    }

    fn key_name(&self) -> String {
        self.clone()
    }
}

/// Declaration of one supported attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// The attribute.
    pub attribute: Attribute,
    /// Its value on a freshly constructed field type.
    pub default: bool,
    /// An attribute that can never be true at the same time as this one.
    pub excludes: Option<Attribute>,
}

impl AttributeDescriptor {
    /// Declares an attribute defaulting to `false`.
    #[must_use]
    pub const fn new(attribute: Attribute) -> Self {
        Self {
            attribute,
            default: false,
            excludes: None,
        }
    }

    /// Overrides the default value.
    #[must_use]
    pub const fn defaulting_to(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Declares a mutually exclusive partner.
    #[must_use]
    pub const fn excluding(mut self, other: Attribute) -> Self {
        self.excludes = Some(other);
        self
    }

    /// Returns the attribute's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.attribute.name()
    }
}

/// `isOptional`, present on every kind.
pub const IS_OPTIONAL: AttributeDescriptor = AttributeDescriptor::new(Attribute::IsOptional);

/// `isReadonly`, present on every kind.
pub const IS_READONLY: AttributeDescriptor = AttributeDescriptor::new(Attribute::IsReadonly);

/// The attributes every kind starts its declaration with.
pub const DEFAULT_ATTRIBUTES: [AttributeDescriptor; 2] = [IS_OPTIONAL, IS_READONLY];
