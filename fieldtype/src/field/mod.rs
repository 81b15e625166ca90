//! The field type contract.
//!
//! A [`FieldType`] couples a kind (the validation strategy plus its
//! determiner, see [`FieldKind`]) with a fully populated attribute state.
//! Attributes are configured in one of two styles, never both on the same
//! instance:
//!
//! - **chaining**: [`Chainable`] accessors (`optional()`, `positive()`, ...)
//!   each activate one attribute and hand back the next variant;
//! - **method calls**: [`FieldType::set_attribute`] and friends.
//!
//! ```rust,ignore
//! use fieldtype::prelude::*;
//!
//! let price = FieldType::new(Primitive::new(PrimitiveTag::Number)).positive()?;
//! assert!(price.is_type_of(&Value::from(5)));
//! assert!(!price.is_type_of(&Value::from(0)));
//! ```

mod chain;
#[cfg(test)]
mod field_tests;
mod field_type;
mod member;

pub use chain::Chainable;
pub use field_type::FieldType;
pub use member::Member;

use crate::attributes::{AttributeDescriptor, Attributes};
use crate::kinds::PrimitiveTag;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// A validation strategy together with its determiner.
///
/// Implemented by the built-in kinds in [`crate::kinds`]; callers may add
/// their own. Implementations hold their determiner immutably: it is fixed at
/// construction and shared by every duplicate of the field type.
pub trait FieldKind: fmt::Debug + Send + Sync {
    /// Human readable kind label used in error messages.
    fn name(&self) -> String;

    /// The ordered attribute declaration. It must start with
    /// [`crate::attributes::DEFAULT_ATTRIBUTES`].
    fn supported_attributes(&self) -> &'static [AttributeDescriptor];

    /// Borrowed view of the determiner.
    fn determiner(&self) -> Determiner<'_>;

    /// Kind-specific check. Never called with `undefined`, which the
    /// contract decides through `isOptional` before delegating.
    fn accepts(&self, value: &Value, attributes: &Attributes) -> bool;
}

/// Borrowed view of a kind's determiner.
#[derive(Debug, Clone, Copy)]
pub enum Determiner<'a> {
    /// A primitive type tag.
    Tag(PrimitiveTag),
    /// A nested field type or a literal.
    Member(&'a Member),
    /// A nested field type.
    FieldType(&'a FieldType),
    /// A list of variants.
    Variants(&'a [Member]),
    /// A value: a constructor-like target, a validator or a literal.
    Value(&'a Value),
}

/// Which configuration style an instance has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationStyle {
    /// No attribute has been configured yet.
    #[default]
    Unset,
    /// Attributes were activated by chaining.
    Chaining,
    /// Attributes were set by method calls.
    MethodCalls,
}

impl fmt::Display for ConfigurationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Chaining => write!(f, "chaining"),
            Self::MethodCalls => write!(f, "method calls"),
        }
    }
}

/// Bitmask of the attribute activations that produced a cached variant.
///
/// The attribute at declared index `i` owns bit `2^i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Selector(u64);

impl Selector {
    /// The selector of the base variant.
    pub const BASE: Self = Self(0);

    /// Largest number of attributes a selector can address.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// Returns the selector for a declared index.
    #[must_use]
    pub fn for_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|shift| 1u64.checked_shl(shift))
            .map(Self)
    }

    /// Bitwise union.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_for_index() {
        assert_eq!(Selector::for_index(0).map(Selector::bits), Some(1));
        assert_eq!(Selector::for_index(3).map(Selector::bits), Some(8));
        assert_eq!(Selector::for_index(63).map(Selector::bits), Some(1 << 63));
        assert_eq!(Selector::for_index(64), None);
    }

    #[test]
    fn test_selector_union_is_order_independent() {
        let a = Selector::for_index(1).unwrap_or_default();
        let b = Selector::for_index(4).unwrap_or_default();
        assert_eq!(a.union(b), b.union(a));
        assert!(a.union(b).contains(a));
        assert!(!a.contains(b));
        assert_eq!(Selector::BASE.union(a), a);
    }

    #[test]
    fn test_configuration_style_display() {
        assert_eq!(ConfigurationStyle::Chaining.to_string(), "chaining");
        assert_eq!(ConfigurationStyle::MethodCalls.to_string(), "method calls");
        assert_eq!(ConfigurationStyle::default(), ConfigurationStyle::Unset);
    }
}
