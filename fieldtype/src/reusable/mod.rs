//! Memoized attribute variants.
//!
//! A [`ReusableFieldType`] wraps a field type and caches every variant
//! reachable by activating attributes. Each declared attribute owns the
//! selector bit `2^index`; a variant is keyed by the union of the bits
//! activated to reach it, so activating the same set of attributes in any
//! order yields the same shared instance.
//!
//! ```rust,ignore
//! use fieldtype::prelude::*;
//!
//! let number = FieldRegistry::global().number();
//! let a = number.optional()?.positive()?;
//! let b = number.positive()?.optional()?;
//! assert!(a.ptr_eq(&b));
//! ```


use crate::attributes::{Attribute, AttributeKey};
use crate::errors::{ConstructionError, FieldTypeError};
use crate::field::{FieldType, Selector};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, trace};

/// Variants of one base field type, keyed by selector.
struct VariantCache {
    variants: DashMap<Selector, Arc<FieldType>>,
}

/// A field type whose attribute variants are canonical shared instances.
///
/// Cloning is cheap and keeps pointing at the same variant. Validation and
/// introspection go through [`Deref`] to the current [`FieldType`].
#[derive(Clone)]
pub struct ReusableFieldType {
    current: Arc<FieldType>,
    cache: Arc<VariantCache>,
}

impl ReusableFieldType {
    /// Wraps a field type as the base (selector `0`) variant.
    ///
    /// The current attribute values become the base; the configuration style
    /// is cleared so that variants can be reached by chaining. Fails if the
    /// kind declares more attributes than a selector can address.
    pub fn new(field_type: FieldType) -> Result<Self, ConstructionError> {
        let count = field_type.supported_attributes().len();
        if count > Selector::CAPACITY {
            return Err(ConstructionError::TooManyAttributes {
                kind: field_type.kind_name(),
                count,
                max: Selector::CAPACITY,
            });
        }
        Ok(Self::wrap(field_type))
    }

    /// Wraps a field type whose declaration is known to fit a selector.
    pub(crate) fn wrap(field_type: FieldType) -> Self {
        let base = Arc::new(field_type.unconfigured().tagged(Selector::BASE));
        let variants = DashMap::new();
        variants.insert(Selector::BASE, Arc::clone(&base));
        Self {
            current: base,
            cache: Arc::new(VariantCache { variants }),
        }
    }

    /// Returns the variant with one more attribute active.
    ///
    /// The first activation of a given attribute set materializes the
    /// variant; later ones, from any activation order, return it again.
    pub fn activate<K: AttributeKey>(&self, key: K) -> Result<Self, FieldTypeError> {
        let attribute = self.current.resolve(&key)?;
        self.activate_cached(attribute)
    }

    fn activate_cached(&self, attribute: Attribute) -> Result<Self, FieldTypeError> {
        let state = self.current.attribute_state();
        let bit = state
            .index_of(attribute)
            .and_then(Selector::for_index)
            .ok_or_else(|| {
                FieldTypeError::unsupported_attribute(attribute.name(), self.current.kind_name())
            })?;
        if state.enabled(attribute) {
            return Err(FieldTypeError::no_effect(attribute.name()));
        }

        let selector = self.current.selector().union(bit);
        let variant = match self.cache.variants.entry(selector) {
            Entry::Occupied(entry) => {
                trace!(
                    kind = %self.current.kind_name(),
                    attribute = %attribute,
                    selector = selector.bits(),
                    "Reusing cached field type variant"
                );
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                let mut next = self.current.duplicate();
                next.activate_in_place(attribute)?;
                let next = Arc::new(next.tagged(selector));
                debug!(
                    kind = %next.kind_name(),
                    attribute = %attribute,
                    selector = selector.bits(),
                    "Materialized field type variant"
                );
                Arc::clone(entry.insert(next).value())
            }
        };

        Ok(Self {
            current: variant,
            cache: Arc::clone(&self.cache),
        })
    }

    /// The current variant.
    #[must_use]
    pub fn field_type(&self) -> &FieldType {
        &self.current
    }

    /// The current variant as a shared handle.
    #[must_use]
    pub fn shared(&self) -> Arc<FieldType> {
        Arc::clone(&self.current)
    }

    /// Returns true if both handles point at the same variant.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }

    /// Number of variants materialized so far, the base included.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.cache.variants.len()
    }
}

impl Deref for ReusableFieldType {
    type Target = FieldType;

    fn deref(&self) -> &FieldType {
        &self.current
    }
}

impl TryFrom<FieldType> for ReusableFieldType {
    type Error = ConstructionError;

    fn try_from(field_type: FieldType) -> Result<Self, Self::Error> {
        Self::new(field_type)
    }
}

impl fmt::Debug for ReusableFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReusableFieldType")
            .field("current", &self.current)
            .field("variants", &self.variant_count())
            .finish()
    }
}
