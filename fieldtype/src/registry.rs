//! Ready-made field types.
//!
//! [`FieldRegistry::global`] holds one reusable field type per primitive tag,
//! built once on first use and never mutated afterwards. The free functions
//! build fresh reusable field types for the composite kinds.

use crate::errors::ConstructionError;
use crate::field::{FieldType, Member};
use crate::kinds::{ArrayOf, Custom, Exact, InstanceOf, ObjectOf, OneOf, Primitive, PrimitiveTag};
use crate::reusable::ReusableFieldType;
use crate::value::Value;
use std::sync::LazyLock;
use tracing::debug;

/// Process-wide table of primitive field types.
pub struct FieldRegistry {
    primitives: [ReusableFieldType; PrimitiveTag::ALL.len()],
}

impl FieldRegistry {
    /// Builds a registry with fresh caches.
    #[must_use]
    pub fn new() -> Self {
        let primitives = PrimitiveTag::ALL
            .map(|tag| ReusableFieldType::wrap(FieldType::new(Primitive::new(tag))));
        debug!(primitives = primitives.len(), "Built field registry");
        Self { primitives }
    }

    /// The shared registry.
    #[must_use]
    pub fn global() -> &'static FieldRegistry {
        &REGISTRY
    }

    /// The base field type for a tag.
    #[must_use]
    pub fn primitive(&self, tag: PrimitiveTag) -> &ReusableFieldType {
        // ALL lists the tags in declaration order.
        &self.primitives[tag as usize]
    }

    /// The base field type for a tag name.
    pub fn lookup(&self, tag: &str) -> Result<&ReusableFieldType, ConstructionError> {
        tag.parse().map(|tag| self.primitive(tag))
    }

    /// Iterates over `(tag, field type)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveTag, &ReusableFieldType)> {
        PrimitiveTag::ALL.into_iter().zip(self.primitives.iter())
    }

    /// `any`
    #[must_use]
    pub fn any(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Any)
    }

    /// `array`
    #[must_use]
    pub fn array(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Array)
    }

    /// `bigint`
    #[must_use]
    pub fn bigint(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Bigint)
    }

    /// `boolean`
    #[must_use]
    pub fn boolean(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Boolean)
    }

    /// `function`
    #[must_use]
    pub fn function(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Function)
    }

    /// `number`
    #[must_use]
    pub fn number(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Number)
    }

    /// `object`
    #[must_use]
    pub fn object(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Object)
    }

    /// `string`
    #[must_use]
    pub fn string(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::String)
    }

    /// `symbol`
    #[must_use]
    pub fn symbol(&self) -> &ReusableFieldType {
        self.primitive(PrimitiveTag::Symbol)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global field registry.
pub static REGISTRY: LazyLock<FieldRegistry> = LazyLock::new(FieldRegistry::new);

/// Arrays of `element`.
pub fn array_of(element: impl Into<Member>) -> ReusableFieldType {
    ReusableFieldType::wrap(FieldType::new(ArrayOf::new(element)))
}

/// Objects whose property values match `values`.
pub fn object_of(values: impl Into<Member>) -> Result<ReusableFieldType, ConstructionError> {
    Ok(ReusableFieldType::wrap(FieldType::new(ObjectOf::new(values)?)))
}

/// Values matching at least one variant.
pub fn one_of(variants: impl IntoIterator<Item = Member>) -> Result<ReusableFieldType, ConstructionError> {
    Ok(ReusableFieldType::wrap(FieldType::new(OneOf::new(variants)?)))
}

/// Instances of `target`.
pub fn instance_of(target: impl Into<Value>) -> Result<ReusableFieldType, ConstructionError> {
    Ok(ReusableFieldType::wrap(FieldType::new(InstanceOf::new(target)?)))
}

/// Values accepted by `validator`.
pub fn custom(validator: impl Into<Value>) -> Result<ReusableFieldType, ConstructionError> {
    Ok(ReusableFieldType::wrap(FieldType::new(Custom::new(validator)?)))
}

/// Values equal to `literal`.
pub fn exact(literal: impl Into<Value>) -> Result<ReusableFieldType, ConstructionError> {
    Ok(ReusableFieldType::wrap(FieldType::new(Exact::new(literal)?)))
}
