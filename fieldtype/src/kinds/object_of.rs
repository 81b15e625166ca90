//! Objects whose property values all match a nested field type.

use crate::attributes::{Attribute, AttributeDescriptor, Attributes, IS_OPTIONAL, IS_READONLY};
use crate::errors::ConstructionError;
use crate::field::{Determiner, FieldKind, FieldType, Member};
use crate::value::{Property, Value};
use std::sync::Arc;

static ATTRIBUTES: [AttributeDescriptor; 5] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::HasGenericKeys),
    AttributeDescriptor::new(Attribute::IgnoresEnumerability),
    AttributeDescriptor::new(Attribute::IsGeneric),
];

/// Matches objects (and arrays) whose own property values all satisfy a
/// nested field type.
///
/// By default only enumerable string-keyed properties are checked.
/// `hasGenericKeys` adds symbol-keyed ones, `ignoresEnumerability` adds
/// non-enumerable ones, and `isGeneric` admits callables as subjects.
#[derive(Debug, Clone)]
pub struct ObjectOf {
    values: Arc<FieldType>,
}

impl ObjectOf {
    /// Creates an object-of kind. Literal determiners are rejected.
    pub fn new(values: impl Into<Member>) -> Result<Self, ConstructionError> {
        match values.into() {
            Member::Type(values) => Ok(Self { values }),
            Member::Literal(literal) => Err(ConstructionError::invalid_determiner(
                "objectOf",
                format!("expected a field type, got {literal:?}"),
            )),
        }
    }

    /// The nested field type.
    #[must_use]
    pub fn values(&self) -> &FieldType {
        &self.values
    }

    fn checks<'a>(
        &self,
        properties: impl Iterator<Item = &'a Property>,
        attributes: &Attributes,
    ) -> bool {
        let generic_keys = attributes.enabled(Attribute::HasGenericKeys);
        let all_properties = attributes.enabled(Attribute::IgnoresEnumerability);
        properties
            .filter(|p| generic_keys || !p.key.is_symbol())
            .filter(|p| all_properties || p.enumerable)
            .all(|p| self.values.is_type_of(&p.value))
    }
}

impl FieldKind for ObjectOf {
    fn name(&self) -> String {
        "objectOf".to_string()
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        &ATTRIBUTES
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::FieldType(&self.values)
    }

    fn accepts(&self, value: &Value, attributes: &Attributes) -> bool {
        match value {
            Value::Array(items) => items.iter().all(|item| self.values.is_type_of(item)),
            Value::Object(object) => self.checks(object.properties(), attributes),
            Value::Function(function) => {
                attributes.enabled(Attribute::IsGeneric)
                    && self.checks(function.properties(), attributes)
            }
            _ => false,
        }
    }
}
