//! Field types backed by a caller-supplied validator.

use crate::attributes::{AttributeDescriptor, Attributes, DEFAULT_ATTRIBUTES};
use crate::errors::ConstructionError;
use crate::field::{Determiner, FieldKind};
use crate::value::Value;

/// Matches values for which the validator returns a truthy result.
///
/// The determiner is either a function, called with the value, or an object
/// carrying the validator capability ([`crate::value::ObjectBuilder::validator`]).
#[derive(Debug, Clone)]
pub struct Custom {
    validator: Value,
}

impl Custom {
    /// Creates a custom kind.
    pub fn new(validator: impl Into<Value>) -> Result<Self, ConstructionError> {
        let validator = validator.into();
        let has_validator = match &validator {
            Value::Function(_) => true,
            Value::Object(object) => object.validator().is_some(),
            _ => false,
        };
        if !has_validator {
            return Err(ConstructionError::invalid_determiner(
                "custom",
                format!("{validator:?} is neither callable nor carries a validator"),
            ));
        }
        Ok(Self { validator })
    }

    /// The validator-bearing value.
    #[must_use]
    pub fn validator(&self) -> &Value {
        &self.validator
    }
}

impl FieldKind for Custom {
    fn name(&self) -> String {
        "custom".to_string()
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        &DEFAULT_ATTRIBUTES
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::Value(&self.validator)
    }

    fn accepts(&self, value: &Value, _attributes: &Attributes) -> bool {
        match &self.validator {
            Value::Function(function) => function.call(value).is_truthy(),
            Value::Object(object) => object
                .validator()
                .is_some_and(|validate| validate(value).is_truthy()),
            _ => false,
        }
    }
}
