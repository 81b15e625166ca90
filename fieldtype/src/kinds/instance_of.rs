//! Instances of a constructor-like value.

use crate::attributes::{AttributeDescriptor, Attributes, DEFAULT_ATTRIBUTES};
use crate::errors::ConstructionError;
use crate::field::{Determiner, FieldKind};
use crate::value::{instance_of, Value};

/// Matches values that are runtime instances of the determiner.
///
/// The determiner must be able to have instances: a function (its prototype
/// object is looked up in the value's prototype chain) or an object carrying
/// an instance check.
#[derive(Debug, Clone)]
pub struct InstanceOf {
    target: Value,
}

impl InstanceOf {
    /// Creates an instance-of kind.
    pub fn new(target: impl Into<Value>) -> Result<Self, ConstructionError> {
        let target = target.into();
        let can_have_instances = match &target {
            Value::Function(_) => true,
            Value::Object(object) => object.instance_check().is_some(),
            _ => false,
        };
        if !can_have_instances {
            return Err(ConstructionError::invalid_determiner(
                "instanceOf",
                format!("{target:?} is not usable as right-hand side of 'instanceof'"),
            ));
        }
        Ok(Self { target })
    }

    /// The constructor-like target.
    #[must_use]
    pub fn target(&self) -> &Value {
        &self.target
    }
}

impl FieldKind for InstanceOf {
    fn name(&self) -> String {
        "instanceOf".to_string()
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        &DEFAULT_ATTRIBUTES
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::Value(&self.target)
    }

    fn accepts(&self, value: &Value, _attributes: &Attributes) -> bool {
        instance_of(value, &self.target)
    }
}
