//! A single accepted literal.

use super::{signed_zero_policy, LITERAL_ATTRIBUTES};
use crate::attributes::{AttributeDescriptor, Attributes};
use crate::errors::ConstructionError;
use crate::field::{Determiner, FieldKind};
use crate::value::Value;

/// Matches values equal to the literal.
///
/// `+0` and `-0` are equal unless `isZeroSignIdentifier` is active; NaN
/// always equals NaN.
#[derive(Debug, Clone)]
pub struct Exact {
    literal: Value,
}

impl Exact {
    /// Creates an exact kind. `undefined` is rejected: make the field
    /// optional instead.
    pub fn new(literal: impl Into<Value>) -> Result<Self, ConstructionError> {
        let literal = literal.into();
        if literal.is_undefined() {
            return Err(ConstructionError::MissingDeterminer {
                kind: "exact".to_string(),
            });
        }
        Ok(Self { literal })
    }

    /// The literal.
    #[must_use]
    pub fn literal(&self) -> &Value {
        &self.literal
    }
}

impl FieldKind for Exact {
    fn name(&self) -> String {
        "exact".to_string()
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        &LITERAL_ATTRIBUTES
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::Value(&self.literal)
    }

    fn accepts(&self, value: &Value, attributes: &Attributes) -> bool {
        signed_zero_policy(attributes).same(&self.literal, value)
    }
}
