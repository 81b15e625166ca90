//! Arrays whose every element matches a member.

use super::signed_zero_policy;
use crate::attributes::{Attribute, AttributeDescriptor, Attributes, IS_OPTIONAL, IS_READONLY};
use crate::field::{Determiner, FieldKind, Member};
use crate::value::Value;

static ATTRIBUTES: [AttributeDescriptor; 4] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::IsEmptiable),
    AttributeDescriptor::new(Attribute::IsZeroSignIdentifier),
];

/// Matches arrays whose elements all satisfy a nested field type, or all
/// equal a literal.
///
/// Empty arrays are rejected unless `isEmptiable` is active.
#[derive(Debug, Clone)]
pub struct ArrayOf {
    element: Member,
}

impl ArrayOf {
    /// Creates an array-of kind.
    pub fn new(element: impl Into<Member>) -> Self {
        Self {
            element: element.into(),
        }
    }

    /// The element member.
    #[must_use]
    pub fn element(&self) -> &Member {
        &self.element
    }
}

impl FieldKind for ArrayOf {
    fn name(&self) -> String {
        "arrayOf".to_string()
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        &ATTRIBUTES
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::Member(&self.element)
    }

    fn accepts(&self, value: &Value, attributes: &Attributes) -> bool {
        let Value::Array(items) = value else {
            return false;
        };
        if items.is_empty() {
            return attributes.enabled(Attribute::IsEmptiable);
        }
        let policy = signed_zero_policy(attributes);
        items.iter().all(|item| self.element.matches(item, policy))
    }
}
