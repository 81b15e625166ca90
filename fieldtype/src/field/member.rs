//! Nested determiners: a field type or a literal.

use super::FieldType;
use crate::equality::SignedZero;
use crate::reusable::ReusableFieldType;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// One element of a composite determiner.
///
/// ArrayOf stores a single member, OneOf a list of them. Field types are
/// shared, so a member built from a reusable field type keeps pointing at the
/// cached variant.
#[derive(Clone)]
pub enum Member {
    /// Matches values accepted by the nested field type.
    Type(Arc<FieldType>),
    /// Matches values equal to the literal.
    Literal(Value),
}

impl Member {
    /// Creates a literal member.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Returns the nested field type, if any.
    #[must_use]
    pub fn field_type(&self) -> Option<&FieldType> {
        match self {
            Self::Type(field_type) => Some(field_type),
            Self::Literal(_) => None,
        }
    }

    /// Returns the literal, if any.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Type(_) => None,
            Self::Literal(value) => Some(value),
        }
    }

    /// Returns true if `value` satisfies this member.
    #[must_use]
    pub fn matches(&self, value: &Value, signed_zero: SignedZero) -> bool {
        match self {
            Self::Type(field_type) => field_type.is_type_of(value),
            Self::Literal(literal) => signed_zero.same(literal, value),
        }
    }

    /// Duplicate test used when validating variant lists. Field types are
    /// compared by identity and never equal a literal.
    #[must_use]
    pub fn is_same(&self, other: &Self, signed_zero: SignedZero) -> bool {
        match (self, other) {
            (Self::Type(a), Self::Type(b)) => Arc::ptr_eq(a, b),
            (Self::Literal(a), Self::Literal(b)) => signed_zero.same(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(field_type) => write!(f, "Type({})", field_type.kind_name()),
            Self::Literal(value) => write!(f, "Literal({value:?})"),
        }
    }
}

impl From<FieldType> for Member {
    fn from(field_type: FieldType) -> Self {
        Self::Type(Arc::new(field_type))
    }
}

impl From<Arc<FieldType>> for Member {
    fn from(field_type: Arc<FieldType>) -> Self {
        Self::Type(field_type)
    }
}

impl From<ReusableFieldType> for Member {
    fn from(field_type: ReusableFieldType) -> Self {
        Self::Type(field_type.shared())
    }
}

impl From<&ReusableFieldType> for Member {
    fn from(field_type: &ReusableFieldType) -> Self {
        Self::Type(field_type.shared())
    }
}

impl From<Value> for Member {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}
