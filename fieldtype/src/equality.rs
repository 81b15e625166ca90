//! Equality primitives.
//!
//! Two identity relations are used when a field type compares a value
//! against a literal:
//!
//! - [`same_value`]: NaN equals NaN, `+0` and `-0` are different.
//! - [`same_value_zero`]: NaN equals NaN, `+0` and `-0` are the same.
//!
//! Reference values (symbols, arrays, objects, functions) are equal only to
//! themselves under both relations.

use crate::value::Value;

/// How signed zeros compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignedZero {
    /// `+0` and `-0` are different values ([`same_value`]).
    Distinct,
    /// `+0` and `-0` are the same value ([`same_value_zero`]).
    #[default]
    Equal,
}

impl SignedZero {
    /// Maps an `isZeroSignIdentifier` attribute value to a policy.
    #[must_use]
    pub fn from_identifier(identifies_zero_sign: bool) -> Self {
        if identifies_zero_sign {
            Self::Distinct
        } else {
            Self::Equal
        }
    }

    /// Compares two values under this policy.
    #[must_use]
    pub fn same(self, a: &Value, b: &Value) -> bool {
        match self {
            Self::Distinct => same_value(a, b),
            Self::Equal => same_value_zero(a, b),
        }
    }
}

/// Identity with NaN equal to itself and signed zeros distinguished.
#[must_use]
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if x.is_nan() && y.is_nan() {
                return true;
            }
            x == y && (*x != 0.0 || x.is_sign_negative() == y.is_sign_negative())
        }
        _ => strict_non_number_eq(a, b),
    }
}

/// Identity with NaN equal to itself and signed zeros conflated.
#[must_use]
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => strict_non_number_eq(a, b),
    }
}

fn strict_non_number_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Boolean(x), Value::Boolean(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.ptr_eq(y),
        (Value::Array(x), Value::Array(y)) => x.ptr_eq(y),
        (Value::Object(x), Value::Object(y)) => x.ptr_eq(y),
        (Value::Function(x), Value::Function(y)) => x.ptr_eq(y),
        _ => false,
    }
}

/// Returns true if any two values are equal under the given policy.
#[must_use]
pub fn contains_duplicates(values: &[Value], signed_zero: SignedZero) -> bool {
    contains_duplicates_by(values, |a, b| signed_zero.same(a, b))
}

/// Returns true if any two items are equal under `eq`.
///
/// Pairwise, so `eq` need not be hashable or transitive.
pub fn contains_duplicates_by<T, F>(items: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].iter().any(|b| eq(a, b)))
}
