//! Assertions for field type verdicts.

use crate::attributes::Attribute;
use crate::field::FieldType;
use crate::value::Value;

/// Asserts that every value is accepted.
pub fn assert_accepts(field_type: &FieldType, values: &[Value]) {
    for value in values {
        assert!(
            field_type.is_type_of(value),
            "Expected {} to accept {:?}, attributes: {:?}",
            field_type.kind_name(),
            value,
            field_type.attributes()
        );
    }
}

/// Asserts that every value is rejected.
pub fn assert_rejects(field_type: &FieldType, values: &[Value]) {
    for value in values {
        assert!(
            !field_type.is_type_of(value),
            "Expected {} to reject {:?}, attributes: {:?}",
            field_type.kind_name(),
            value,
            field_type.attributes()
        );
    }
}

/// Asserts that `undefined` is decided by `isOptional` alone.
pub fn assert_optional_rule(field_type: &FieldType) {
    let optional = field_type
        .attribute(Attribute::IsOptional)
        .unwrap_or_default();
    assert_eq!(
        field_type.is_type_of(&Value::Undefined),
        optional,
        "Expected undefined to follow isOptional ({}) on {}",
        optional,
        field_type.kind_name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Chainable;
    use crate::kinds::{Primitive, PrimitiveTag};

    #[test]
    fn test_assertions_pass_on_matching_verdicts() {
        let field = FieldType::new(Primitive::new(PrimitiveTag::Boolean));
        assert_accepts(&field, &[Value::from(true), Value::from(false)]);
        assert_rejects(&field, &[Value::Null, Value::from(1), Value::Undefined]);
        assert_optional_rule(&field);
        assert_optional_rule(&field.optional().unwrap());
    }

    #[test]
    #[should_panic(expected = "Expected primitive(boolean) to accept")]
    fn test_assert_accepts_panics_on_rejection() {
        let field = FieldType::new(Primitive::new(PrimitiveTag::Boolean));
        assert_accepts(&field, &[Value::from("true")]);
    }
}
