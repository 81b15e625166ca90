//! Contract tests shared by every kind.

#[cfg(test)]
mod tests {
    use crate::attributes::Attribute;
    use crate::errors::{ConstructionError, FieldTypeError};
    use crate::field::{Chainable, ConfigurationStyle, FieldType, Member};
    use crate::kinds::{ArrayOf, Custom, Exact, InstanceOf, ObjectOf, OneOf, Primitive, PrimitiveTag};
    use crate::testing::sample_values;
    use crate::value::{Function, Value};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn number() -> FieldType {
        FieldType::new(Primitive::new(PrimitiveTag::Number))
    }

    fn every_kind() -> Vec<FieldType> {
        let mut kinds: Vec<FieldType> = PrimitiveTag::ALL
            .into_iter()
            .map(|tag| FieldType::new(Primitive::new(tag)))
            .collect();
        kinds.push(FieldType::new(ArrayOf::new(number())));
        kinds.push(FieldType::new(ObjectOf::new(number()).unwrap()));
        kinds.push(FieldType::new(
            OneOf::new([Member::from(number()), Member::literal("x")]).unwrap(),
        ));
        kinds.push(FieldType::new(InstanceOf::new(Function::class("A")).unwrap()));
        kinds.push(FieldType::new(
            Custom::new(Function::predicate("always", |_| true)).unwrap(),
        ));
        kinds.push(FieldType::new(Exact::new(1).unwrap()));
        kinds
    }

    #[test]
    fn test_undefined_follows_is_optional_for_every_kind() {
        for field in every_kind() {
            let name = field.kind_name();
            assert!(!field.is_type_of(&Value::Undefined), "{name}");

            let optional = field.optional().unwrap();
            assert!(optional.is_type_of(&Value::Undefined), "{name}");
        }
    }

    #[test]
    fn test_undefined_ignores_other_attributes() {
        let field = FieldType::new(Primitive::new(PrimitiveTag::String))
            .optional()
            .and_then(Chainable::filled)
            .unwrap();
        assert!(field.is_type_of(&Value::Undefined));
        assert!(!field.is_type_of(&Value::from("")));
        assert!(field.is_type_of(&Value::from("x")));
    }

    #[test]
    fn test_every_kind_declares_default_attributes_first() {
        for field in every_kind() {
            let names: Vec<_> = field
                .supported_attributes()
                .iter()
                .take(2)
                .map(|d| d.name())
                .collect();
            assert_eq!(names, vec!["isOptional", "isReadonly"]);
        }
    }

    #[test]
    fn test_is_readonly_is_ignored_by_validation() {
        let readonly = number().readonly().unwrap();
        for value in sample_values() {
            assert_eq!(readonly.is_type_of(&value), number().is_type_of(&value), "{value:?}");
        }
    }

    #[test]
    fn test_duplicate_behaves_identically() {
        let original = number().positive().unwrap();
        let copy = original.duplicate();

        assert!(!std::ptr::eq(&original, &copy));
        assert_eq!(copy.attributes(), original.attributes());
        for value in sample_values() {
            assert_eq!(copy.is_type_of(&value), original.is_type_of(&value), "{value:?}");
        }
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut original = number();
        let copy = original.duplicate();
        original.set_attribute(Attribute::IsOptional, true).unwrap();

        assert_eq!(original.attribute(Attribute::IsOptional), Ok(true));
        assert_eq!(copy.attribute(Attribute::IsOptional), Ok(false));
    }

    #[test]
    fn test_attributes_snapshot_is_detached() {
        let field = number();
        let mut snapshot = field.attributes();
        snapshot.set(Attribute::IsOptional, true);

        assert_eq!(field.attribute("isOptional"), Ok(false));
        assert_eq!(
            serde_json::to_value(field.attributes()).unwrap(),
            json!({
                "isOptional": false,
                "isReadonly": false,
                "isInteger": false,
                "isNonNegative": false,
                "isPositive": false
            })
        );
    }

    #[test]
    fn test_attribute_lookup_errors() {
        let field = number();
        assert_eq!(
            field.attribute("isFilled"),
            Err(FieldTypeError::unsupported_attribute("isFilled", "primitive(number)"))
        );
        assert_eq!(
            field.attribute("isNullable").unwrap_err().code(),
            "FIELD-ATTR-UNSUPPORTED"
        );
    }

    #[test]
    fn test_set_attribute_by_method_call() {
        let mut field = number();
        field.set_attribute("isInteger", true).unwrap();
        field.set_attribute(Attribute::IsPositive, true).unwrap();

        assert_eq!(field.configuration_style(), ConfigurationStyle::MethodCalls);
        assert!(field.is_type_of(&Value::from(2)));
        assert!(!field.is_type_of(&Value::from(2.5)));

        field.set_attribute(Attribute::IsPositive, false).unwrap();
        assert!(field.is_type_of(&Value::from(-2)));
    }

    #[test]
    fn test_set_attribute_json_requires_booleans() {
        let mut field = number();
        let err = field.set_attribute_json("isInteger", &json!("yes")).unwrap_err();
        assert_eq!(err, FieldTypeError::invalid_attribute_type("isInteger", "string"));

        let err = field.set_attribute_json("isFilled", &json!(true)).unwrap_err();
        assert_eq!(err.code(), "FIELD-ATTR-UNSUPPORTED");

        field.set_attribute_json("isInteger", &json!(true)).unwrap();
        assert_eq!(field.attribute(Attribute::IsInteger), Ok(true));
    }

    #[test]
    fn test_set_attribute_conflict() {
        let mut field = number();
        field.set_attribute(Attribute::IsPositive, true).unwrap();
        let err = field.set_attribute(Attribute::IsNonNegative, true).unwrap_err();
        assert_eq!(err, FieldTypeError::conflict("isNonNegative", "isPositive"));

        // Switching sides is legal once the other side is cleared.
        field
            .set_attributes([(Attribute::IsPositive, false), (Attribute::IsNonNegative, true)])
            .unwrap();
        assert!(field.is_type_of(&Value::from(0)));
    }

    #[test]
    fn test_set_attributes_conflicts_judged_on_final_state() {
        let mut field = number();
        field.set_attribute(Attribute::IsPositive, true).unwrap();
        field
            .set_attributes([(Attribute::IsNonNegative, true), (Attribute::IsPositive, false)])
            .unwrap();
        assert_eq!(field.attribute(Attribute::IsNonNegative), Ok(true));
        assert_eq!(field.attribute(Attribute::IsPositive), Ok(false));

        // Enabled then disabled within one batch leaves nothing to conflict.
        field
            .set_attributes([(Attribute::IsPositive, true), (Attribute::IsPositive, false)])
            .unwrap();
        assert_eq!(field.attribute(Attribute::IsPositive), Ok(false));

        let err = field
            .set_attributes([(Attribute::IsPositive, true), (Attribute::IsOptional, true)])
            .unwrap_err();
        assert_eq!(err, FieldTypeError::conflict("isPositive", "isNonNegative"));
        assert_eq!(field.attribute(Attribute::IsOptional), Ok(false));
    }

    #[test]
    fn test_set_attributes_is_all_or_nothing() {
        let mut field = number();
        let err = field
            .set_attributes([("isOptional", true), ("isFilled", true)])
            .unwrap_err();
        assert_eq!(err.code(), "FIELD-ATTR-UNSUPPORTED");
        assert_eq!(field.attribute(Attribute::IsOptional), Ok(false));
    }

    #[test]
    fn test_set_attributes_json() {
        let mut field = number();
        field
            .set_attributes_json(&json!({"isOptional": true, "isInteger": true}))
            .unwrap();
        assert!(field.is_type_of(&Value::Undefined));
        assert!(!field.is_type_of(&Value::from(0.5)));

        let err = field.set_attributes_json(&json!([true])).unwrap_err();
        assert_eq!(err.code(), "FIELD-CONSTRUCT-ATTRIBUTES");
    }

    #[test]
    fn test_chaining_then_method_call_is_rejected() {
        let mut field = number().positive().unwrap();
        assert_eq!(field.configuration_style(), ConfigurationStyle::Chaining);

        let err = field.set_attribute(Attribute::IsOptional, true).unwrap_err();
        assert_eq!(
            err,
            FieldTypeError::mixed_configuration_style("method calls", "chaining")
        );
    }

    #[test]
    fn test_method_call_then_chaining_is_rejected() {
        let mut field = number();
        field.set_attribute(Attribute::IsOptional, true).unwrap();

        let err = field.positive().unwrap_err();
        assert_eq!(
            err,
            FieldTypeError::mixed_configuration_style("chaining", "method calls")
        );
    }

    #[test]
    fn test_reset_attributes_clears_style() {
        let mut field = number().positive().unwrap();
        field.reset_attributes();

        assert_eq!(field.configuration_style(), ConfigurationStyle::Unset);
        assert!(field.is_type_of(&Value::from(-1)));
        field.set_attribute(Attribute::IsNonNegative, true).unwrap();
        assert!(!field.is_type_of(&Value::from(-1)));
    }

    #[test]
    fn test_activation_errors() {
        let err = number().positive().and_then(Chainable::positive).unwrap_err();
        assert_eq!(err, FieldTypeError::no_effect("isPositive"));

        let err = number().generic_keys().unwrap_err();
        assert_eq!(
            err,
            FieldTypeError::unsupported_attribute("hasGenericKeys", "primitive(number)")
        );

        let err = number().activate("isPositively").unwrap_err();
        assert_eq!(err.code(), "FIELD-ATTR-UNSUPPORTED");
    }

    #[test]
    fn test_activate_by_name() {
        let field = number().activate("isOptional").unwrap();
        assert!(field.is_type_of(&Value::Undefined));
    }

    #[test]
    fn test_initial_attributes() {
        let field = FieldType::with_attributes(
            Primitive::new(PrimitiveTag::String),
            [("isOptional", true), ("isFilled", true)],
        )
        .unwrap();
        assert_eq!(field.configuration_style(), ConfigurationStyle::Unset);
        assert!(field.is_type_of(&Value::Undefined));
        assert!(!field.is_type_of(&Value::from("")));

        // Either style may follow initial attributes.
        assert!(field.readonly().is_ok());
    }

    #[test]
    fn test_initial_attribute_errors() {
        let kind = || Primitive::new(PrimitiveTag::Number);

        let err = FieldType::with_attributes(kind(), [("isFilled", true)]).unwrap_err();
        assert_eq!(err.code(), "FIELD-ATTR-UNSUPPORTED");

        let err = FieldType::with_attributes(
            kind(),
            [(Attribute::IsPositive, true), (Attribute::IsNonNegative, true)],
        )
        .unwrap_err();
        assert_eq!(err.code(), "FIELD-ATTR-CONFLICT");

        let err = FieldType::with_json_attributes(kind(), &json!("isOptional")).unwrap_err();
        assert_eq!(
            err,
            FieldTypeError::Construction(ConstructionError::InvalidAttributes {
                found: "string".to_string()
            })
        );

        let err =
            FieldType::with_json_attributes(kind(), &json!({"isOptional": 1})).unwrap_err();
        assert_eq!(err, FieldTypeError::invalid_attribute_type("isOptional", "number"));

        let field =
            FieldType::with_json_attributes(kind(), &json!({"isOptional": true})).unwrap();
        assert!(field.is_type_of(&Value::Undefined));
    }

    #[test]
    fn test_determiner_is_shared_by_duplicates() {
        let original = FieldType::new(Exact::new("a").unwrap());
        let copy = original.duplicate();
        match (original.determiner(), copy.determiner()) {
            (crate::field::Determiner::Value(a), crate::field::Determiner::Value(b)) => {
                assert!(std::ptr::eq(a, b));
            }
            other => panic!("unexpected determiners {other:?}"),
        }
    }
}
