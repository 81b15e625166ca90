//! Unions of field types and literals.

use super::{signed_zero_policy, LITERAL_ATTRIBUTES};
use crate::attributes::{Attribute, AttributeDescriptor, Attributes, IS_OPTIONAL, IS_READONLY};
use crate::equality::{contains_duplicates_by, SignedZero};
use crate::errors::ConstructionError;
use crate::field::{Determiner, FieldKind, Member};
use crate::value::Value;

/// Declaration used when variants were deduplicated with signed zeros kept
/// apart: `isZeroSignIdentifier` starts out active.
static DISTINCT_ZERO_ATTRIBUTES: [AttributeDescriptor; 3] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::IsZeroSignIdentifier).defaulting_to(true),
];

const MIN_VARIANTS: usize = 2;

/// Matches values that satisfy at least one variant.
#[derive(Debug, Clone)]
pub struct OneOf {
    variants: Vec<Member>,
    signed_zero: SignedZero,
}

impl OneOf {
    /// Creates a union. `+0` and `-0` count as duplicate variants.
    pub fn new(variants: impl IntoIterator<Item = Member>) -> Result<Self, ConstructionError> {
        Self::with_signed_zero(variants, SignedZero::Equal)
    }

    /// Creates a union, choosing how signed zeros are compared both when
    /// checking variants for duplicates and, by default, when matching.
    pub fn with_signed_zero(
        variants: impl IntoIterator<Item = Member>,
        signed_zero: SignedZero,
    ) -> Result<Self, ConstructionError> {
        let variants: Vec<Member> = variants.into_iter().collect();
        if variants.len() < MIN_VARIANTS {
            return Err(ConstructionError::TooFewVariants {
                kind: "oneOf".to_string(),
                required: MIN_VARIANTS,
                found: variants.len(),
            });
        }
        if contains_duplicates_by(&variants, |a, b| a.is_same(b, signed_zero)) {
            return Err(ConstructionError::DuplicateVariants {
                kind: "oneOf".to_string(),
            });
        }
        Ok(Self {
            variants,
            signed_zero,
        })
    }

    /// The variants, in declaration order.
    #[must_use]
    pub fn variants(&self) -> &[Member] {
        &self.variants
    }
}

impl FieldKind for OneOf {
    fn name(&self) -> String {
        "oneOf".to_string()
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        match self.signed_zero {
            SignedZero::Equal => &LITERAL_ATTRIBUTES,
            SignedZero::Distinct => &DISTINCT_ZERO_ATTRIBUTES,
        }
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::Variants(&self.variants)
    }

    fn accepts(&self, value: &Value, attributes: &Attributes) -> bool {
        let policy = signed_zero_policy(attributes);
        self.variants.iter().any(|variant| variant.matches(value, policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldTypeError;
    use crate::field::{Chainable, FieldType};
    use crate::kinds::{Primitive, PrimitiveTag};
    use std::sync::Arc;

    fn primitive(tag: PrimitiveTag) -> Member {
        Member::from(FieldType::new(Primitive::new(tag)))
    }

    #[test]
    fn test_matches_any_variant() {
        let field = FieldType::new(
            OneOf::new([primitive(PrimitiveTag::String), primitive(PrimitiveTag::Number)]).unwrap(),
        );
        assert!(field.is_type_of(&Value::from("x")));
        assert!(field.is_type_of(&Value::from(5)));
        assert!(!field.is_type_of(&Value::from(true)));
        assert!(!field.is_type_of(&Value::Undefined));
    }

    #[test]
    fn test_requires_two_variants() {
        let err = OneOf::new([primitive(PrimitiveTag::String)]).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::TooFewVariants {
                kind: "oneOf".to_string(),
                required: 2,
                found: 1
            }
        );
        assert!(OneOf::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_duplicate_literals() {
        let err = OneOf::new([Member::literal("a"), Member::literal(1), Member::literal("a")])
            .unwrap_err();
        assert_eq!(err.code(), "FIELD-CONSTRUCT-DUPLICATE");

        assert!(OneOf::new([Member::literal(f64::NAN), Member::literal(f64::NAN)]).is_err());
        assert!(OneOf::new([Member::literal(1), Member::literal("1")]).is_ok());
    }

    #[test]
    fn test_shared_field_type_is_a_duplicate() {
        let shared = Arc::new(FieldType::new(Primitive::new(PrimitiveTag::Number)));
        let result = OneOf::new([Member::from(Arc::clone(&shared)), Member::from(shared)]);
        assert!(result.is_err());

        // Structurally equal but distinct instances are not duplicates.
        assert!(OneOf::new([primitive(PrimitiveTag::Number), primitive(PrimitiveTag::Number)]).is_ok());
    }

    #[test]
    fn test_signed_zero_duplicate_policy() {
        let zeros = || [Member::literal(0), Member::literal(-0.0)];
        assert!(OneOf::new(zeros()).is_err());

        let kind = OneOf::with_signed_zero(zeros(), SignedZero::Distinct).unwrap();
        let field = FieldType::new(kind);
        assert_eq!(field.attribute(Attribute::IsZeroSignIdentifier), Ok(true));
        assert!(field.is_type_of(&Value::from(-0.0)));

        let err = field.zero_sign_identifier().unwrap_err();
        assert_eq!(err, FieldTypeError::no_effect("isZeroSignIdentifier"));
    }

    #[test]
    fn test_literal_matching_follows_zero_sign_attribute() {
        let variants = || [Member::literal(0), Member::literal("zero")];
        let loose = FieldType::new(OneOf::new(variants()).unwrap());
        assert!(loose.is_type_of(&Value::from(-0.0)));

        let strict = FieldType::new(OneOf::new(variants()).unwrap())
            .zero_sign_identifier()
            .unwrap();
        assert!(!strict.is_type_of(&Value::from(-0.0)));
        assert!(strict.is_type_of(&Value::from(0)));
        assert!(strict.is_type_of(&Value::from("zero")));
    }
}
