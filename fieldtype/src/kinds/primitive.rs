//! Primitive field types: a check against a type tag.

use crate::attributes::{
    Attribute, AttributeDescriptor, Attributes, DEFAULT_ATTRIBUTES, IS_OPTIONAL, IS_READONLY,
};
use crate::errors::ConstructionError;
use crate::field::{Determiner, FieldKind};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The supported primitive type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveTag {
    /// Any value except `undefined`.
    Any,
    /// Arrays.
    Array,
    /// Bigints.
    Bigint,
    /// Booleans.
    Boolean,
    /// Callables.
    Function,
    /// Numbers, NaN excluded.
    Number,
    /// Non-null objects, arrays included.
    Object,
    /// Strings.
    String,
    /// Symbols.
    Symbol,
}

impl PrimitiveTag {
    /// Every tag, in registry order.
    pub const ALL: [PrimitiveTag; 9] = [
        Self::Any,
        Self::Array,
        Self::Bigint,
        Self::Boolean,
        Self::Function,
        Self::Number,
        Self::Object,
        Self::String,
        Self::Symbol,
    ];

    /// The tag's name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Array => "array",
            Self::Bigint => "bigint",
            Self::Boolean => "boolean",
            Self::Function => "function",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::Symbol => "symbol",
        }
    }

    /// The attributes a primitive with this tag declares.
    #[must_use]
    pub fn supported_attributes(self) -> &'static [AttributeDescriptor] {
        match self {
            Self::Any | Self::Boolean | Self::Function | Self::Symbol => &DEFAULT_ATTRIBUTES,
            Self::Array | Self::String => &FILLABLE,
            Self::Bigint => &BIGINT,
            Self::Number => &NUMBER,
            Self::Object => &OBJECT,
        }
    }
}

impl fmt::Display for PrimitiveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveTag {
    type Err = ConstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ConstructionError::UnsupportedPrimitive { tag: s.to_string() })
    }
}

static FILLABLE: [AttributeDescriptor; 3] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::IsFilled),
];

static BIGINT: [AttributeDescriptor; 3] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::IsPositive),
];

static NUMBER: [AttributeDescriptor; 5] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::IsInteger),
    AttributeDescriptor::new(Attribute::IsNonNegative).excluding(Attribute::IsPositive),
    AttributeDescriptor::new(Attribute::IsPositive).excluding(Attribute::IsNonNegative),
];

static OBJECT: [AttributeDescriptor; 3] = [
    IS_OPTIONAL,
    IS_READONLY,
    AttributeDescriptor::new(Attribute::IsGeneric),
];

/// Matches values whose runtime type is the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    tag: PrimitiveTag,
}

impl Primitive {
    /// Creates a primitive kind for a tag.
    #[must_use]
    pub const fn new(tag: PrimitiveTag) -> Self {
        Self { tag }
    }

    /// Creates a primitive kind from a tag name.
    pub fn parse(tag: &str) -> Result<Self, ConstructionError> {
        tag.parse().map(Self::new)
    }

    /// The tag.
    #[must_use]
    pub const fn tag(&self) -> PrimitiveTag {
        self.tag
    }
}

impl FieldKind for Primitive {
    fn name(&self) -> String {
        format!("primitive({})", self.tag)
    }

    fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        self.tag.supported_attributes()
    }

    fn determiner(&self) -> Determiner<'_> {
        Determiner::Tag(self.tag)
    }

    fn accepts(&self, value: &Value, attributes: &Attributes) -> bool {
        match (self.tag, value) {
            (PrimitiveTag::Any, _) => true,
            (PrimitiveTag::Array, Value::Array(items)) => {
                !(items.is_empty() && attributes.enabled(Attribute::IsFilled))
            }
            (PrimitiveTag::String, Value::String(s)) => {
                !(s.is_empty() && attributes.enabled(Attribute::IsFilled))
            }
            (PrimitiveTag::Bigint, Value::BigInt(n)) => {
                !(*n == 0 && attributes.enabled(Attribute::IsPositive))
            }
            (PrimitiveTag::Number, Value::Number(n)) => accepts_number(*n, attributes),
            (PrimitiveTag::Object, Value::Array(_) | Value::Object(_)) => true,
            (PrimitiveTag::Object, Value::Function(_)) => attributes.enabled(Attribute::IsGeneric),
            (PrimitiveTag::Boolean, Value::Boolean(_))
            | (PrimitiveTag::Function, Value::Function(_))
            | (PrimitiveTag::Symbol, Value::Symbol(_)) => true,
            _ => false,
        }
    }
}

fn accepts_number(n: f64, attributes: &Attributes) -> bool {
    if n.is_nan() {
        return false;
    }
    if n <= 0.0 && attributes.enabled(Attribute::IsPositive) {
        return false;
    }
    if n < 0.0 && attributes.enabled(Attribute::IsNonNegative) {
        return false;
    }
    if attributes.enabled(Attribute::IsInteger) && !(n.is_finite() && n.fract() == 0.0) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldTypeError;
    use crate::field::{Chainable, FieldType};
    use crate::value::{Function, ObjectBuilder, Symbol};

    fn field(tag: PrimitiveTag) -> FieldType {
        FieldType::new(Primitive::new(tag))
    }

    #[test]
    fn test_parse_rejects_unknown_tags() {
        assert_eq!(Primitive::parse("number").map(|p| p.tag()), Ok(PrimitiveTag::Number));
        assert_eq!(
            Primitive::parse("integer"),
            Err(ConstructionError::UnsupportedPrimitive {
                tag: "integer".to_string()
            })
        );
        assert!("Number".parse::<PrimitiveTag>().is_err());
    }

    #[test]
    fn test_tag_serde() {
        let json = serde_json::to_string(&PrimitiveTag::Bigint).unwrap();
        assert_eq!(json, "\"bigint\"");
    }

    #[test]
    fn test_tag_matching() {
        let cases: Vec<(PrimitiveTag, Value, bool)> = vec![
            (PrimitiveTag::Any, Value::Null, true),
            (PrimitiveTag::Boolean, Value::from(false), true),
            (PrimitiveTag::Boolean, Value::from(0), false),
            (PrimitiveTag::String, Value::from("x"), true),
            (PrimitiveTag::String, Value::from(1), false),
            (PrimitiveTag::Symbol, Value::from(Symbol::new("s")), true),
            (PrimitiveTag::Symbol, Value::from("s"), false),
            (PrimitiveTag::Bigint, Value::bigint(3), true),
            (PrimitiveTag::Bigint, Value::from(3), false),
            (PrimitiveTag::Function, Value::from(Function::class("A")), true),
            (PrimitiveTag::Function, Value::Null, false),
            (PrimitiveTag::Array, Value::array([Value::from(1)]), true),
            (PrimitiveTag::Array, Value::from(ObjectBuilder::new().build()), false),
        ];
        for (tag, value, expected) in cases {
            assert_eq!(field(tag).is_type_of(&value), expected, "{tag} vs {value:?}");
        }
    }

    #[test]
    fn test_number_rules() {
        let number = field(PrimitiveTag::Number);
        assert!(number.is_type_of(&Value::from(-1.5)));
        assert!(number.is_type_of(&Value::from(f64::INFINITY)));
        assert!(!number.is_type_of(&Value::from(f64::NAN)));

        let positive = field(PrimitiveTag::Number).positive().unwrap();
        assert!(positive.is_type_of(&Value::from(5)));
        assert!(!positive.is_type_of(&Value::from(0)));
        assert!(!positive.is_type_of(&Value::from(-0.0)));
        assert!(!positive.is_type_of(&Value::from(-1)));
        assert!(!positive.is_type_of(&Value::from(f64::NAN)));
        assert!(!positive.is_type_of(&Value::Undefined));

        let non_negative = field(PrimitiveTag::Number).non_negative().unwrap();
        assert!(non_negative.is_type_of(&Value::from(0)));
        assert!(non_negative.is_type_of(&Value::from(-0.0)));
        assert!(!non_negative.is_type_of(&Value::from(-0.1)));

        let integer = field(PrimitiveTag::Number).integer().unwrap();
        assert!(integer.is_type_of(&Value::from(4)));
        assert!(!integer.is_type_of(&Value::from(4.5)));
        assert!(!integer.is_type_of(&Value::from(f64::INFINITY)));
    }

    #[test]
    fn test_positive_and_non_negative_conflict() {
        let err = field(PrimitiveTag::Number)
            .non_negative()
            .and_then(Chainable::positive)
            .unwrap_err();
        assert_eq!(err, FieldTypeError::conflict("isPositive", "isNonNegative"));

        let err = field(PrimitiveTag::Number)
            .positive()
            .and_then(Chainable::non_negative)
            .unwrap_err();
        assert_eq!(err, FieldTypeError::conflict("isNonNegative", "isPositive"));
    }

    #[test]
    fn test_bigint_positive_rejects_only_zero() {
        let positive = field(PrimitiveTag::Bigint).positive().unwrap();
        assert!(positive.is_type_of(&Value::bigint(1)));
        assert!(positive.is_type_of(&Value::bigint(-1)));
        assert!(!positive.is_type_of(&Value::bigint(0)));
    }

    #[test]
    fn test_filled_strings_and_arrays() {
        let string = field(PrimitiveTag::String);
        assert!(string.is_type_of(&Value::from("")));
        let filled = field(PrimitiveTag::String).filled().unwrap();
        assert!(!filled.is_type_of(&Value::from("")));
        assert!(filled.is_type_of(&Value::from("x")));

        let array = field(PrimitiveTag::Array);
        assert!(array.is_type_of(&Value::array([])));
        let filled = field(PrimitiveTag::Array).filled().unwrap();
        assert!(!filled.is_type_of(&Value::array([])));
    }

    #[test]
    fn test_object_rules() {
        let object = field(PrimitiveTag::Object);
        let callable = Value::from(Function::class("A"));
        assert!(!object.is_type_of(&Value::Null));
        assert!(object.is_type_of(&Value::array([])));
        assert!(object.is_type_of(&Value::from(ObjectBuilder::new().build())));
        assert!(!object.is_type_of(&callable));

        let generic = field(PrimitiveTag::Object).generic().unwrap();
        assert!(generic.is_type_of(&callable));
        assert!(!generic.is_type_of(&Value::Null));
    }

    #[test]
    fn test_unsupported_attributes_per_tag() {
        let err = field(PrimitiveTag::Boolean).filled().unwrap_err();
        assert_eq!(
            err,
            FieldTypeError::unsupported_attribute("isFilled", "primitive(boolean)")
        );
        assert!(field(PrimitiveTag::String).positive().is_err());
        assert!(field(PrimitiveTag::Bigint).integer().is_err());
    }

    #[test]
    fn test_declared_attribute_order() {
        let names: Vec<_> = PrimitiveTag::Number
            .supported_attributes()
            .iter()
            .map(AttributeDescriptor::name)
            .collect();
        assert_eq!(
            names,
            vec!["isOptional", "isReadonly", "isInteger", "isNonNegative", "isPositive"]
        );
    }
}
