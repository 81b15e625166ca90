//! Dynamic values checked by field types.
//!
//! [`Value`] mirrors the value space of a dynamically typed host: scalars
//! (including NaN, signed zero and big integers), identity-bearing symbols,
//! and shared reference values (arrays, objects, functions). Reference values
//! are `Arc`-backed, so cloning a `Value` never copies a container and two
//! clones remain the *same* value under the equality primitives.

mod object;

pub use object::{
    instance_of, Array, Function, FunctionBuilder, NativeFn, Object, ObjectBuilder, Property,
    PropertyKey, Symbol,
};

use std::fmt;

/// A dynamically typed value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value. Always decided by the `isOptional` attribute.
    #[default]
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Boolean(bool),
    /// A double-precision number. NaN and `-0.0` are preserved.
    Number(f64),
    /// An arbitrary-size integer (bounded to `i128` here).
    BigInt(i128),
    /// A string.
    String(String),
    /// A unique symbol, compared by identity.
    Symbol(Symbol),
    /// A shared array, compared by identity.
    Array(Array),
    /// A shared object, compared by identity.
    Object(Object),
    /// A shared callable, compared by identity.
    Function(Function),
}

impl Value {
    /// Creates a number value.
    #[must_use]
    pub const fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Creates a bigint value.
    #[must_use]
    pub const fn bigint(n: i128) -> Self {
        Self::BigInt(n)
    }

    /// Creates a string value.
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Creates a fresh array value from its elements.
    #[must_use]
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(Array::new(items.into_iter().collect()))
    }

    /// Returns the `typeof` tag of the value.
    ///
    /// `null`, arrays and objects all report `"object"`.
    #[must_use]
    pub fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null | Self::Array(_) | Self::Object(_) => "object",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Function(_) => "function",
        }
    }

    /// Returns true for `undefined`.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true for `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for values that can own properties: arrays, objects and
    /// functions.
    #[must_use]
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Object(_) | Self::Function(_))
    }

    /// Returns true for callables.
    #[must_use]
    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Boolean coercion.
    ///
    /// Falsy values are `undefined`, `null`, `false`, `±0`, NaN, `""` and `0n`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => !(*n == 0.0 || n.is_nan()),
            Self::BigInt(n) => *n != 0,
            Self::String(s) => !s.is_empty(),
            Self::Symbol(_) | Self::Array(_) | Self::Object(_) | Self::Function(_) => true,
        }
    }

    /// Returns the number if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) if *n == 0.0 && n.is_sign_negative() => write!(f, "-0"),
            Self::Number(n) => write!(f, "{n}"),
            Self::BigInt(n) => write!(f, "{n}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(s) => write!(f, "{s:?}"),
            Self::Array(a) => write!(f, "{a:?}"),
            Self::Object(o) => write!(f, "{o:?}"),
            Self::Function(func) => write!(f, "{func:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Self::BigInt(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Array(Array::new(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(Array::new(items.into_iter().map(Self::from).collect()))
            }
            serde_json::Value::Object(map) => {
                let object = map
                    .into_iter()
                    .fold(ObjectBuilder::new(), |builder, (key, value)| {
                        builder.property(key, Self::from(value))
                    })
                    .build();
                Self::Object(object)
            }
        }
    }
}
