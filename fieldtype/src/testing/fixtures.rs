//! Value fixtures.

use crate::value::{Function, Object, ObjectBuilder, Symbol, Value};

/// One or more values of every variant, including the numeric edge cases.
#[must_use]
pub fn sample_values() -> Vec<Value> {
    let class = Function::class("Sample");
    vec![
        Value::Undefined,
        Value::Null,
        Value::from(true),
        Value::from(false),
        Value::from(0),
        Value::from(-0.0),
        Value::from(1),
        Value::from(-1),
        Value::from(2.5),
        Value::from(f64::NAN),
        Value::from(f64::INFINITY),
        Value::bigint(0),
        Value::bigint(7),
        Value::from(""),
        Value::from("text"),
        Value::from(Symbol::new("sample")),
        Value::array([]),
        Value::array([Value::from(1), Value::from("a")]),
        Value::from(ObjectBuilder::new().build()),
        Value::from(ObjectBuilder::new().property("key", 1).build()),
        Value::from(Object::instance_of_class(&class)),
        Value::from(class),
    ]
}

/// `+0` and `-0`.
#[must_use]
pub fn signed_zero_pair() -> [Value; 2] {
    [Value::from(0.0), Value::from(-0.0)]
}
