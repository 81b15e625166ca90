//! # Fieldtype
//!
//! Runtime value validation through composable field types.
//!
//! A field type describes the shape a value must have and answers one
//! question: does this value conform? Field types provide:
//!
//! - **Seven kinds**: primitive tags, arrays of, objects of, unions, instances,
//!   custom validators and exact literals
//! - **Attributes**: boolean modifiers such as `isOptional` or `isPositive`,
//!   declared per kind with defaults and mutual exclusions
//! - **Reusable variants**: activating the same attributes in any order yields
//!   one shared, memoized instance
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldtype::prelude::*;
//!
//! let registry = FieldRegistry::global();
//!
//! let quantity = registry.number().integer()?.positive()?;
//! assert!(quantity.is_type_of(&Value::from(3)));
//! assert!(!quantity.is_type_of(&Value::from(0)));
//!
//! let tags = array_of(registry.string().filled()?).emptiable()?;
//! assert!(tags.is_type_of(&Value::array([])));
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod attributes;
pub mod equality;
pub mod errors;
pub mod field;
pub mod kinds;
pub mod observability;
pub mod registry;
pub mod reusable;
pub mod testing;
pub mod value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attributes::{Attribute, AttributeDescriptor, AttributeMap};
    pub use crate::equality::{same_value, same_value_zero, SignedZero};
    pub use crate::errors::{ConstructionError, FieldTypeError};
    pub use crate::field::{Chainable, ConfigurationStyle, FieldKind, FieldType, Member};
    pub use crate::kinds::{
        ArrayOf, Custom, Exact, InstanceOf, ObjectOf, OneOf, Primitive, PrimitiveTag,
    };
    pub use crate::observability::{init_tracing, TracingConfig};
    pub use crate::registry::{
        array_of, custom, exact, instance_of, object_of, one_of, FieldRegistry,
    };
    pub use crate::reusable::ReusableFieldType;
    pub use crate::value::{Function, FunctionBuilder, Object, ObjectBuilder, Symbol, Value};
}
