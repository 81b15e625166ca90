//! The concrete field type kinds.
//!
//! | kind | determiner | extra attributes |
//! |---|---|---|
//! | [`Primitive`] | a [`PrimitiveTag`] | per tag |
//! | [`ArrayOf`] | a [`Member`](crate::field::Member) | `isEmptiable`, `isZeroSignIdentifier` |
//! | [`ObjectOf`] | a field type | `hasGenericKeys`, `ignoresEnumerability`, `isGeneric` |
//! | [`OneOf`] | two or more distinct members | `isZeroSignIdentifier` |
//! | [`InstanceOf`] | a constructor-like value | none |
//! | [`Custom`] | a validator | none |
//! | [`Exact`] | a literal | `isZeroSignIdentifier` |

mod array_of;
mod custom;
mod exact;
mod instance_of;
mod object_of;
mod one_of;
mod primitive;

pub use array_of::ArrayOf;
pub use custom::Custom;
pub use exact::Exact;
pub use instance_of::InstanceOf;
pub use object_of::ObjectOf;
pub use one_of::OneOf;
pub use primitive::{Primitive, PrimitiveTag};

use crate::attributes::{Attribute, AttributeDescriptor, Attributes, IS_OPTIONAL, IS_READONLY};
use crate::equality::SignedZero;

const IS_ZERO_SIGN_IDENTIFIER: AttributeDescriptor =
    AttributeDescriptor::new(Attribute::IsZeroSignIdentifier);

/// Declaration shared by the kinds that only compare against literals.
static LITERAL_ATTRIBUTES: [AttributeDescriptor; 3] =
    [IS_OPTIONAL, IS_READONLY, IS_ZERO_SIGN_IDENTIFIER];

/// Equality policy selected by `isZeroSignIdentifier`.
fn signed_zero_policy(attributes: &Attributes) -> SignedZero {
    SignedZero::from_identifier(attributes.enabled(Attribute::IsZeroSignIdentifier))
}
