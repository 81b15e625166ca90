//! Typed chaining accessors.

use super::FieldType;
use crate::attributes::Attribute;
use crate::errors::FieldTypeError;
use crate::reusable::ReusableFieldType;

/// One accessor per attribute, each producing the next variant.
///
/// On an owned [`FieldType`] the accessors consume the instance and return
/// it with the attribute activated. On a [`ReusableFieldType`] they borrow the
/// handle, go through the variant cache and return the canonical instance for
/// the accumulated attribute set.
///
/// Every accessor fails with `UnsupportedAttribute` on kinds that do not
/// declare the attribute, `NoEffect` when it is already active and
/// `Conflict` when a mutually exclusive attribute is active.
pub trait Chainable: Sized {
    /// The variant produced by an activation.
    type Output;

    /// Activates one attribute.
    fn activate_attribute(self, attribute: Attribute) -> Result<Self::Output, FieldTypeError>;

    /// `isOptional`
    fn optional(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsOptional)
    }

    /// `isReadonly`
    fn readonly(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsReadonly)
    }

    /// `isFilled`
    fn filled(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsFilled)
    }

    /// `isInteger`
    fn integer(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsInteger)
    }

    /// `isNonNegative`
    fn non_negative(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsNonNegative)
    }

    /// `isPositive`
    fn positive(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsPositive)
    }

    /// `isGeneric`
    fn generic(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsGeneric)
    }

    /// `isEmptiable`
    fn emptiable(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsEmptiable)
    }

    /// `isZeroSignIdentifier`
    fn zero_sign_identifier(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IsZeroSignIdentifier)
    }

    /// `hasGenericKeys`
    fn generic_keys(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::HasGenericKeys)
    }

    /// `ignoresEnumerability`
    fn ignore_enumerability(self) -> Result<Self::Output, FieldTypeError> {
        self.activate_attribute(Attribute::IgnoresEnumerability)
    }
}

impl Chainable for FieldType {
    type Output = FieldType;

    fn activate_attribute(mut self, attribute: Attribute) -> Result<FieldType, FieldTypeError> {
        self.activate_in_place(attribute)?;
        Ok(self)
    }
}

impl Chainable for &ReusableFieldType {
    type Output = ReusableFieldType;

    fn activate_attribute(self, attribute: Attribute) -> Result<ReusableFieldType, FieldTypeError> {
        self.activate(attribute)
    }
}
