//! Runtime attribute state of one field type.

use super::{Attribute, AttributeDescriptor, AttributeMap};

/// The attribute values of a field type.
///
/// Always fully populated: one value per declared descriptor, in declared
/// order. Undeclared attributes can never be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    descriptors: &'static [AttributeDescriptor],
    values: Vec<bool>,
}

impl Attributes {
    /// Creates the default state for a declaration.
    #[must_use]
    pub fn defaults(descriptors: &'static [AttributeDescriptor]) -> Self {
        Self {
            descriptors,
            values: descriptors.iter().map(|d| d.default).collect(),
        }
    }

    /// Returns the declaration this state follows.
    #[must_use]
    pub fn descriptors(&self) -> &'static [AttributeDescriptor] {
        self.descriptors
    }

    /// Returns the declared position of an attribute.
    #[must_use]
    pub fn index_of(&self, attribute: Attribute) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|d| d.attribute == attribute)
    }

    /// Returns true if the attribute is declared.
    #[must_use]
    pub fn supports(&self, attribute: Attribute) -> bool {
        self.index_of(attribute).is_some()
    }

    /// Returns the value of a declared attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<bool> {
        self.index_of(attribute).map(|i| self.values[i])
    }

    /// Returns the value of an attribute, treating undeclared ones as `false`.
    #[must_use]
    pub fn enabled(&self, attribute: Attribute) -> bool {
        self.get(attribute).unwrap_or(false)
    }

    /// Shorthand for `isOptional`.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.enabled(Attribute::IsOptional)
    }

    /// Stores a value. Returns false, storing nothing, if the attribute is
    /// not declared.
    pub fn set(&mut self, attribute: Attribute, value: bool) -> bool {
        match self.index_of(attribute) {
            Some(i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Returns the active attribute that would conflict with enabling
    /// `attribute`, if any. Exclusions are honoured in both directions.
    #[must_use]
    pub fn conflict_for(&self, attribute: Attribute) -> Option<Attribute> {
        self.descriptors
            .iter()
            .zip(&self.values)
            .filter(|(_, active)| **active)
            .map(|(d, _)| d)
            .find(|d| {
                d.attribute != attribute
                    && (d.excludes == Some(attribute)
                        || self.excludes_of(attribute) == Some(d.attribute))
            })
            .map(|d| d.attribute)
    }

    fn excludes_of(&self, attribute: Attribute) -> Option<Attribute> {
        self.descriptors
            .iter()
            .find(|d| d.attribute == attribute)
            .and_then(|d| d.excludes)
    }

    /// Restores declared defaults.
    pub fn reset(&mut self) {
        for (value, descriptor) in self.values.iter_mut().zip(self.descriptors) {
            *value = descriptor.default;
        }
    }

    /// Iterates over `(attribute, value)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, bool)> + '_ {
        self.descriptors
            .iter()
            .zip(&self.values)
            .map(|(d, v)| (d.attribute, *v))
    }

    /// Returns a detached snapshot.
    #[must_use]
    pub fn snapshot(&self) -> AttributeMap {
        AttributeMap::from_pairs(self.iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{IS_OPTIONAL, IS_READONLY};

    static NUMERIC: [AttributeDescriptor; 4] = [
        IS_OPTIONAL,
        IS_READONLY,
        AttributeDescriptor::new(Attribute::IsNonNegative).excluding(Attribute::IsPositive),
        AttributeDescriptor::new(Attribute::IsPositive).excluding(Attribute::IsNonNegative),
    ];

    static ONE_SIDED: [AttributeDescriptor; 3] = [
        IS_OPTIONAL,
        AttributeDescriptor::new(Attribute::IsInteger),
        AttributeDescriptor::new(Attribute::IsPositive).excluding(Attribute::IsInteger),
    ];

    #[test]
    fn test_defaults_fully_populated() {
        let attributes = Attributes::defaults(&NUMERIC);
        assert_eq!(attributes.iter().count(), 4);
        assert!(attributes.iter().all(|(_, v)| !v));
        assert_eq!(attributes.get(Attribute::IsFilled), None);
    }

    #[test]
    fn test_set_rejects_undeclared() {
        let mut attributes = Attributes::defaults(&NUMERIC);
        assert!(!attributes.set(Attribute::IsFilled, true));
        assert!(attributes.set(Attribute::IsOptional, true));
        assert!(attributes.is_optional());
    }

    #[test]
    fn test_conflict_lookup() {
        let mut attributes = Attributes::defaults(&NUMERIC);
        assert_eq!(attributes.conflict_for(Attribute::IsPositive), None);

        attributes.set(Attribute::IsNonNegative, true);
        assert_eq!(
            attributes.conflict_for(Attribute::IsPositive),
            Some(Attribute::IsNonNegative)
        );
        assert_eq!(attributes.conflict_for(Attribute::IsOptional), None);
    }

    #[test]
    fn test_conflict_declared_on_one_side_only() {
        let mut attributes = Attributes::defaults(&ONE_SIDED);
        attributes.set(Attribute::IsInteger, true);
        assert_eq!(
            attributes.conflict_for(Attribute::IsPositive),
            Some(Attribute::IsInteger)
        );

        let mut attributes = Attributes::defaults(&ONE_SIDED);
        attributes.set(Attribute::IsPositive, true);
        assert_eq!(
            attributes.conflict_for(Attribute::IsInteger),
            Some(Attribute::IsPositive)
        );
    }

    #[test]
    fn test_reset_and_snapshot() {
        let mut attributes = Attributes::defaults(&NUMERIC);
        attributes.set(Attribute::IsPositive, true);

        let snapshot = attributes.snapshot();
        attributes.reset();

        assert_eq!(snapshot.get(Attribute::IsPositive), Some(true));
        assert_eq!(attributes.get(Attribute::IsPositive), Some(false));
    }
}
