//! Detached attribute snapshots.

use super::Attribute;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A detached copy of a field type's attributes.
///
/// Mutating a snapshot never affects the field type it came from. It
/// serializes as a flat `name -> bool` record whose key order is the kind's
/// declared attribute order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttributeMap {
    entries: Vec<(Attribute, bool)>,
}

impl AttributeMap {
    pub(crate) fn from_pairs(entries: Vec<(Attribute, bool)>) -> Self {
        Self { entries }
    }

    /// Returns the value of an attribute.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<bool> {
        self.entries
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| *v)
    }

    /// Overwrites an attribute present in the snapshot.
    pub fn set(&mut self, attribute: Attribute, value: bool) -> bool {
        match self.entries.iter_mut().find(|(a, _)| *a == attribute) {
            Some(entry) => {
                entry.1 = value;
                true
            }
            None => false,
        }
    }

    /// Iterates in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the attributes that are true.
    #[must_use]
    pub fn active(&self) -> Vec<Attribute> {
        self.entries
            .iter()
            .filter(|(_, v)| *v)
            .map(|(a, _)| *a)
            .collect()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (attribute, value) in &self.entries {
            map.serialize_entry(attribute.name(), value)?;
        }
        map.end()
    }
}
