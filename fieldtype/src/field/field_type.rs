//! The `FieldType` instance.

use super::{ConfigurationStyle, Determiner, FieldKind, Selector};
use crate::attributes::{Attribute, AttributeDescriptor, AttributeKey, AttributeMap, Attributes};
use crate::errors::{ConstructionError, FieldTypeError};
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A validation rule plus its attribute state.
///
/// The kind (and therefore the determiner) is shared between an instance and
/// its duplicates; attributes are owned per instance. `FieldType` is not
/// `Clone`: [`FieldType::duplicate`] is the explicit copy.
pub struct FieldType {
    kind: Arc<dyn FieldKind>,
    attributes: Attributes,
    style: ConfigurationStyle,
    selector: Selector,
}

impl FieldType {
    /// Creates a field type with default attributes.
    pub fn new<K: FieldKind + 'static>(kind: K) -> Self {
        Self::from_shared(Arc::new(kind))
    }

    /// Creates a field type around an already shared kind.
    #[must_use]
    pub fn from_shared(kind: Arc<dyn FieldKind>) -> Self {
        let attributes = Attributes::defaults(kind.supported_attributes());
        Self {
            kind,
            attributes,
            style: ConfigurationStyle::Unset,
            selector: Selector::BASE,
        }
    }

    /// Creates a field type with initial attribute values.
    ///
    /// Initial values are validated like any other assignment (support and
    /// mutual exclusion) but do not commit the instance to a configuration
    /// style.
    pub fn with_attributes<K, I, A>(kind: K, attributes: I) -> Result<Self, FieldTypeError>
    where
        K: FieldKind + 'static,
        I: IntoIterator<Item = (A, bool)>,
        A: AttributeKey,
    {
        Self::new(kind).initialized(attributes)
    }

    /// Creates a field type with initial attribute values given as a JSON
    /// object.
    pub fn with_json_attributes<K>(
        kind: K,
        attributes: &serde_json::Value,
    ) -> Result<Self, FieldTypeError>
    where
        K: FieldKind + 'static,
    {
        let field_type = Self::new(kind);
        let typed = field_type.typed_json_pairs(attributes)?;
        field_type.initialized(typed)
    }

    fn initialized<I, A>(mut self, attributes: I) -> Result<Self, FieldTypeError>
    where
        I: IntoIterator<Item = (A, bool)>,
        A: AttributeKey,
    {
        self.attributes = self.assigned(attributes)?;
        Ok(self)
    }

    /// The kind.
    #[must_use]
    pub fn kind(&self) -> &dyn FieldKind {
        self.kind.as_ref()
    }

    /// The kind's label.
    #[must_use]
    pub fn kind_name(&self) -> String {
        self.kind.name()
    }

    /// Borrowed view of the determiner.
    #[must_use]
    pub fn determiner(&self) -> Determiner<'_> {
        self.kind.determiner()
    }

    /// The kind's ordered attribute declaration.
    #[must_use]
    pub fn supported_attributes(&self) -> &'static [AttributeDescriptor] {
        self.attributes.descriptors()
    }

    /// Returns true if `value` conforms. Never fails.
    ///
    /// `undefined` is decided by `isOptional` alone, for every kind.
    #[must_use]
    pub fn is_type_of(&self, value: &Value) -> bool {
        if value.is_undefined() {
            return self.attributes.is_optional();
        }
        self.kind.accepts(value, &self.attributes)
    }

    /// Returns the value of one attribute.
    pub fn attribute<K: AttributeKey>(&self, key: K) -> Result<bool, FieldTypeError> {
        let attribute = self.resolve(&key)?;
        Ok(self.attributes.enabled(attribute))
    }

    /// Returns a detached snapshot of every attribute.
    #[must_use]
    pub fn attributes(&self) -> AttributeMap {
        self.attributes.snapshot()
    }

    /// Borrowed attribute state.
    #[must_use]
    pub fn attribute_state(&self) -> &Attributes {
        &self.attributes
    }

    /// Sets one attribute by method call.
    pub fn set_attribute<K: AttributeKey>(
        &mut self,
        key: K,
        value: bool,
    ) -> Result<(), FieldTypeError> {
        self.set_attributes([(key, value)])
    }

    /// Sets one attribute from a JSON value, which must be a boolean.
    pub fn set_attribute_json<K: AttributeKey>(
        &mut self,
        key: K,
        value: &serde_json::Value,
    ) -> Result<(), FieldTypeError> {
        self.resolve(&key)?;
        let flag = value
            .as_bool()
            .ok_or_else(|| FieldTypeError::invalid_attribute_type(key.key_name(), json_type_name(value)))?;
        self.set_attribute(key, flag)
    }

    /// Sets several attributes by method call. Either every assignment
    /// applies or none does.
    pub fn set_attributes<I, A>(&mut self, attributes: I) -> Result<(), FieldTypeError>
    where
        I: IntoIterator<Item = (A, bool)>,
        A: AttributeKey,
    {
        self.ensure_style(ConfigurationStyle::MethodCalls)?;
        self.attributes = self.assigned(attributes)?;
        self.style = ConfigurationStyle::MethodCalls;
        Ok(())
    }

    /// Sets several attributes from a JSON object.
    pub fn set_attributes_json(
        &mut self,
        attributes: &serde_json::Value,
    ) -> Result<(), FieldTypeError> {
        let typed = self.typed_json_pairs(attributes)?;
        self.set_attributes(typed)
    }

    /// Restores declared defaults and forgets the configuration style.
    pub fn reset_attributes(&mut self) {
        self.attributes.reset();
        self.style = ConfigurationStyle::Unset;
    }

    /// Activates one attribute by name, consuming the instance.
    ///
    /// The typed accessors live on [`super::Chainable`].
    pub fn activate<K: AttributeKey>(mut self, key: K) -> Result<Self, FieldTypeError> {
        let attribute = self.resolve(&key)?;
        self.activate_in_place(attribute)?;
        Ok(self)
    }

    pub(crate) fn activate_in_place(&mut self, attribute: Attribute) -> Result<(), FieldTypeError> {
        let current = self
            .attributes
            .get(attribute)
            .ok_or_else(|| FieldTypeError::unsupported_attribute(attribute.name(), self.kind_name()))?;
        self.ensure_style(ConfigurationStyle::Chaining)?;
        if current {
            return Err(FieldTypeError::no_effect(attribute.name()));
        }
        if let Some(conflicting) = self.attributes.conflict_for(attribute) {
            return Err(FieldTypeError::conflict(attribute.name(), conflicting.name()));
        }
        self.attributes.set(attribute, true);
        self.style = ConfigurationStyle::Chaining;
        Ok(())
    }

    /// Returns a new instance sharing the determiner, with a copy of the
    /// attributes. The copy is never tagged with a cache selector.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            kind: Arc::clone(&self.kind),
            attributes: self.attributes.clone(),
            style: self.style,
            selector: Selector::BASE,
        }
    }

    /// How the attributes of this instance have been configured.
    #[must_use]
    pub fn configuration_style(&self) -> ConfigurationStyle {
        self.style
    }

    /// The cache selector of this variant; [`Selector::BASE`] outside the
    /// cache.
    #[must_use]
    pub fn selector(&self) -> Selector {
        self.selector
    }

    pub(crate) fn tagged(mut self, selector: Selector) -> Self {
        self.selector = selector;
        self
    }

    /// Keeps the attribute values but forgets how they were configured.
    pub(crate) fn unconfigured(mut self) -> Self {
        self.style = ConfigurationStyle::Unset;
        self
    }

    /// Resolves a key to an attribute declared by this kind.
    pub(crate) fn resolve<K: AttributeKey + ?Sized>(&self, key: &K) -> Result<Attribute, FieldTypeError> {
        key.resolve()
            .filter(|attribute| self.attributes.supports(*attribute))
            .ok_or_else(|| FieldTypeError::unsupported_attribute(key.key_name(), self.kind_name()))
    }

    /// Applies a batch to a copy of the state. Conflicts are judged on the
    /// final state, so the order of the pairs does not matter.
    fn assigned<I, A>(&self, attributes: I) -> Result<Attributes, FieldTypeError>
    where
        I: IntoIterator<Item = (A, bool)>,
        A: AttributeKey,
    {
        let resolved = attributes
            .into_iter()
            .map(|(key, value)| Ok((self.resolve(&key)?, value)))
            .collect::<Result<Vec<_>, FieldTypeError>>()?;

        let mut state = self.attributes.clone();
        for &(attribute, value) in &resolved {
            state.set(attribute, value);
        }
        let conflict = resolved
            .iter()
            .map(|&(attribute, _)| attribute)
            .filter(|attribute| state.enabled(*attribute))
            .find_map(|attribute| Some((attribute, state.conflict_for(attribute)?)));
        if let Some((attribute, conflicting)) = conflict {
            return Err(FieldTypeError::conflict(attribute.name(), conflicting.name()));
        }
        Ok(state)
    }

    fn typed_json_pairs<'a>(
        &self,
        attributes: &'a serde_json::Value,
    ) -> Result<Vec<(&'a str, bool)>, FieldTypeError> {
        let map = attributes
            .as_object()
            .ok_or_else(|| ConstructionError::InvalidAttributes {
                found: json_type_name(attributes).to_string(),
            })?;
        map.iter()
            .map(|(key, value)| {
                self.resolve(key)?;
                let flag = value.as_bool().ok_or_else(|| {
                    FieldTypeError::invalid_attribute_type(key.as_str(), json_type_name(value))
                })?;
                Ok((key.as_str(), flag))
            })
            .collect()
    }

    fn ensure_style(&self, attempted: ConfigurationStyle) -> Result<(), FieldTypeError> {
        match self.style {
            ConfigurationStyle::Unset => Ok(()),
            established if established == attempted => Ok(()),
            established => Err(FieldTypeError::mixed_configuration_style(
                attempted.to_string(),
                established.to_string(),
            )),
        }
    }
}

impl fmt::Debug for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldType")
            .field("kind", &self.kind)
            .field("attributes", &self.attributes.snapshot())
            .field("style", &self.style)
            .field("selector", &self.selector)
            .finish()
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
