//! Reference values: symbols, arrays, objects and functions.

use super::Value;
use std::fmt;
use std::sync::Arc;

/// Native behaviour of a callable or of an object capability.
pub type NativeFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A unique symbol. Two symbols are the same only if they are clones of one
/// another, whatever their descriptions.
#[derive(Clone)]
pub struct Symbol(Arc<Option<String>>);

impl Symbol {
    /// Creates a new symbol with a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::new(Some(description.into())))
    }

    /// Creates a new symbol without a description.
    #[must_use]
    pub fn anonymous() -> Self {
        Self(Arc::new(None))
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Identity comparison.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

/// A shared, immutable array.
#[derive(Clone)]
pub struct Array(Arc<Vec<Value>>);

impl Array {
    /// Creates a new array.
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        Self(Arc::new(items))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Identity comparison.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The key of an own property.
#[derive(Clone)]
pub enum PropertyKey {
    /// A string key.
    String(String),
    /// A symbol key.
    Symbol(Symbol),
}

impl PropertyKey {
    /// Returns true for symbol keys.
    #[must_use]
    pub fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Symbol(s) => write!(f, "[{s:?}]"),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(s: Symbol) -> Self {
        Self::Symbol(s)
    }
}

/// An own property.
#[derive(Debug, Clone)]
pub struct Property {
    /// The key.
    pub key: PropertyKey,
    /// The value.
    pub value: Value,
    /// Whether the property shows up in enumerable listings.
    pub enumerable: bool,
}

/// Own properties in insertion order. Redefining a key replaces it in place.
#[derive(Debug, Clone, Default)]
struct PropertyList(Vec<Property>);

impl PropertyList {
    fn define(&mut self, property: Property) {
        match self.0.iter_mut().find(|p| p.key.matches(&property.key)) {
            Some(existing) => *existing = property,
            None => self.0.push(property),
        }
    }

    /// String-keyed entries come before symbol-keyed ones, as in an ordinary
    /// own-keys listing.
    fn ordered(&self) -> impl Iterator<Item = &Property> {
        let strings = self.0.iter().filter(|p| !p.key.is_symbol());
        let symbols = self.0.iter().filter(|p| p.key.is_symbol());
        strings.chain(symbols)
    }
}

struct ObjectInner {
    properties: PropertyList,
    prototype: Option<Object>,
    validator: Option<NativeFn>,
    instance_check: Option<NativeFn>,
}

/// A shared, immutable object.
///
/// Besides its own properties an object may carry two designated
/// capabilities: a *validator* (consumed by custom field types) and an
/// *instance check* (consumed by instance-of field types).
#[derive(Clone)]
pub struct Object(Arc<ObjectInner>);

impl Object {
    /// Creates an object whose prototype is the given class's prototype object.
    ///
    /// Classes without a prototype object produce a plain object.
    #[must_use]
    pub fn instance_of_class(class: &Function) -> Self {
        let mut builder = ObjectBuilder::new();
        if let Some(prototype) = class.prototype_object() {
            builder = builder.prototype(prototype.clone());
        }
        builder.build()
    }

    /// Returns the prototype link.
    #[must_use]
    pub fn prototype(&self) -> Option<&Object> {
        self.0.prototype.as_ref()
    }

    /// Looks up an own string-keyed property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0
            .properties
            .0
            .iter()
            .find(|p| matches!(&p.key, PropertyKey::String(k) if k == key))
            .map(|p| &p.value)
    }

    /// Iterates over own properties, string keys first.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.0.properties.ordered()
    }

    /// Returns the validator capability.
    #[must_use]
    pub fn validator(&self) -> Option<&NativeFn> {
        self.0.validator.as_ref()
    }

    /// Returns the instance check capability.
    #[must_use]
    pub fn instance_check(&self) -> Option<&NativeFn> {
        self.0.instance_check.as_ref()
    }

    /// Identity comparison.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if `ancestor` is on this object's prototype chain.
    #[must_use]
    pub fn inherits_from(&self, ancestor: &Object) -> bool {
        let mut current = self.prototype();
        while let Some(prototype) = current {
            if prototype.ptr_eq(ancestor) {
                return true;
            }
            current = prototype.prototype();
        }
        false
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for property in self.properties() {
            map.entry(&property.key, &property.value);
        }
        map.finish()
    }
}

/// Builder for [`Object`].
#[derive(Default)]
pub struct ObjectBuilder {
    properties: PropertyList,
    prototype: Option<Object>,
    validator: Option<NativeFn>,
    instance_check: Option<NativeFn>,
}

impl ObjectBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an enumerable own property.
    #[must_use]
    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.properties.define(Property {
            key: key.into(),
            value: value.into(),
            enumerable: true,
        });
        self
    }

    /// Adds a non-enumerable own property.
    #[must_use]
    pub fn hidden_property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.properties.define(Property {
            key: key.into(),
            value: value.into(),
            enumerable: false,
        });
        self
    }

    /// Sets the prototype link.
    #[must_use]
    pub fn prototype(mut self, prototype: Object) -> Self {
        self.prototype = Some(prototype);
        self
    }

    /// Attaches the validator capability.
    #[must_use]
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Attaches the instance check capability.
    #[must_use]
    pub fn instance_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.instance_check = Some(Arc::new(check));
        self
    }

    /// Builds the object.
    #[must_use]
    pub fn build(self) -> Object {
        Object(Arc::new(ObjectInner {
            properties: self.properties,
            prototype: self.prototype,
            validator: self.validator,
            instance_check: self.instance_check,
        }))
    }
}

struct FunctionInner {
    name: String,
    behavior: Option<NativeFn>,
    properties: PropertyList,
    prototype_object: Option<Object>,
}

/// A shared callable.
///
/// A function with a prototype object is constructor-like: objects whose
/// prototype chain contains that object are its instances.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

impl Function {
    /// Creates a plain callable without a prototype object.
    #[must_use]
    pub fn new<F>(name: impl Into<String>, behavior: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        FunctionBuilder::new(name).behavior(behavior).build()
    }

    /// Creates a callable returning a boolean.
    #[must_use]
    pub fn predicate<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(name, move |value| Value::Boolean(predicate(value)))
    }

    /// Creates a constructor-like function with a fresh prototype object.
    #[must_use]
    pub fn class(name: impl Into<String>) -> Self {
        FunctionBuilder::new(name)
            .prototype_object(ObjectBuilder::new().build())
            .build()
    }

    /// Creates a constructor-like function whose prototype object inherits
    /// from `parent`'s prototype object.
    #[must_use]
    pub fn subclass(name: impl Into<String>, parent: &Function) -> Self {
        let mut prototype = ObjectBuilder::new();
        if let Some(parent_prototype) = parent.prototype_object() {
            prototype = prototype.prototype(parent_prototype.clone());
        }
        FunctionBuilder::new(name)
            .prototype_object(prototype.build())
            .build()
    }

    /// Returns the function's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Calls the function. Functions without native behaviour return
    /// `undefined`.
    #[must_use]
    pub fn call(&self, argument: &Value) -> Value {
        self.0
            .behavior
            .as_ref()
            .map_or(Value::Undefined, |behavior| behavior(argument))
    }

    /// Returns the prototype object handed to instances.
    #[must_use]
    pub fn prototype_object(&self) -> Option<&Object> {
        self.0.prototype_object.as_ref()
    }

    /// Iterates over own properties, string keys first.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.0.properties.ordered()
    }

    /// Identity comparison.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.0.name)
    }
}

/// Builder for [`Function`].
pub struct FunctionBuilder {
    name: String,
    behavior: Option<NativeFn>,
    properties: PropertyList,
    prototype_object: Option<Object>,
}

impl FunctionBuilder {
    /// Creates a builder for a function with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            behavior: None,
            properties: PropertyList::default(),
            prototype_object: None,
        }
    }

    /// Sets the native behaviour.
    #[must_use]
    pub fn behavior<F>(mut self, behavior: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.behavior = Some(Arc::new(behavior));
        self
    }

    /// Adds an enumerable own property.
    #[must_use]
    pub fn property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.properties.define(Property {
            key: key.into(),
            value: value.into(),
            enumerable: true,
        });
        self
    }

    /// Adds a non-enumerable own property.
    #[must_use]
    pub fn hidden_property(mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> Self {
        self.properties.define(Property {
            key: key.into(),
            value: value.into(),
            enumerable: false,
        });
        self
    }

    /// Sets the prototype object handed to instances.
    #[must_use]
    pub fn prototype_object(mut self, prototype: Object) -> Self {
        self.prototype_object = Some(prototype);
        self
    }

    /// Builds the function.
    #[must_use]
    pub fn build(self) -> Function {
        Function(Arc::new(FunctionInner {
            name: self.name,
            behavior: self.behavior,
            properties: self.properties,
            prototype_object: self.prototype_object,
        }))
    }
}

/// The runtime is-instance-of relation: `value instanceof target`.
///
/// Targets that cannot have instances (scalars, plain objects without an
/// instance check, functions without a prototype object) yield `false`.
#[must_use]
pub fn instance_of(value: &Value, target: &Value) -> bool {
    match target {
        Value::Object(object) => object
            .instance_check()
            .is_some_and(|check| check(value).is_truthy()),
        Value::Function(function) => {
            let Some(prototype) = function.prototype_object() else {
                return false;
            };
            match value {
                Value::Object(object) => object.inherits_from(prototype),
                _ => false,
            }
        }
        _ => false,
    }
}
