//! A validator that records what it was asked.

use crate::value::{Function, Object, ObjectBuilder, Value};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Wraps a predicate and records every value it is called with.
///
/// Hand the validator to a custom field type through [`Self::function`] or
/// [`Self::object`]; clones share the recording.
#[derive(Clone)]
pub struct RecordingValidator {
    predicate: Predicate,
    calls: Arc<Mutex<Vec<Value>>>,
}

impl RecordingValidator {
    /// Creates a recording validator.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A validator accepting everything.
    #[must_use]
    pub fn accepting() -> Self {
        Self::new(|_| true)
    }

    fn record(&self, value: &Value) -> Value {
        self.calls.lock().push(value.clone());
        Value::Boolean((self.predicate)(value))
    }

    /// The validator as a callable.
    #[must_use]
    pub fn function(&self) -> Function {
        let this = self.clone();
        Function::new("recordingValidator", move |value| this.record(value))
    }

    /// The validator as an object carrying the validator capability.
    #[must_use]
    pub fn object(&self) -> Object {
        let this = self.clone();
        ObjectBuilder::new()
            .validator(move |value| this.record(value))
            .build()
    }

    /// Returns the recorded values.
    #[must_use]
    pub fn calls(&self) -> Vec<Value> {
        self.calls.lock().clone()
    }

    /// Returns the number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Clears the recording.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl fmt::Debug for RecordingValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingValidator")
            .field("calls", &self.call_count())
            .finish_non_exhaustive()
    }
}
