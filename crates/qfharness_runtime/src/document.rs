//! The result document: the JSON object persisted as `qf.json`.
//!
//! Keys are kept in a sorted map, so serializing the same document twice yields byte-identical text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use qfharness_core::keys;

/// In-memory form of the result document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultDocument {
    fields: Map<String, Value>,
}

/// Returned when a JSON value other than an object is turned into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotAnObject {
    pub found: &'static str,
}

impl ResultDocument {
    /// An empty document (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.fields.get(key).and_then(Value::as_bool)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.fields.get(key).and_then(Value::as_u64)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Insert or overwrite a key, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Mutable access to a value, inserting `default` first when the key is absent.
    pub fn entry_or_insert(&mut self, key: &str, default: Value) -> &mut Value {
        self.fields.entry(key.to_string()).or_insert(default)
    }

    /// Store the outcome of a single named assertion.
    pub fn record_outcome(&mut self, name: &str, passed: bool) {
        self.fields.insert(name.to_string(), Value::Bool(passed));
    }

    /// Store the aggregate counters written by the template harness.
    pub fn record_counts(&mut self, passed: u64, failed: u64) {
        self.fields
            .insert(keys::SUCCESSFUL_TEST_COUNT.to_string(), Value::from(passed));
        self.fields
            .insert(keys::FAILED_TEST_COUNT.to_string(), Value::from(failed));
    }

    /// Compact JSON text, as written to disk.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields)
    }
}

impl From<Map<String, Value>> for ResultDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for ResultDocument {
    type Error = NotAnObject;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(NotAnObject {
                found: json_kind(&other),
            }),
        }
    }
}

/// Human-readable name of a JSON value's kind.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
