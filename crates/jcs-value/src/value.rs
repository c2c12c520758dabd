//! The six-variant value tree

use crate::error::ValueError;
use std::collections::HashSet;

/// A parsed JSON-like document.
///
/// Exactly six variants, matching the JSON data model. The type is closed:
/// the canonicalizer's match over it is exhaustive and cannot silently
/// mishandle an unexpected shape.
///
/// Numbers are IEEE-754 doubles. A number must be finite by the time it
/// reaches the canonicalizer; storing NaN or an infinity is possible but
/// canonicalization of such a tree fails.
///
/// Objects are insertion-ordered entry lists. Insertion order does not
/// affect canonical output (keys are sorted during serialization), but the
/// list representation keeps duplicate keys visible so they can be rejected
/// rather than last-write-wins resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Build an object, rejecting duplicate keys up front.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::DuplicateKey` if two entries share a key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use jcs_value::{Value, ValueError};
    ///
    /// let ok = Value::object(vec![("a".to_string(), Value::Null)]);
    /// assert!(ok.is_ok());
    ///
    /// let dup = Value::object(vec![
    ///     ("a".to_string(), Value::Null),
    ///     ("a".to_string(), Value::Bool(true)),
    /// ]);
    /// assert_eq!(dup, Err(ValueError::DuplicateKey("a".to_string())));
    /// ```
    pub fn object(entries: Vec<(String, Value)>) -> Result<Value, ValueError> {
        let mut seen = HashSet::new();
        for (key, _) in &entries {
            if !seen.insert(key.as_str()) {
                return Err(ValueError::DuplicateKey(key.clone()));
            }
        }
        Ok(Value::Object(entries))
    }

    /// Build an object without checking for duplicate keys.
    ///
    /// The canonicalizer still rejects duplicates at serialization time;
    /// this constructor only defers the check.
    pub fn object_unchecked(entries: Vec<(String, Value)>) -> Value {
        Value::Object(entries)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up the first entry with the given key in an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Variant name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
