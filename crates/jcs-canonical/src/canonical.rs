//! Canonical JSON serialization

use crate::error::CanonicalError;
use crate::escape::write_escaped;
use crate::number::format_finite;
use jcs_value::Value;
use serde::Serialize;
use std::cmp::Ordering;

/// Default bound on nesting depth.
///
/// The walk is recursive, so the depth guard is what keeps native stack
/// usage deterministic against pathological or adversarial input.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Serialize any `Serialize` value to canonical JSON bytes.
///
/// # Rules
///
/// - Object keys sorted by their UTF-16 code-unit sequence
/// - Arrays preserve order
/// - No whitespace
/// - Numbers in ECMAScript `Number::toString` form
/// - Minimal string escaping, raw UTF-8 for everything else
///
/// The value is converted through `serde_json::Value` first; note that
/// serde_json maps non-finite floats to `null` during that conversion, so
/// callers needing strict NaN/Infinity rejection should build a
/// [`Value`] tree and use [`to_canonical_json_value`] instead.
///
/// # Errors
///
/// Returns `CanonicalError::UnsupportedType` if the value contains an
/// integer that is not exactly representable as a double, and any error
/// [`to_canonical_json_value`] can produce.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::to_canonical_json;
///
/// let value = serde_json::json!({"z": 1, "a": 2});
/// let canonical = to_canonical_json(&value).unwrap();
/// assert_eq!(canonical, b"{\"a\":2,\"z\":1}");
/// ```
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalError> {
    let json_value = serde_json::to_value(value)?;
    let tree = Value::try_from(json_value)?;
    to_canonical_json_value(&tree)
}

/// Serialize a [`Value`] tree to canonical JSON bytes.
///
/// # Errors
///
/// - `CanonicalError::InvalidNumber` if any number in the tree is NaN or
///   an infinity (the error carries the JSON Pointer of the node)
/// - `CanonicalError::DuplicateKey` if an object holds two entries with
///   the same key
/// - `CanonicalError::DepthExceeded` if nesting exceeds
///   [`DEFAULT_MAX_DEPTH`]
///
/// # Example
///
/// ```rust
/// use jcs_canonical::to_canonical_json_value;
/// use jcs_value::Value;
///
/// let value = Value::Array(vec![Value::Null, Value::Number(1.5)]);
/// assert_eq!(to_canonical_json_value(&value).unwrap(), b"[null,1.5]");
/// ```
pub fn to_canonical_json_value(value: &Value) -> Result<Vec<u8>, CanonicalError> {
    to_canonical_json_value_with_depth(value, DEFAULT_MAX_DEPTH)
}

/// Serialize a [`Value`] tree with a caller-selected nesting limit.
pub fn to_canonical_json_value_with_depth(
    value: &Value,
    max_depth: usize,
) -> Result<Vec<u8>, CanonicalError> {
    let mut serializer = Serializer::new(max_depth);
    serializer.write_value(value, 0)?;
    Ok(serializer.output)
}

/// Serialize any `Serialize` value to a canonical JSON string.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let bytes = to_canonical_json(value)?;
    // Safe because we only produce valid UTF-8
    Ok(String::from_utf8(bytes).expect("canonical JSON is always valid UTF-8"))
}

/// Serialize a [`Value`] tree to a canonical JSON string.
pub fn to_canonical_json_value_string(value: &Value) -> Result<String, CanonicalError> {
    let bytes = to_canonical_json_value(value)?;
    Ok(String::from_utf8(bytes).expect("canonical JSON is always valid UTF-8"))
}

/// One step of the path from the root to the node being written.
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

struct Serializer<'a> {
    output: Vec<u8>,
    max_depth: usize,
    path: Vec<Segment<'a>>,
}

impl<'a> Serializer<'a> {
    fn new(max_depth: usize) -> Self {
        Self {
            output: Vec::new(),
            max_depth,
            path: Vec::new(),
        }
    }

    /// RFC 6901 pointer to the node currently being written.
    fn pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            out.push('/');
            match segment {
                Segment::Key(key) => out.push_str(&escape_pointer_component(key)),
                Segment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }

    fn write_value(&mut self, value: &'a Value, depth: usize) -> Result<(), CanonicalError> {
        if depth >= self.max_depth {
            return Err(CanonicalError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        match value {
            Value::Null => self.output.extend_from_slice(b"null"),
            Value::Bool(true) => self.output.extend_from_slice(b"true"),
            Value::Bool(false) => self.output.extend_from_slice(b"false"),
            Value::Number(n) => {
                if !n.is_finite() {
                    return Err(CanonicalError::InvalidNumber {
                        path: self.pointer(),
                    });
                }
                self.output.extend_from_slice(format_finite(*n).as_bytes());
            }
            Value::String(s) => write_escaped(&mut self.output, s),
            Value::Array(items) => {
                self.output.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push(b',');
                    }
                    self.path.push(Segment::Index(i));
                    self.write_value(item, depth + 1)?;
                    self.path.pop();
                }
                self.output.push(b']');
            }
            Value::Object(entries) => self.write_object(entries, depth)?,
        }
        Ok(())
    }

    fn write_object(
        &mut self,
        entries: &'a [(String, Value)],
        depth: usize,
    ) -> Result<(), CanonicalError> {
        // Sort by UTF-16 code units. This differs from UTF-8 byte order for
        // keys mixing astral and upper-BMP characters, because surrogate
        // code units (0xD800..) sort below 0xE000.. while their UTF-8
        // encodings sort above.
        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| cmp_utf16(&entries[a].0, &entries[b].0));

        self.output.push(b'{');
        for (i, &idx) in order.iter().enumerate() {
            let (key, value) = &entries[idx];
            if i > 0 {
                // Equal keys are adjacent after sorting.
                if entries[order[i - 1]].0 == *key {
                    return Err(CanonicalError::DuplicateKey {
                        key: key.clone(),
                        path: self.pointer(),
                    });
                }
                self.output.push(b',');
            }
            write_escaped(&mut self.output, key);
            self.output.push(b':');
            self.path.push(Segment::Key(key));
            self.write_value(value, depth + 1)?;
            self.path.pop();
        }
        self.output.push(b'}');
        Ok(())
    }
}

/// Compare two keys by their UTF-16 code-unit sequences.
fn cmp_utf16(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// RFC 6901 component escaping (`~` becomes `~0`, `/` becomes `~1`).
fn escape_pointer_component(component: &str) -> String {
    component.replace('~', "~0").replace('/', "~1")
}
