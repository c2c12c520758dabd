//! Canonical equality

use crate::canonical::{to_canonical_json, to_canonical_json_value};
use crate::error::CanonicalError;
use jcs_value::Value;
use serde::Serialize;

/// Compare two value trees by their canonical serializations.
///
/// Returns `true` iff the canonical byte sequences are identical. This is
/// stricter than structural equality in one direction and looser in the
/// other: key order and numeric spelling are irrelevant, but a string
/// `"1"` and a number `1` are never equal.
///
/// An error from serializing either side propagates rather than
/// defaulting to `false`.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::canonically_equal;
/// use jcs_value::Value;
///
/// let a = Value::object(vec![
///     ("a".to_string(), Value::from(1)),
///     ("b".to_string(), Value::from(2)),
/// ])
/// .unwrap();
/// let b = Value::object(vec![
///     ("b".to_string(), Value::from(2.0)),
///     ("a".to_string(), Value::from(1.0)),
/// ])
/// .unwrap();
///
/// assert!(canonically_equal(&a, &b).unwrap());
/// assert!(!canonically_equal(&Value::from("1"), &Value::from(1)).unwrap());
/// ```
pub fn canonically_equal(a: &Value, b: &Value) -> Result<bool, CanonicalError> {
    Ok(to_canonical_json_value(a)? == to_canonical_json_value(b)?)
}

/// Compare two `Serialize` values by their canonical serializations.
pub fn canonically_equal_json<A: Serialize, B: Serialize>(
    a: &A,
    b: &B,
) -> Result<bool, CanonicalError> {
    Ok(to_canonical_json(a)? == to_canonical_json(b)?)
}
