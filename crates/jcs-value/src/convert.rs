//! Conversion from `serde_json::Value`
//!
//! The canonicalizer operates on doubles, so every number must be exactly
//! representable as an IEEE-754 double. Integers that would lose precision
//! in the conversion are rejected rather than rounded: canonical output
//! feeds hashes and signatures, and a silently rounded value would verify
//! against the wrong document.

use crate::error::ValueError;
use crate::value::Value;

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        let value = match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(double_from_number(&n)?),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, v)| Ok((key, Value::try_from(v)?)))
                    .collect::<Result<Vec<_>, ValueError>>()?,
            ),
        };
        Ok(value)
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = ValueError;

    fn try_from(json: &serde_json::Value) -> Result<Self, Self::Error> {
        Value::try_from(json.clone())
    }
}

fn double_from_number(n: &serde_json::Number) -> Result<f64, ValueError> {
    if let Some(i) = n.as_i64() {
        f64_from_i64(i).ok_or_else(|| ValueError::UnrepresentableNumber(n.to_string()))
    } else if let Some(u) = n.as_u64() {
        f64_from_u64(u).ok_or_else(|| ValueError::UnrepresentableNumber(n.to_string()))
    } else {
        // serde_json numbers are i64, u64, or a finite f64
        n.as_f64()
            .ok_or_else(|| ValueError::UnrepresentableNumber(n.to_string()))
    }
}

fn f64_from_i64(i: i64) -> Option<f64> {
    // The float-to-int cast saturates, so i64::MAX would compare equal to
    // its rounded-up double. Reject it explicitly.
    if i == i64::MAX {
        return None;
    }
    let f = i as f64;
    if f as i64 == i {
        Some(f)
    } else {
        None
    }
}

fn f64_from_u64(u: u64) -> Option<f64> {
    if u == u64::MAX {
        return None;
    }
    let f = u as f64;
    if f as u64 == u {
        Some(f)
    } else {
        None
    }
}
