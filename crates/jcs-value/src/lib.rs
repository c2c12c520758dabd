//! # JCS Value
//!
//! The value data model consumed by the JCS canonicalization engine.
//!
//! This crate provides:
//! - [`Value`], a closed sum type with exactly six variants (null, boolean,
//!   number, string, array, object)
//! - Checked object construction that rejects duplicate keys
//! - Lossless conversion from `serde_json::Value`
//!
//! A `Value` tree is produced by an external parser or builder and consumed
//! read-only by the canonicalizer. Object entries are stored as an ordered
//! entry list rather than a map, so a duplicate key arriving from a lenient
//! builder stays representable and can be rejected explicitly instead of
//! being silently resolved.
//!
//! ## Example
//!
//! ```rust
//! use jcs_value::Value;
//!
//! let doc = Value::object(vec![
//!     ("name".to_string(), Value::from("canonical")),
//!     ("count".to_string(), Value::from(3)),
//! ])
//! .unwrap();
//!
//! assert_eq!(doc.get("count").and_then(Value::as_f64), Some(3.0));
//! ```

pub mod error;
pub mod value;

mod convert;

// Re-exports for convenience
pub use error::*;
pub use value::*;
