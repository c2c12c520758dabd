//! # JCS Canonical
//!
//! Deterministic JSON serialization and hashing: semantically identical
//! documents always produce byte-identical output, so canonical bytes can
//! back stable hashing, signing, and cache-key derivation.
//!
//! This crate provides:
//! - Canonical JSON serialization of a [`jcs_value::Value`] tree
//! - ECMAScript-compatible number formatting and minimal string escaping
//! - Digest derivation over canonical bytes with a caller-selected
//!   algorithm
//! - Canonical equality
//!
//! ## Canonical JSON Rules
//!
//! 1. Object keys sorted by their UTF-16 code-unit sequence
//! 2. Arrays preserve insertion order
//! 3. No whitespace
//! 4. Numbers in shortest round-trip ECMAScript form (`1`, not `1.0`;
//!    `1e+21` past the plain-notation range)
//! 5. Minimal string escaping; everything else is raw UTF-8
//!
//! ## Example
//!
//! ```rust
//! use jcs_canonical::{hash_canonical, to_canonical_json_string};
//!
//! // Canonicalize JSON
//! let value = serde_json::json!({"b": 1.0, "a": 2});
//! let canonical = to_canonical_json_string(&value).unwrap();
//! assert_eq!(canonical, r#"{"a":2,"b":1}"#);
//!
//! // Hash content
//! let hash = hash_canonical(&value, "sha-256").unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! ## Failure Modes
//!
//! Canonicalization is all-or-nothing. NaN or an infinity anywhere in the
//! tree fails with `InvalidNumber` (carrying the JSON Pointer of the
//! node), a repeated object key fails with `DuplicateKey` instead of
//! being silently resolved, and nesting past the configured limit fails
//! with `DepthExceeded`.

mod canonical;
mod equal;
mod error;
mod escape;
mod hash;
mod number;

pub use canonical::*;
pub use equal::*;
pub use error::*;
pub use escape::*;
pub use hash::*;
pub use number::*;
