//! Digest wrapper over canonical bytes
//!
//! The hash primitives themselves are external collaborators (the
//! RustCrypto `sha2` family); this module only selects one by name, feeds
//! it canonical bytes, and renders the digest as lowercase hex.

use crate::canonical::{to_canonical_json, to_canonical_json_value};
use crate::error::CanonicalError;
use jcs_value::Value;
use serde::Serialize;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::fmt::Write;
use std::str::FromStr;

/// Caller-selectable hash primitive.
///
/// Parsed from an opaque algorithm name: `"sha-256"`, `"SHA256"`, and
/// similar spellings all resolve (case-insensitive, hyphen optional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in lowercase-hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha224 => 56,
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = CanonicalError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().replace('-', "").as_str() {
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(CanonicalError::UnsupportedAlgorithm(name.to_string())),
        }
    }
}

/// Hash raw bytes with the selected algorithm.
///
/// Returns the digest as a lowercase hex string.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::{hash_bytes, HashAlgorithm};
///
/// let hash = hash_bytes(HashAlgorithm::Sha256, b"Hello, world!");
/// assert_eq!(hash.len(), 64);
/// assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn hash_bytes(algorithm: HashAlgorithm, data: &[u8]) -> String {
    match algorithm {
        HashAlgorithm::Sha224 => digest_with::<Sha224>(data),
        HashAlgorithm::Sha256 => digest_with::<Sha256>(data),
        HashAlgorithm::Sha384 => digest_with::<Sha384>(data),
        HashAlgorithm::Sha512 => digest_with::<Sha512>(data),
    }
}

/// Hash a string with the selected algorithm.
///
/// The string is treated as UTF-8 bytes.
pub fn hash_string(algorithm: HashAlgorithm, s: &str) -> String {
    hash_bytes(algorithm, s.as_bytes())
}

/// Canonicalize a [`Value`] tree and hash the resulting bytes.
///
/// Two trees with byte-identical canonical serializations always produce
/// the same digest; barring hash collisions, trees with different
/// canonical serializations produce different digests.
///
/// # Errors
///
/// Returns `CanonicalError::UnsupportedAlgorithm` for an unknown
/// algorithm name, and any canonicalization error from the tree itself.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::hash_canonical_value;
/// use jcs_value::Value;
///
/// let v1 = Value::object(vec![
///     ("b".to_string(), Value::from(2)),
///     ("a".to_string(), Value::from(1)),
/// ])
/// .unwrap();
/// let v2 = Value::object(vec![
///     ("a".to_string(), Value::from(1.0)),
///     ("b".to_string(), Value::from(2.0)),
/// ])
/// .unwrap();
///
/// let h1 = hash_canonical_value(&v1, "sha-256").unwrap();
/// let h2 = hash_canonical_value(&v2, "sha-256").unwrap();
/// assert_eq!(h1, h2);
/// ```
pub fn hash_canonical_value(value: &Value, algorithm: &str) -> Result<String, CanonicalError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let canonical = to_canonical_json_value(value)?;
    Ok(hash_bytes(algorithm, &canonical))
}

/// Canonicalize any `Serialize` value and hash the resulting bytes.
///
/// # Errors
///
/// Returns `CanonicalError` if canonicalization fails or the algorithm
/// name is unknown.
pub fn hash_canonical<T: Serialize>(value: &T, algorithm: &str) -> Result<String, CanonicalError> {
    let algorithm: HashAlgorithm = algorithm.parse()?;
    let canonical = to_canonical_json(value)?;
    Ok(hash_bytes(algorithm, &canonical))
}

/// Verify that a digest matches the expected value.
///
/// # Example
///
/// ```rust
/// use jcs_canonical::{hash_bytes, verify_hash, HashAlgorithm};
///
/// let data = b"Hello, world!";
/// let hash = hash_bytes(HashAlgorithm::Sha256, data);
///
/// assert!(verify_hash(HashAlgorithm::Sha256, data, &hash));
/// assert!(!verify_hash(HashAlgorithm::Sha256, b"Different data", &hash));
/// ```
pub fn verify_hash(algorithm: HashAlgorithm, data: &[u8], expected_hash: &str) -> bool {
    let computed = hash_bytes(algorithm, data);
    constant_time_compare(&computed, expected_hash)
}

/// Validate a digest string for the given algorithm.
///
/// Returns `true` if the string has the right length and is all hex.
pub fn is_valid_digest(algorithm: HashAlgorithm, hash: &str) -> bool {
    hash.len() == algorithm.hex_len() && hash.chars().all(|c| c.is_ascii_hexdigit())
}

/// Normalize a digest to lowercase, or `None` if it is not a valid digest
/// for the given algorithm.
pub fn normalize_digest(algorithm: HashAlgorithm, hash: &str) -> Option<String> {
    if !is_valid_digest(algorithm, hash) {
        return None;
    }
    Some(hash.to_lowercase())
}

fn digest_with<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex_encode(&result)
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Convert bytes to a lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sha256_vectors() {
        assert_eq!(
            hash_bytes(HashAlgorithm::Sha256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_string(HashAlgorithm::Sha256, "hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("sha-256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("SHA-256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("sha512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert_eq!("sha-224".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha224));
        assert_eq!(
            "md5".parse::<HashAlgorithm>(),
            Err(CanonicalError::UnsupportedAlgorithm("md5".to_string()))
        );
    }

    #[test]
    fn test_digest_lengths() {
        for (algorithm, len) in [
            (HashAlgorithm::Sha224, 56),
            (HashAlgorithm::Sha256, 64),
            (HashAlgorithm::Sha384, 96),
            (HashAlgorithm::Sha512, 128),
        ] {
            assert_eq!(hash_bytes(algorithm, b"test").len(), len);
        }
    }

    #[test]
    fn test_hash_canonical_value_key_order_independence() {
        let v1 = Value::Object(vec![
            ("z".to_string(), Value::from(3)),
            ("a".to_string(), Value::from(1)),
        ]);
        let v2 = Value::Object(vec![
            ("a".to_string(), Value::from(1)),
            ("z".to_string(), Value::from(3)),
        ]);
        assert_eq!(
            hash_canonical_value(&v1, "sha-256").unwrap(),
            hash_canonical_value(&v2, "sha-256").unwrap()
        );
    }

    #[test]
    fn test_hash_canonical_value_unknown_algorithm() {
        let result = hash_canonical_value(&Value::Null, "whirlpool");
        assert_eq!(
            result,
            Err(CanonicalError::UnsupportedAlgorithm(
                "whirlpool".to_string()
            ))
        );
    }

    #[test]
    fn test_canonicalization_error_propagates() {
        let value = Value::Array(vec![Value::Number(f64::NAN)]);
        let result = hash_canonical_value(&value, "sha-256");
        assert_eq!(
            result,
            Err(CanonicalError::InvalidNumber {
                path: "/0".to_string(),
            })
        );
    }

    #[test]
    fn test_verify_hash() {
        let data = b"test data";
        let hash = hash_bytes(HashAlgorithm::Sha256, data);
        assert!(verify_hash(HashAlgorithm::Sha256, data, &hash));
        assert!(!verify_hash(HashAlgorithm::Sha256, b"wrong data", &hash));
    }

    #[test]
    fn test_is_valid_digest() {
        assert!(is_valid_digest(HashAlgorithm::Sha256, &"a".repeat(64)));
        assert!(!is_valid_digest(HashAlgorithm::Sha256, &"a".repeat(65)));
        assert!(!is_valid_digest(HashAlgorithm::Sha256, &"g".repeat(64)));
        assert!(is_valid_digest(HashAlgorithm::Sha512, &"0".repeat(128)));
    }

    #[test]
    fn test_normalize_digest() {
        let upper = "ABCD".to_string() + &"0".repeat(60);
        assert_eq!(
            normalize_digest(HashAlgorithm::Sha256, &upper).unwrap(),
            "abcd".to_string() + &"0".repeat(60)
        );
        assert_eq!(normalize_digest(HashAlgorithm::Sha256, "short"), None);
    }
}
