//! Hash tests for jcs-canonical

use jcs_canonical::{
    hash_bytes, hash_canonical, hash_canonical_value, hash_string, verify_hash, CanonicalError,
    HashAlgorithm,
};
use jcs_value::Value;
use serde_json::json;

#[test]
fn test_known_empty_hash() {
    let hash = hash_bytes(HashAlgorithm::Sha256, b"");
    assert_eq!(
        hash,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_known_hello_hash() {
    let hash = hash_string(HashAlgorithm::Sha256, "hello");
    assert_eq!(
        hash,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn test_digest_is_hex() {
    let hash = hash_bytes(HashAlgorithm::Sha512, b"test");
    assert_eq!(hash.len(), 128);
    assert!(hex::decode(&hash).is_ok());
    assert_eq!(hash, hash.to_lowercase());
}

#[test]
fn test_hash_canonical_key_order_independence() {
    let v1 = json!({"b": 2, "a": 1});
    let v2 = json!({"a": 1, "b": 2});

    let h1 = hash_canonical(&v1, "sha-256").unwrap();
    let h2 = hash_canonical(&v2, "sha-256").unwrap();

    assert_eq!(h1, h2);
}

#[test]
fn test_hash_canonical_numeric_spelling_independence() {
    let h1 = hash_canonical(&json!({"n": 1}), "sha-256").unwrap();
    let h2 = hash_canonical(&json!({"n": 1.0}), "sha-256").unwrap();
    assert_eq!(h1, h2);
}

#[test]
fn test_hash_stability_across_calls() {
    let value = json!({"nested": {"z": [1, 2.5], "a": "text"}});
    let hashes: Vec<_> = (0..10)
        .map(|_| hash_canonical(&value, "sha-256").unwrap())
        .collect();
    assert!(hashes.iter().all(|h| h == &hashes[0]));
}

#[test]
fn test_different_trees_different_hash() {
    let h1 = hash_canonical(&json!({"a": 1}), "sha-256").unwrap();
    let h2 = hash_canonical(&json!({"a": 2}), "sha-256").unwrap();
    assert_ne!(h1, h2);
}

#[test]
fn test_algorithms_disagree_on_same_input() {
    let value = Value::from("payload");
    let h256 = hash_canonical_value(&value, "sha-256").unwrap();
    let h384 = hash_canonical_value(&value, "sha-384").unwrap();
    assert_ne!(h256.len(), h384.len());
}

#[test]
fn test_algorithm_name_spellings() {
    let value = Value::from(1);
    let h1 = hash_canonical_value(&value, "sha-256").unwrap();
    let h2 = hash_canonical_value(&value, "SHA256").unwrap();
    assert_eq!(h1, h2);
}

#[test]
fn test_unknown_algorithm_rejected() {
    let result = hash_canonical_value(&Value::Null, "crc32");
    assert_eq!(
        result,
        Err(CanonicalError::UnsupportedAlgorithm("crc32".to_string()))
    );
}

#[test]
fn test_error_from_tree_propagates() {
    let value = Value::Number(f64::INFINITY);
    assert!(matches!(
        hash_canonical_value(&value, "sha-256"),
        Err(CanonicalError::InvalidNumber { .. })
    ));
}

#[test]
fn test_verify_hash() {
    let data = b"test data";
    let hash = hash_bytes(HashAlgorithm::Sha256, data);
    assert!(verify_hash(HashAlgorithm::Sha256, data, &hash));
    assert!(!verify_hash(HashAlgorithm::Sha256, b"wrong data", &hash));
}
