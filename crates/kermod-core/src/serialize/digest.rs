//! Digest computation for portable records
//!
//! Deterministic SHA256 digests over canonical JSON, used by save/load
//! collaborators to detect drift between a stored record and a live model.
//!
//! ## Determinism Guarantees
//!
//! - Same input → same digest (canonical JSON serialization)
//! - Different element order → different digest (order-sensitive)

use serde_json::Value;
use sha2::{Digest, Sha256};

use super::model_io::serialize_model;
use crate::errors::Result;
use crate::model::Model;

/// Compute the digest of an already-built record
///
/// # Errors
/// Returns `Serialization` if the record cannot be rendered to a string.
pub fn compute_record_digest(record: &Value) -> Result<String> {
    let canonical = serde_json::to_string(record)?;
    Ok(hash_string(&canonical))
}

/// Compute the digest of a model through the serialization contract
///
/// Equivalent to serializing the model and digesting the resulting record.
///
/// # Errors
/// Returns `Serialization` if the model fails to serialize.
pub fn compute_model_digest(model: &Model) -> Result<String> {
    let record = serialize_model(model)?;
    compute_record_digest(&record)
}

/// Hash a string using SHA256.
///
/// Internal helper for deterministic digest computation.
fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Type};
    use serde_json::json;

    #[test]
    fn test_hash_string_deterministic() {
        let input = "test";
        let hash1 = hash_string(input);
        let hash2 = hash_string(input);
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // SHA256 hex length
    }

    #[test]
    fn test_record_digest_differs_on_content() {
        let a = compute_record_digest(&json!({"id": "a"})).unwrap();
        let b = compute_record_digest(&json!({"id": "b"})).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_model_digest_stable_across_round_trip() {
        let mut model = Model::new("m-1");
        model.add_element(Element::Type(Type::new("t-1")));

        let digest = compute_model_digest(&model).unwrap();
        let record = serialize_model(&model).unwrap();
        let reloaded = super::super::model_io::deserialize_model(&record).unwrap();

        assert_eq!(compute_model_digest(&reloaded).unwrap(), digest);
    }
}
