use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata wrapper for extensible key-value storage
///
/// Stores arbitrary annotation data as JSON values, allowing for flexible
/// extension without schema changes. Used by `MetadataFeature` to annotate
/// arbitrary elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Metadata {
    data: HashMap<String, serde_json::Value>,
}

impl Metadata {
    /// Create a new empty Metadata instance
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    /// Set a value by key
    pub fn set(&mut self, key: String, value: serde_json::Value) {
        self.data.insert(key, value);
    }

    /// Remove a value by key
    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get all keys
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Get the number of metadata entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if metadata is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<HashMap<String, serde_json::Value>> for Metadata {
    fn from(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

impl From<Metadata> for HashMap<String, serde_json::Value> {
    fn from(metadata: Metadata) -> Self {
        metadata.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_remove() {
        let mut metadata = Metadata::new();
        assert!(metadata.is_empty());

        metadata.set("stereotype".to_string(), json!("block"));
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("stereotype"), Some(&json!("block")));
        assert!(metadata.contains_key("stereotype"));

        let removed = metadata.remove("stereotype");
        assert_eq!(removed, Some(json!("block")));
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let mut metadata = Metadata::new();
        metadata.set("weight".to_string(), json!(12.5));

        let json = serde_json::to_string(&metadata).unwrap();
        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, back);
    }
}
