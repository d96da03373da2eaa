use std::collections::HashMap;

use crate::errors::{KermodError, Result};
use crate::model::{
    Feature, FeatureValue, MetadataFeature, MultiplicityRange, Package, Relationship, Type,
    TypeOperator,
};

/// In-memory store for model entities, one map per kind
///
/// Not thread-safe (no Arc/RwLock) — designed for single-threaded use with
/// exactly one logical writer at a time. The store is `Clone`, so callers
/// that need an isolated snapshot for validation can clone before mutating.
/// No entity is implicitly destroyed; removal is always an explicit
/// operation.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) types: HashMap<String, Type>,
    pub(crate) features: HashMap<String, Feature>,
    pub(crate) multiplicities: HashMap<String, MultiplicityRange>,
    pub(crate) relationships: HashMap<String, Relationship>,
    pub(crate) operators: HashMap<String, TypeOperator>,
    pub(crate) feature_values: HashMap<String, FeatureValue>,
    pub(crate) metadata_features: HashMap<String, MetadataFeature>,
    pub(crate) packages: HashMap<String, Package>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Types =====

    /// Get a type by id
    ///
    /// # Errors
    /// Returns `TypeNotFound` if no type has the given id.
    pub fn get_type(&self, id: &str) -> Result<&Type> {
        self.types.get(id).ok_or_else(|| KermodError::TypeNotFound {
            type_id: id.to_string(),
        })
    }

    /// Get a mutable reference to a type by id
    ///
    /// # Errors
    /// Returns `TypeNotFound` if no type has the given id.
    pub fn get_type_mut(&mut self, id: &str) -> Result<&mut Type> {
        self.types
            .get_mut(id)
            .ok_or_else(|| KermodError::TypeNotFound {
                type_id: id.to_string(),
            })
    }

    /// Insert a type, replacing any existing type with the same id
    pub fn insert_type(&mut self, ty: Type) {
        self.types.insert(ty.element.id.clone(), ty);
    }

    /// Remove a type, returning it
    ///
    /// Removing a type orphans its owned features: they are dropped with it.
    ///
    /// # Errors
    /// Returns `TypeNotFound` if no type has the given id.
    pub fn remove_type(&mut self, id: &str) -> Result<Type> {
        self.types.remove(id).ok_or_else(|| KermodError::TypeNotFound {
            type_id: id.to_string(),
        })
    }

    /// List all types
    pub fn list_types(&self) -> Vec<&Type> {
        self.types.values().collect()
    }

    // ===== Free-standing features =====

    /// Get a free-standing feature by id
    ///
    /// # Errors
    /// Returns `FeatureNotFound` if no feature has the given id.
    pub fn get_feature(&self, id: &str) -> Result<&Feature> {
        self.features
            .get(id)
            .ok_or_else(|| KermodError::FeatureNotFound {
                feature_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a free-standing feature by id
    ///
    /// # Errors
    /// Returns `FeatureNotFound` if no feature has the given id.
    pub fn get_feature_mut(&mut self, id: &str) -> Result<&mut Feature> {
        self.features
            .get_mut(id)
            .ok_or_else(|| KermodError::FeatureNotFound {
                feature_id: id.to_string(),
            })
    }

    /// Insert a feature, replacing any existing feature with the same id
    pub fn insert_feature(&mut self, feature: Feature) {
        self.features.insert(feature.element.id.clone(), feature);
    }

    /// Remove a free-standing feature, returning it
    ///
    /// # Errors
    /// Returns `FeatureNotFound` if no feature has the given id.
    pub fn remove_feature(&mut self, id: &str) -> Result<Feature> {
        self.features
            .remove(id)
            .ok_or_else(|| KermodError::FeatureNotFound {
                feature_id: id.to_string(),
            })
    }

    /// List all free-standing features
    pub fn list_features(&self) -> Vec<&Feature> {
        self.features.values().collect()
    }

    // ===== Multiplicity ranges =====

    /// Get a multiplicity range by id
    ///
    /// # Errors
    /// Returns `MultiplicityNotFound` if no range has the given id.
    pub fn get_multiplicity(&self, id: &str) -> Result<&MultiplicityRange> {
        self.multiplicities
            .get(id)
            .ok_or_else(|| KermodError::MultiplicityNotFound {
                multiplicity_id: id.to_string(),
            })
    }

    /// Insert a multiplicity range, replacing on duplicate id
    pub fn insert_multiplicity(&mut self, range: MultiplicityRange) {
        self.multiplicities.insert(range.element.id.clone(), range);
    }

    /// Remove a multiplicity range, returning it
    ///
    /// # Errors
    /// Returns `MultiplicityNotFound` if no range has the given id.
    pub fn remove_multiplicity(&mut self, id: &str) -> Result<MultiplicityRange> {
        self.multiplicities
            .remove(id)
            .ok_or_else(|| KermodError::MultiplicityNotFound {
                multiplicity_id: id.to_string(),
            })
    }

    /// List all multiplicity ranges
    pub fn list_multiplicities(&self) -> Vec<&MultiplicityRange> {
        self.multiplicities.values().collect()
    }

    // ===== Relationships =====

    /// Get a relationship edge by id
    ///
    /// # Errors
    /// Returns `RelationshipNotFound` if no edge has the given id.
    pub fn get_relationship(&self, id: &str) -> Result<&Relationship> {
        self.relationships
            .get(id)
            .ok_or_else(|| KermodError::RelationshipNotFound {
                relationship_id: id.to_string(),
            })
    }

    /// Insert a relationship edge, replacing on duplicate id
    pub fn insert_relationship(&mut self, relationship: Relationship) {
        self.relationships
            .insert(relationship.id().to_string(), relationship);
    }

    /// Remove a relationship edge, returning it
    ///
    /// # Errors
    /// Returns `RelationshipNotFound` if no edge has the given id.
    pub fn remove_relationship(&mut self, id: &str) -> Result<Relationship> {
        self.relationships
            .remove(id)
            .ok_or_else(|| KermodError::RelationshipNotFound {
                relationship_id: id.to_string(),
            })
    }

    /// List all relationship edges
    pub fn list_relationships(&self) -> Vec<&Relationship> {
        self.relationships.values().collect()
    }

    // ===== Type operators =====

    /// Get a type operator by id
    ///
    /// # Errors
    /// Returns `OperatorNotFound` if no operator has the given id.
    pub fn get_operator(&self, id: &str) -> Result<&TypeOperator> {
        self.operators
            .get(id)
            .ok_or_else(|| KermodError::OperatorNotFound {
                operator_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a type operator by id
    ///
    /// # Errors
    /// Returns `OperatorNotFound` if no operator has the given id.
    pub fn get_operator_mut(&mut self, id: &str) -> Result<&mut TypeOperator> {
        self.operators
            .get_mut(id)
            .ok_or_else(|| KermodError::OperatorNotFound {
                operator_id: id.to_string(),
            })
    }

    /// Insert a type operator, replacing on duplicate id
    pub fn insert_operator(&mut self, operator: TypeOperator) {
        self.operators.insert(operator.id().to_string(), operator);
    }

    /// Remove a type operator, returning it
    ///
    /// # Errors
    /// Returns `OperatorNotFound` if no operator has the given id.
    pub fn remove_operator(&mut self, id: &str) -> Result<TypeOperator> {
        self.operators
            .remove(id)
            .ok_or_else(|| KermodError::OperatorNotFound {
                operator_id: id.to_string(),
            })
    }

    /// List all type operators
    pub fn list_operators(&self) -> Vec<&TypeOperator> {
        self.operators.values().collect()
    }

    // ===== Feature values =====

    /// Get a feature value by id
    ///
    /// # Errors
    /// Returns `FeatureValueNotFound` if no value has the given id.
    pub fn get_feature_value(&self, id: &str) -> Result<&FeatureValue> {
        self.feature_values
            .get(id)
            .ok_or_else(|| KermodError::FeatureValueNotFound {
                value_id: id.to_string(),
            })
    }

    /// Insert a feature value, replacing on duplicate id
    pub fn insert_feature_value(&mut self, value: FeatureValue) {
        self.feature_values
            .insert(value.element.id.clone(), value);
    }

    /// Remove a feature value, returning it
    ///
    /// # Errors
    /// Returns `FeatureValueNotFound` if no value has the given id.
    pub fn remove_feature_value(&mut self, id: &str) -> Result<FeatureValue> {
        self.feature_values
            .remove(id)
            .ok_or_else(|| KermodError::FeatureValueNotFound {
                value_id: id.to_string(),
            })
    }

    /// List all feature values
    pub fn list_feature_values(&self) -> Vec<&FeatureValue> {
        self.feature_values.values().collect()
    }

    // ===== Metadata features =====

    /// Get a metadata feature by id
    ///
    /// # Errors
    /// Returns `MetadataFeatureNotFound` if no annotation has the given id.
    pub fn get_metadata_feature(&self, id: &str) -> Result<&MetadataFeature> {
        self.metadata_features
            .get(id)
            .ok_or_else(|| KermodError::MetadataFeatureNotFound {
                metadata_id: id.to_string(),
            })
    }

    /// Insert a metadata feature, replacing on duplicate id
    pub fn insert_metadata_feature(&mut self, annotation: MetadataFeature) {
        self.metadata_features
            .insert(annotation.element.id.clone(), annotation);
    }

    /// Remove a metadata feature, returning it
    ///
    /// # Errors
    /// Returns `MetadataFeatureNotFound` if no annotation has the given id.
    pub fn remove_metadata_feature(&mut self, id: &str) -> Result<MetadataFeature> {
        self.metadata_features
            .remove(id)
            .ok_or_else(|| KermodError::MetadataFeatureNotFound {
                metadata_id: id.to_string(),
            })
    }

    /// List all metadata features
    pub fn list_metadata_features(&self) -> Vec<&MetadataFeature> {
        self.metadata_features.values().collect()
    }

    // ===== Packages =====

    /// Get a package by id
    ///
    /// # Errors
    /// Returns `PackageNotFound` if no package has the given id.
    pub fn get_package(&self, id: &str) -> Result<&Package> {
        self.packages
            .get(id)
            .ok_or_else(|| KermodError::PackageNotFound {
                package_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a package by id
    ///
    /// # Errors
    /// Returns `PackageNotFound` if no package has the given id.
    pub fn get_package_mut(&mut self, id: &str) -> Result<&mut Package> {
        self.packages
            .get_mut(id)
            .ok_or_else(|| KermodError::PackageNotFound {
                package_id: id.to_string(),
            })
    }

    /// Insert a package, replacing on duplicate id
    pub fn insert_package(&mut self, package: Package) {
        self.packages.insert(package.element.id.clone(), package);
    }

    /// Remove a package, returning it
    ///
    /// # Errors
    /// Returns `PackageNotFound` if no package has the given id.
    pub fn remove_package(&mut self, id: &str) -> Result<Package> {
        self.packages
            .remove(id)
            .ok_or_else(|| KermodError::PackageNotFound {
                package_id: id.to_string(),
            })
    }

    /// List all packages
    pub fn list_packages(&self) -> Vec<&Package> {
        self.packages.values().collect()
    }

    /// Check if a type exists
    pub fn type_exists(&self, id: &str) -> bool {
        self.types.contains_key(id)
    }

    /// Check if a feature exists free-standing or owned by any type
    pub fn feature_exists(&self, id: &str) -> bool {
        self.features.contains_key(id)
            || self
                .types
                .values()
                .any(|ty| ty.find_feature_by_id(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Specialization;

    #[test]
    fn test_new_store_is_empty() {
        let store = Store::new();
        assert!(store.list_types().is_empty());
        assert!(store.list_features().is_empty());
        assert!(store.list_relationships().is_empty());
    }

    #[test]
    fn test_insert_and_get_type() {
        let mut store = Store::new();
        store.insert_type(Type::new("t-1"));

        let retrieved = store.get_type("t-1").unwrap();
        assert_eq!(retrieved.id(), "t-1");
    }

    #[test]
    fn test_get_nonexistent_type() {
        let store = Store::new();
        let result = store.get_type("missing");
        assert!(matches!(result, Err(KermodError::TypeNotFound { .. })));
    }

    #[test]
    fn test_insert_replaces_on_duplicate_id() {
        let mut store = Store::new();
        store.insert_type(Type::new("t-1"));

        let mut renamed = Type::new("t-1");
        renamed.element.name = Some("Renamed".to_string());
        store.insert_type(renamed);

        assert_eq!(store.list_types().len(), 1);
        assert_eq!(
            store.get_type("t-1").unwrap().element.name.as_deref(),
            Some("Renamed")
        );
    }

    #[test]
    fn test_remove_type_returns_entity() {
        let mut store = Store::new();
        store.insert_type(Type::new("t-1"));

        let removed = store.remove_type("t-1").unwrap();
        assert_eq!(removed.id(), "t-1");
        assert!(store.remove_type("t-1").is_err());
    }

    #[test]
    fn test_feature_exists_sees_owned_features() {
        let mut store = Store::new();
        let mut ty = Type::new("t-1");
        ty.add_feature(Feature::new("f-owned"));
        store.insert_type(ty);
        store.insert_feature(Feature::new("f-free"));

        assert!(store.feature_exists("f-owned"));
        assert!(store.feature_exists("f-free"));
        assert!(!store.feature_exists("f-missing"));
    }

    #[test]
    fn test_relationship_round_trip_through_store() {
        let mut store = Store::new();
        store.insert_relationship(Specialization::new("s-1", "a", "b").into());

        assert_eq!(store.get_relationship("s-1").unwrap().kind_name(), "Specialization");
        let removed = store.remove_relationship("s-1").unwrap();
        assert_eq!(removed.id(), "s-1");
    }
}
