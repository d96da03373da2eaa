//! Read-only validation input
//!
//! The engine consumes plain collections grouped by kind and has no
//! knowledge of how they were populated: build a [`ModelSnapshot`] by hand,
//! from a [`Store`], or from a [`Model`]'s flat element array.

use crate::model::{
    Element, Feature, Model, MultiplicityRange, Package, Relationship, Type, TypeOperator,
};
use crate::ops::Store;

/// A read-only view of the collections the validation engine inspects
///
/// Type-owned features are expected to appear in `features` alongside the
/// free-standing ones — the provided constructors flatten them in. Callers
/// assembling a snapshot by hand decide for themselves what the engine gets
/// to see.
#[derive(Debug, Default)]
pub struct ModelSnapshot<'a> {
    pub types: Vec<&'a Type>,
    pub features: Vec<&'a Feature>,
    pub multiplicities: Vec<&'a MultiplicityRange>,
    pub relationships: Vec<&'a Relationship>,
    pub operators: Vec<&'a TypeOperator>,
    pub packages: Vec<&'a Package>,
}

impl<'a> ModelSnapshot<'a> {
    /// Create an empty snapshot to be filled by hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a store's current contents, sorted by id for determinism
    pub fn from_store(store: &'a Store) -> Self {
        let mut snapshot = Self::new();

        snapshot.types = store.list_types();
        snapshot.types.sort_by(|a, b| a.id().cmp(b.id()));

        snapshot.features = store.list_features();
        for ty in &snapshot.types {
            snapshot.features.extend(ty.features.iter());
        }
        snapshot.features.sort_by(|a, b| a.id().cmp(b.id()));

        snapshot.multiplicities = store.list_multiplicities();
        snapshot.multiplicities.sort_by(|a, b| a.id().cmp(b.id()));

        snapshot.relationships = store.list_relationships();
        snapshot.relationships.sort_by(|a, b| a.id().cmp(b.id()));

        snapshot.operators = store.list_operators();
        snapshot.operators.sort_by(|a, b| a.id().cmp(b.id()));

        snapshot.packages = store.list_packages();
        snapshot.packages.sort_by(|a, b| a.id().cmp(b.id()));

        snapshot
    }

    /// Snapshot a model's flat element array, preserving its order
    pub fn from_model(model: &'a Model) -> Self {
        let mut snapshot = Self::new();

        for element in &model.elements {
            match element {
                Element::Type(ty) => {
                    snapshot.types.push(ty);
                    snapshot.features.extend(ty.features.iter());
                }
                Element::Feature(feature) => snapshot.features.push(feature),
                Element::Multiplicity(range) => snapshot.multiplicities.push(range),
                Element::Relationship(edge) => snapshot.relationships.push(edge),
                Element::Operator(operator) => snapshot.operators.push(operator),
                Element::Package(package) => snapshot.packages.push(package),
                Element::Value(_) | Element::Annotation(_) => {}
            }
        }

        snapshot
    }
}
