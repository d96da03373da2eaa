use tracing::debug;

use super::store::Store;
use crate::errors::Result;
use crate::model::{
    fresh_id, Conjugation, FeatureChaining, FeatureInverting, FeatureMembership, Relationship,
    Specialization, TypeFeaturing,
};

/// Create a specialization edge (`specific` is-a `general`)
///
/// Construction never fails on endpoint content: empty endpoints are a
/// validation-engine finding, not a structural error.
pub fn create_specialization(
    store: &mut Store,
    id: Option<String>,
    specific: impl Into<String>,
    general: impl Into<String>,
) -> String {
    let edge_id = id.unwrap_or_else(fresh_id);
    let edge = Specialization::new(edge_id.clone(), specific, general);
    insert_edge(store, edge.into());
    edge_id
}

/// Create a conjugation edge (`conjugated` conjugate-of `original`)
pub fn create_conjugation(
    store: &mut Store,
    id: Option<String>,
    original: impl Into<String>,
    conjugated: impl Into<String>,
) -> String {
    let edge_id = id.unwrap_or_else(fresh_id);
    let edge = Conjugation::new(edge_id.clone(), original, conjugated);
    insert_edge(store, edge.into());
    edge_id
}

/// Create a feature membership edge (`owning_type` owns `member_feature`)
pub fn create_feature_membership(
    store: &mut Store,
    id: Option<String>,
    owning_type: impl Into<String>,
    member_feature: impl Into<String>,
) -> String {
    let edge_id = id.unwrap_or_else(fresh_id);
    let edge = FeatureMembership::new(edge_id.clone(), owning_type, member_feature);
    insert_edge(store, edge.into());
    edge_id
}

/// Create a type featuring edge (`featured_type` featured by `featuring_type`)
pub fn create_type_featuring(
    store: &mut Store,
    id: Option<String>,
    featured_type: impl Into<String>,
    featuring_type: impl Into<String>,
) -> String {
    let edge_id = id.unwrap_or_else(fresh_id);
    let edge = TypeFeaturing::new(edge_id.clone(), featured_type, featuring_type);
    insert_edge(store, edge.into());
    edge_id
}

/// Create a feature chaining edge (`chaining_feature` chains `chained_feature`)
pub fn create_feature_chaining(
    store: &mut Store,
    id: Option<String>,
    chaining_feature: impl Into<String>,
    chained_feature: impl Into<String>,
) -> String {
    let edge_id = id.unwrap_or_else(fresh_id);
    let edge = FeatureChaining::new(edge_id.clone(), chaining_feature, chained_feature);
    insert_edge(store, edge.into());
    edge_id
}

/// Create a feature inverting edge
pub fn create_feature_inverting(
    store: &mut Store,
    id: Option<String>,
    featured_inverting: impl Into<String>,
    inverting_feature: impl Into<String>,
) -> String {
    let edge_id = id.unwrap_or_else(fresh_id);
    let edge = FeatureInverting::new(edge_id.clone(), featured_inverting, inverting_feature);
    insert_edge(store, edge.into());
    edge_id
}

/// Read a relationship edge by id
///
/// # Errors
/// * `RelationshipNotFound` - If no edge has the given id
pub fn read_relationship<'a>(store: &'a Store, id: &str) -> Result<&'a Relationship> {
    store.get_relationship(id)
}

/// Delete a relationship edge from the store
///
/// # Errors
/// * `RelationshipNotFound` - If no edge has the given id
pub fn delete_relationship(store: &mut Store, id: &str) -> Result<Relationship> {
    let removed = store.remove_relationship(id)?;
    debug!(op = "delete_relationship", relationship_id = %id, "relationship deleted");
    Ok(removed)
}

fn insert_edge(store: &mut Store, edge: Relationship) {
    debug!(op = "create_relationship", relationship_id = %edge.id(), kind = edge.kind_name(), "relationship created");
    store.insert_relationship(edge);
}
