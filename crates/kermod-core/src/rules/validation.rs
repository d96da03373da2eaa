//! Aggregate validation entry points
//!
//! Runs every constraint family over one model snapshot and concatenates the
//! findings. Family order is fixed by invocation; within a family, findings
//! follow snapshot order. The concatenation order is not itself a contract.

use kermod_core_types::schema;
use tracing::info;

use super::invariants;
use super::issue::ValidationIssue;
use super::snapshot::ModelSnapshot;
use crate::model::Model;
use crate::ops::Store;

/// Validate a snapshot against every constraint family
///
/// Pure and side-effect-free: the snapshot is read, never mutated, and
/// findings are returned, never thrown. Safe to call on an inconsistent or
/// partially built model.
pub fn validate_snapshot(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    issues.extend(invariants::check_specialization_cycles(snapshot));
    issues.extend(invariants::check_multiplicity_bounds(snapshot));
    issues.extend(invariants::check_operator_arity(snapshot));
    issues.extend(invariants::check_relationship_endpoints(snapshot));
    issues.extend(invariants::check_feature_flags(snapshot));
    issues.extend(invariants::check_referential_integrity(snapshot));
    issues.extend(invariants::check_connector_arity(snapshot));
    issues.extend(invariants::check_package_imports(snapshot));

    info!(
        op = "validate_snapshot",
        event = schema::EVENT_END,
        issue_count = issues.len(),
        "validation completed"
    );
    issues
}

/// Validate a model's flat element array
pub fn validate_model(model: &Model) -> Vec<ValidationIssue> {
    validate_snapshot(&ModelSnapshot::from_model(model))
}

/// Validate a store's current contents
pub fn validate_store(store: &Store) -> Vec<ValidationIssue> {
    validate_snapshot(&ModelSnapshot::from_store(store))
}
