//! Constraint check families
//!
//! One stateless function per constraint family, each taking a read-only
//! snapshot and returning structured findings. Nothing here mutates or
//! throws; a partially built model is always safe to check.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::issue::{ValidationCode, ValidationIssue};
use super::snapshot::ModelSnapshot;
use crate::model::Relationship;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Detect cycles in the specialization graph
///
/// Builds an adjacency map `specific → [general, …]` merged from the types'
/// inline specialization targets and the `Specialization` edges, then walks
/// it depth-first tracking the current path. Each distinct cycle is reported
/// once, with a message naming every type on the path. Shared-but-acyclic
/// ancestors (diamonds) are valid.
///
/// Direct self-specialization is reported as its own finding and excluded
/// from the walk.
pub fn check_specialization_cycles(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut nodes: BTreeSet<&str> = BTreeSet::new();

    for ty in &snapshot.types {
        for target in &ty.specializations {
            if target == ty.id() {
                issues.push(ValidationIssue::new(
                    ty.id(),
                    ty.kind_name(),
                    ValidationCode::SelfSpecialization,
                    format!("Type '{}' lists itself as a specialization target", ty.id()),
                ));
                continue;
            }
            let targets = adjacency.entry(ty.id()).or_default();
            if !targets.contains(&target.as_str()) {
                targets.push(target.as_str());
            }
            nodes.insert(ty.id());
            nodes.insert(target.as_str());
        }
    }

    for edge in &snapshot.relationships {
        if let Relationship::Specialization(spec) = edge {
            // Empty endpoints belong to the completeness check.
            if spec.specific.is_empty() || spec.general.is_empty() {
                continue;
            }
            if spec.specific == spec.general {
                issues.push(ValidationIssue::new(
                    spec.specific.as_str(),
                    "Type",
                    ValidationCode::SelfSpecialization,
                    format!(
                        "Specialization '{}' makes type '{}' specialize itself",
                        edge.id(),
                        spec.specific
                    ),
                ));
                continue;
            }
            let targets = adjacency.entry(spec.specific.as_str()).or_default();
            if !targets.contains(&spec.general.as_str()) {
                targets.push(spec.general.as_str());
            }
            nodes.insert(spec.specific.as_str());
            nodes.insert(spec.general.as_str());
        }
    }

    let mut color: HashMap<&str, Color> = HashMap::new();
    let mut path: Vec<&str> = Vec::new();
    for &node in &nodes {
        if color.get(node).copied().unwrap_or(Color::White) == Color::White {
            walk(node, &adjacency, &mut color, &mut path, &mut issues);
        }
    }

    issues
}

fn walk<'a>(
    node: &'a str,
    adjacency: &BTreeMap<&'a str, Vec<&'a str>>,
    color: &mut HashMap<&'a str, Color>,
    path: &mut Vec<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    color.insert(node, Color::Gray);
    path.push(node);

    if let Some(targets) = adjacency.get(node) {
        for &target in targets {
            match color.get(target).copied().unwrap_or(Color::White) {
                Color::Gray => {
                    // The target is on the current path: everything from its
                    // position onward forms the cycle.
                    let start = path
                        .iter()
                        .position(|&candidate| candidate == target)
                        .unwrap_or(0);
                    let mut members: Vec<&str> = path[start..].to_vec();
                    members.push(target);
                    issues.push(ValidationIssue::new(
                        target,
                        "Type",
                        ValidationCode::SpecializationCycle,
                        format!("Specialization cycle detected: {}", members.join(" -> ")),
                    ));
                }
                Color::White => walk(target, adjacency, color, path, issues),
                Color::Black => {}
            }
        }
    }

    path.pop();
    color.insert(node, Color::Black);
}

/// Check multiplicity range bounds
///
/// Flags a negative lower bound, and an upper bound below the lower bound
/// unless the upper bound is the unbounded sentinel.
pub fn check_multiplicity_bounds(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for range in &snapshot.multiplicities {
        if range.lower_bound < 0 {
            issues.push(ValidationIssue::new(
                range.id(),
                "MultiplicityRange",
                ValidationCode::InvalidLowerBound,
                format!("lower bound {} is negative", range.lower_bound),
            ));
        }
        if !range.is_unbounded() && range.upper_bound < range.lower_bound {
            issues.push(ValidationIssue::new(
                range.id(),
                "MultiplicityRange",
                ValidationCode::InvalidUpperBound,
                format!(
                    "upper bound {} is below lower bound {}",
                    range.upper_bound, range.lower_bound
                ),
            ));
        }
    }

    issues
}

/// Check type-operator operand arity
///
/// Union and Intersect require at least one operand; Difference requires
/// both of its named operands, each checked independently.
pub fn check_operator_arity(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for operator in &snapshot.operators {
        match operator {
            crate::model::TypeOperator::Union(union) => {
                if union.operands.is_empty() {
                    issues.push(ValidationIssue::new(
                        union.element.id.as_str(),
                        "Union",
                        ValidationCode::EmptyOperands,
                        "union has no operands",
                    ));
                }
            }
            crate::model::TypeOperator::Intersect(intersect) => {
                if intersect.operands.is_empty() {
                    issues.push(ValidationIssue::new(
                        intersect.element.id.as_str(),
                        "Intersect",
                        ValidationCode::EmptyOperands,
                        "intersect has no operands",
                    ));
                }
            }
            crate::model::TypeOperator::Difference(difference) => {
                if difference.first_operand.is_empty() {
                    issues.push(ValidationIssue::new(
                        difference.element.id.as_str(),
                        "Difference",
                        ValidationCode::MissingFirstOperand,
                        "difference is missing its first operand",
                    ));
                }
                if difference.second_operand.is_empty() {
                    issues.push(ValidationIssue::new(
                        difference.element.id.as_str(),
                        "Difference",
                        ValidationCode::MissingSecondOperand,
                        "difference is missing its second operand",
                    ));
                }
            }
        }
    }

    issues
}

/// Check relationship endpoint completeness
///
/// Every relationship edge must carry both endpoint ids; an empty endpoint
/// is flagged with its role name.
pub fn check_relationship_endpoints(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for edge in &snapshot.relationships {
        for (role, endpoint) in edge.endpoints() {
            if endpoint.is_empty() {
                issues.push(ValidationIssue::new(
                    edge.id(),
                    edge.kind_name(),
                    ValidationCode::MissingEndpoint,
                    format!(
                        "{} '{}' has an empty '{}' endpoint",
                        edge.kind_name(),
                        edge.id(),
                        role
                    ),
                ));
            }
        }
    }

    issues
}

/// Check feature flag compatibility
///
/// `is_composite` and `is_portion` are mutually exclusive; `is_end` requires
/// a non-empty type reference.
pub fn check_feature_flags(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for feature in &snapshot.features {
        if feature.is_composite && feature.is_portion {
            issues.push(ValidationIssue::new(
                feature.id(),
                feature.kind_name(),
                ValidationCode::IncompatibleFlags,
                format!(
                    "feature '{}' is both composite and portion",
                    feature.id()
                ),
            ));
        }
        let type_ref = feature.type_id.as_deref().unwrap_or("");
        if feature.is_end && type_ref.is_empty() {
            issues.push(ValidationIssue::new(
                feature.id(),
                feature.kind_name(),
                ValidationCode::MissingTypeReference,
                format!("end feature '{}' has no type reference", feature.id()),
            ));
        }
    }

    issues
}

/// Check type↔feature referential integrity
///
/// Flags a feature whose type reference resolves to no known type, and a
/// type owning a feature id absent from the known feature set.
pub fn check_referential_integrity(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let type_ids: HashSet<&str> = snapshot.types.iter().map(|ty| ty.id()).collect();
    let feature_ids: HashSet<&str> = snapshot.features.iter().map(|f| f.id()).collect();

    for feature in &snapshot.features {
        if let Some(type_ref) = feature.type_id.as_deref() {
            if !type_ref.is_empty() && !type_ids.contains(type_ref) {
                issues.push(ValidationIssue::new(
                    feature.id(),
                    feature.kind_name(),
                    ValidationCode::UnknownTypeReference,
                    format!(
                        "feature '{}' references unknown type '{}'",
                        feature.id(),
                        type_ref
                    ),
                ));
            }
        }
    }

    for ty in &snapshot.types {
        for feature in &ty.features {
            if !feature_ids.contains(feature.id()) {
                issues.push(ValidationIssue::new(
                    ty.id(),
                    ty.kind_name(),
                    ValidationCode::UnknownFeatureReference,
                    format!(
                        "type '{}' owns feature '{}' absent from the feature set",
                        ty.id(),
                        feature.id()
                    ),
                ));
            }
        }
    }

    issues
}

/// Check connector endpoint counts
///
/// Connector kinds are expected to connect at least two features.
pub fn check_connector_arity(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for feature in &snapshot.features {
        if feature.is_connector() && feature.connected_features().len() < 2 {
            issues.push(ValidationIssue::new(
                feature.id(),
                feature.kind_name(),
                ValidationCode::UndersizedConnector,
                format!(
                    "{} '{}' connects {} feature(s), expected at least 2",
                    feature.kind_name(),
                    feature.id(),
                    feature.connected_features().len()
                ),
            ));
        }
    }

    issues
}

/// Detect cycles in the package import graph
pub fn check_package_imports(snapshot: &ModelSnapshot) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut nodes: BTreeSet<&str> = BTreeSet::new();

    for package in &snapshot.packages {
        for import in &package.import_ids {
            let targets = adjacency.entry(package.id()).or_default();
            if !targets.contains(&import.as_str()) {
                targets.push(import.as_str());
            }
            nodes.insert(package.id());
            nodes.insert(import.as_str());
        }
    }

    let mut color: HashMap<&str, Color> = HashMap::new();
    let mut path: Vec<&str> = Vec::new();
    for &node in &nodes {
        if color.get(node).copied().unwrap_or(Color::White) == Color::White {
            walk_imports(node, &adjacency, &mut color, &mut path, &mut issues);
        }
    }

    issues
}

fn walk_imports<'a>(
    node: &'a str,
    adjacency: &BTreeMap<&'a str, Vec<&'a str>>,
    color: &mut HashMap<&'a str, Color>,
    path: &mut Vec<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    color.insert(node, Color::Gray);
    path.push(node);

    if let Some(targets) = adjacency.get(node) {
        for &target in targets {
            match color.get(target).copied().unwrap_or(Color::White) {
                Color::Gray => {
                    let start = path
                        .iter()
                        .position(|&candidate| candidate == target)
                        .unwrap_or(0);
                    let mut members: Vec<&str> = path[start..].to_vec();
                    members.push(target);
                    issues.push(ValidationIssue::new(
                        target,
                        "Package",
                        ValidationCode::PackageImportCycle,
                        format!("Package import cycle detected: {}", members.join(" -> ")),
                    ));
                }
                Color::White => walk_imports(target, adjacency, color, path, issues),
                Color::Black => {}
            }
        }
    }

    path.pop();
    color.insert(node, Color::Black);
}
