use tracing::debug;

use super::store::Store;
use crate::errors::{KermodError, Result};
use crate::model::{fresh_id, DifferenceType, IntersectType, TypeOperator, UnionType};

/// Create a union operator with the given operands
pub fn create_union(store: &mut Store, id: Option<String>, operands: Vec<String>) -> String {
    let operator_id = id.unwrap_or_else(fresh_id);
    let mut union = UnionType::new(operator_id.clone());
    for operand in operands {
        union.add_operand(operand);
    }
    debug!(op = "create_union", operator_id = %operator_id, "union created");
    store.insert_operator(union.into());
    operator_id
}

/// Create an intersect operator with the given operands
pub fn create_intersect(store: &mut Store, id: Option<String>, operands: Vec<String>) -> String {
    let operator_id = id.unwrap_or_else(fresh_id);
    let mut intersect = IntersectType::new(operator_id.clone());
    for operand in operands {
        intersect.add_operand(operand);
    }
    debug!(op = "create_intersect", operator_id = %operator_id, "intersect created");
    store.insert_operator(intersect.into());
    operator_id
}

/// Create a difference operator with its two named operands
pub fn create_difference(
    store: &mut Store,
    id: Option<String>,
    first_operand: impl Into<String>,
    second_operand: impl Into<String>,
) -> String {
    let operator_id = id.unwrap_or_else(fresh_id);
    let difference = DifferenceType::new(operator_id.clone(), first_operand, second_operand);
    debug!(op = "create_difference", operator_id = %operator_id, "difference created");
    store.insert_operator(difference.into());
    operator_id
}

/// Append an operand to a union or intersect operator
///
/// # Errors
/// * `OperatorNotFound` - If no operator has the given id
/// * `UnsupportedKind` - If the operator is a difference
pub fn add_operand(store: &mut Store, operator_id: &str, operand: impl Into<String>) -> Result<()> {
    match store.get_operator_mut(operator_id)? {
        TypeOperator::Union(union) => {
            union.add_operand(operand);
            Ok(())
        }
        TypeOperator::Intersect(intersect) => {
            intersect.add_operand(operand);
            Ok(())
        }
        TypeOperator::Difference(_) => Err(KermodError::UnsupportedKind {
            op: "add_operand".to_string(),
            kind: "Difference".to_string(),
        }),
    }
}

/// Remove an operand from a union or intersect operator
///
/// # Errors
/// * `OperatorNotFound` - If no operator has the given id
/// * `UnsupportedKind` - If the operator is a difference
pub fn remove_operand(store: &mut Store, operator_id: &str, operand: &str) -> Result<bool> {
    match store.get_operator_mut(operator_id)? {
        TypeOperator::Union(union) => Ok(union.remove_operand(operand)),
        TypeOperator::Intersect(intersect) => Ok(intersect.remove_operand(operand)),
        TypeOperator::Difference(_) => Err(KermodError::UnsupportedKind {
            op: "remove_operand".to_string(),
            kind: "Difference".to_string(),
        }),
    }
}

/// Replace both operands of a difference operator atomically
///
/// # Errors
/// * `OperatorNotFound` - If no operator has the given id
/// * `UnsupportedKind` - If the operator is not a difference
pub fn update_difference_operands(
    store: &mut Store,
    operator_id: &str,
    first_operand: impl Into<String>,
    second_operand: impl Into<String>,
) -> Result<()> {
    match store.get_operator_mut(operator_id)? {
        TypeOperator::Difference(difference) => {
            difference.update_operands(first_operand, second_operand);
            Ok(())
        }
        other => Err(KermodError::UnsupportedKind {
            op: "update_difference_operands".to_string(),
            kind: other.kind_name().to_string(),
        }),
    }
}

/// Delete a type operator from the store
///
/// # Errors
/// * `OperatorNotFound` - If no operator has the given id
pub fn delete_operator(store: &mut Store, id: &str) -> Result<TypeOperator> {
    let removed = store.remove_operator(id)?;
    debug!(op = "delete_operator", operator_id = %id, "operator deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_union_deduplicates_operands() {
        let mut store = Store::new();
        let id = create_union(
            &mut store,
            None,
            vec!["t-1".to_string(), "t-2".to_string(), "t-1".to_string()],
        );

        match store.get_operator(&id).unwrap() {
            TypeOperator::Union(union) => assert_eq!(union.operands, ["t-1", "t-2"]),
            other => panic!("expected union, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_add_and_remove_operand() {
        let mut store = Store::new();
        let id = create_intersect(&mut store, Some("i-1".to_string()), vec![]);

        add_operand(&mut store, &id, "t-1").unwrap();
        assert!(remove_operand(&mut store, &id, "t-1").unwrap());
        assert!(!remove_operand(&mut store, &id, "t-1").unwrap());
    }

    #[test]
    fn test_operand_ops_rejected_for_difference() {
        let mut store = Store::new();
        let id = create_difference(&mut store, None, "t-1", "t-2");

        assert!(matches!(
            add_operand(&mut store, &id, "t-3"),
            Err(KermodError::UnsupportedKind { .. })
        ));
    }

    #[test]
    fn test_update_difference_operands() {
        let mut store = Store::new();
        let id = create_difference(&mut store, None, "t-1", "t-2");

        update_difference_operands(&mut store, &id, "t-3", "t-4").unwrap();
        match store.get_operator(&id).unwrap() {
            TypeOperator::Difference(diff) => {
                assert_eq!(diff.first_operand, "t-3");
                assert_eq!(diff.second_operand, "t-4");
            }
            other => panic!("expected difference, got {}", other.kind_name()),
        }
    }
}
