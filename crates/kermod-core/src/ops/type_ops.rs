use tracing::debug;

use super::store::Store;
use crate::errors::Result;
use crate::model::{fresh_id, Feature, Type, TypeKind};

/// Create a new type and insert it into the store
///
/// Assigns a fresh UUID v7 id when none is supplied.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `id` - Optional explicit id; generated when `None`
/// * `name` - Optional human-readable name
/// * `kind` - Concrete kind for the new type
///
/// # Returns
/// The id of the newly created type
pub fn create_type(
    store: &mut Store,
    id: Option<String>,
    name: Option<String>,
    kind: TypeKind,
) -> String {
    let type_id = id.unwrap_or_else(fresh_id);

    let mut ty = Type::with_kind(type_id.clone(), kind);
    ty.element.name = name;

    debug!(op = "create_type", type_id = %type_id, kind = ty.kind_name(), "type created");
    store.insert_type(ty);

    type_id
}

/// Read a type by id
///
/// # Errors
/// * `TypeNotFound` - If no type has the given id
pub fn read_type<'a>(store: &'a Store, id: &str) -> Result<&'a Type> {
    store.get_type(id)
}

/// Update a type's name and/or flags
///
/// Fields passed as `None` are left untouched.
///
/// # Errors
/// * `TypeNotFound` - If no type has the given id
pub fn update_type(
    store: &mut Store,
    id: &str,
    name: Option<String>,
    is_abstract: Option<bool>,
    is_conjugated: Option<bool>,
) -> Result<()> {
    let ty = store.get_type_mut(id)?;

    if let Some(new_name) = name {
        ty.element.name = Some(new_name);
    }
    if let Some(flag) = is_abstract {
        ty.is_abstract = flag;
    }
    if let Some(flag) = is_conjugated {
        ty.is_conjugated = flag;
    }

    debug!(op = "update_type", type_id = %id, "type updated");
    Ok(())
}

/// Delete a type from the store
///
/// Owned features are dropped with the type.
///
/// # Errors
/// * `TypeNotFound` - If no type has the given id
pub fn delete_type(store: &mut Store, id: &str) -> Result<Type> {
    let removed = store.remove_type(id)?;
    debug!(op = "delete_type", type_id = %id, "type deleted");
    Ok(removed)
}

/// Transfer a feature into a type's owned collection
///
/// The feature's owner id is overwritten with the type's id. If the feature
/// was free-standing in the store it is moved, not copied; if it was owned by
/// another type, the transfer is silent and the previous owner keeps its
/// stale entry until the caller removes it.
///
/// # Errors
/// * `TypeNotFound` - If no type has the given id
pub fn add_feature_to_type(store: &mut Store, type_id: &str, feature_id: &str) -> Result<()> {
    store.get_type(type_id)?;

    let feature = match store.remove_feature(feature_id) {
        Ok(f) => f,
        // Not free-standing: fall back to stealing from another type.
        Err(_) => {
            let mut stolen: Option<Feature> = None;
            for ty in store.types.values_mut() {
                if ty.element.id != type_id {
                    if let Some(found) = ty.find_feature_by_id(feature_id).cloned() {
                        ty.remove_feature(feature_id);
                        stolen = Some(found);
                        break;
                    }
                }
            }
            stolen.ok_or_else(|| crate::errors::KermodError::FeatureNotFound {
                feature_id: feature_id.to_string(),
            })?
        }
    };

    let ty = store.get_type_mut(type_id)?;
    ty.add_feature(feature);
    debug!(op = "add_feature_to_type", type_id = %type_id, feature_id = %feature_id, "feature attached");
    Ok(())
}

/// Remove an owned feature from a type, returning whether a match was found
///
/// The removed feature is dropped, not returned to the free-standing pool.
///
/// # Errors
/// * `TypeNotFound` - If no type has the given id
pub fn remove_feature_from_type(store: &mut Store, type_id: &str, feature_id: &str) -> Result<bool> {
    let ty = store.get_type_mut(type_id)?;
    let removed = ty.remove_feature(feature_id);
    debug!(op = "remove_feature_from_type", type_id = %type_id, feature_id = %feature_id, removed, "feature detached");
    Ok(removed)
}

/// Add a specialization target to a type
///
/// # Errors
/// * `TypeNotFound` - If no type has the given id
/// * `SelfSpecialization` - If the target is the type itself
pub fn add_specialization_target(store: &mut Store, type_id: &str, target_id: &str) -> Result<()> {
    let ty = store.get_type_mut(type_id)?;
    ty.add_specialization(target_id)?;
    debug!(op = "add_specialization_target", type_id = %type_id, target_id = %target_id, "specialization added");
    Ok(())
}
