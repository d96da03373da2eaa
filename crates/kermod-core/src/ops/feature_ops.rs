use tracing::debug;

use super::store::Store;
use crate::errors::Result;
use crate::model::{fresh_id, Direction, Feature, FeatureKind};

/// Create a new free-standing feature and insert it into the store
///
/// Assigns a fresh UUID v7 id when none is supplied. The feature stays
/// free-standing until [`super::type_ops::add_feature_to_type`] transfers it
/// into an owning type.
pub fn create_feature(
    store: &mut Store,
    id: Option<String>,
    name: Option<String>,
    kind: FeatureKind,
) -> String {
    let feature_id = id.unwrap_or_else(fresh_id);

    let mut feature = Feature::with_kind(feature_id.clone(), kind);
    feature.element.name = name;

    debug!(op = "create_feature", feature_id = %feature_id, kind = feature.kind_name(), "feature created");
    store.insert_feature(feature);

    feature_id
}

/// Read a free-standing feature by id
///
/// # Errors
/// * `FeatureNotFound` - If no free-standing feature has the given id
pub fn read_feature<'a>(store: &'a Store, id: &str) -> Result<&'a Feature> {
    store.get_feature(id)
}

/// Update a free-standing feature's flags, direction, and type reference
///
/// Fields passed as `None` are left untouched; `type_id` and `direction` use
/// a double-`Option` so callers can clear them explicitly.
///
/// # Errors
/// * `FeatureNotFound` - If no free-standing feature has the given id
#[allow(clippy::too_many_arguments)]
pub fn update_feature(
    store: &mut Store,
    id: &str,
    name: Option<String>,
    is_composite: Option<bool>,
    is_portion: Option<bool>,
    is_end: Option<bool>,
    direction: Option<Option<Direction>>,
    type_id: Option<Option<String>>,
) -> Result<()> {
    let feature = store.get_feature_mut(id)?;

    if let Some(new_name) = name {
        feature.element.name = Some(new_name);
    }
    if let Some(flag) = is_composite {
        feature.is_composite = flag;
    }
    if let Some(flag) = is_portion {
        feature.is_portion = flag;
    }
    if let Some(flag) = is_end {
        feature.is_end = flag;
    }
    if let Some(new_direction) = direction {
        feature.direction = new_direction;
    }
    if let Some(new_type_id) = type_id {
        feature.type_id = new_type_id;
    }

    debug!(op = "update_feature", feature_id = %id, "feature updated");
    Ok(())
}

/// Delete a free-standing feature from the store
///
/// # Errors
/// * `FeatureNotFound` - If no free-standing feature has the given id
pub fn delete_feature(store: &mut Store, id: &str) -> Result<Feature> {
    let removed = store.remove_feature(id)?;
    debug!(op = "delete_feature", feature_id = %id, "feature deleted");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_read_feature() {
        let mut store = Store::new();
        let id = create_feature(
            &mut store,
            None,
            Some("wheel".to_string()),
            FeatureKind::Feature,
        );

        let feature = read_feature(&store, &id).unwrap();
        assert_eq!(feature.element.name.as_deref(), Some("wheel"));
        assert_eq!(feature.kind_name(), "Feature");
    }

    #[test]
    fn test_update_feature_clears_type_reference() {
        let mut store = Store::new();
        let id = create_feature(&mut store, Some("f-1".to_string()), None, FeatureKind::Feature);

        update_feature(
            &mut store,
            &id,
            None,
            None,
            None,
            Some(true),
            Some(Some(Direction::In)),
            Some(Some("t-1".to_string())),
        )
        .unwrap();

        let feature = read_feature(&store, &id).unwrap();
        assert!(feature.is_end);
        assert_eq!(feature.type_id.as_deref(), Some("t-1"));
        assert_eq!(feature.direction, Some(Direction::In));

        update_feature(&mut store, &id, None, None, None, None, None, Some(None)).unwrap();
        assert!(read_feature(&store, &id).unwrap().type_id.is_none());
    }

    #[test]
    fn test_delete_feature() {
        let mut store = Store::new();
        create_feature(&mut store, Some("f-1".to_string()), None, FeatureKind::Step);

        let removed = delete_feature(&mut store, "f-1").unwrap();
        assert_eq!(removed.kind_name(), "Step");
        assert!(delete_feature(&mut store, "f-1").is_err());
    }
}
