use tracing::debug;

use super::store::Store;
use crate::errors::Result;
use crate::model::{
    fresh_id, Element, FeatureValue, MetadataFeature, Model, Package,
};

/// Create a package and insert it into the store
pub fn create_package(store: &mut Store, id: Option<String>, name: Option<String>) -> String {
    let package_id = id.unwrap_or_else(fresh_id);

    let mut package = Package::new(package_id.clone());
    package.element.name = name;

    debug!(op = "create_package", package_id = %package_id, "package created");
    store.insert_package(package);

    package_id
}

/// Add a member element id to a package
///
/// # Errors
/// * `PackageNotFound` - If no package has the given id
pub fn add_package_member(store: &mut Store, package_id: &str, element_id: &str) -> Result<()> {
    let package = store.get_package_mut(package_id)?;
    package.add_member(element_id);
    debug!(op = "add_package_member", package_id = %package_id, element_id = %element_id, "member added");
    Ok(())
}

/// Add an import edge from one package to another
///
/// Import cycles are a validation-engine finding, not a structural error.
///
/// # Errors
/// * `PackageNotFound` - If no package has the given id
pub fn add_package_import(store: &mut Store, package_id: &str, imported_id: &str) -> Result<()> {
    let package = store.get_package_mut(package_id)?;
    package.add_import(imported_id);
    debug!(op = "add_package_import", package_id = %package_id, imported_id = %imported_id, "import added");
    Ok(())
}

/// Create a feature value binding
pub fn create_feature_value(
    store: &mut Store,
    id: Option<String>,
    feature_id: impl Into<String>,
    value: serde_json::Value,
) -> String {
    let value_id = id.unwrap_or_else(fresh_id);
    let binding = FeatureValue::new(value_id.clone(), feature_id, value);
    debug!(op = "create_feature_value", value_id = %value_id, "feature value created");
    store.insert_feature_value(binding);
    value_id
}

/// Create a metadata feature annotating the given element
pub fn create_metadata_feature(
    store: &mut Store,
    id: Option<String>,
    annotated_element_id: impl Into<String>,
) -> String {
    let metadata_id = id.unwrap_or_else(fresh_id);
    let annotation = MetadataFeature::new(metadata_id.clone(), annotated_element_id);
    debug!(op = "create_metadata_feature", metadata_id = %metadata_id, "metadata feature created");
    store.insert_metadata_feature(annotation);
    metadata_id
}

/// Assemble a model from the store's current contents
///
/// Collects every entity into the flat element array, sorted by id for
/// deterministic output, and records the given root packages. This is the
/// unit of work handed to the serialization contract.
pub fn collect_model(store: &Store, id: Option<String>, root_package_ids: Vec<String>) -> Model {
    let model_id = id.unwrap_or_else(fresh_id);
    let mut model = Model::new(model_id);
    for package_id in root_package_ids {
        model.add_root_package(package_id);
    }

    let mut elements: Vec<Element> = Vec::new();
    elements.extend(store.types.values().cloned().map(Element::Type));
    elements.extend(store.features.values().cloned().map(Element::Feature));
    elements.extend(
        store
            .multiplicities
            .values()
            .cloned()
            .map(Element::Multiplicity),
    );
    elements.extend(
        store
            .relationships
            .values()
            .cloned()
            .map(Element::Relationship),
    );
    elements.extend(store.operators.values().cloned().map(Element::Operator));
    elements.extend(store.feature_values.values().cloned().map(Element::Value));
    elements.extend(
        store
            .metadata_features
            .values()
            .cloned()
            .map(Element::Annotation),
    );
    elements.extend(store.packages.values().cloned().map(Element::Package));

    elements.sort_by(|a, b| a.id().cmp(b.id()));
    for element in elements {
        model.add_element(element);
    }

    debug!(op = "collect_model", model_id = %model.element.id, element_count = model.elements.len(), "model collected");
    model
}

/// Load a model's flat element array back into a fresh store
///
/// Elements are dispatched to their per-kind maps; later duplicates replace
/// earlier ones, mirroring store insert semantics.
pub fn store_from_model(model: &Model) -> Store {
    let mut store = Store::new();
    for element in &model.elements {
        match element.clone() {
            Element::Type(ty) => store.insert_type(ty),
            Element::Feature(feature) => store.insert_feature(feature),
            Element::Multiplicity(range) => store.insert_multiplicity(range),
            Element::Relationship(edge) => store.insert_relationship(edge),
            Element::Operator(operator) => store.insert_operator(operator),
            Element::Value(value) => store.insert_feature_value(value),
            Element::Annotation(annotation) => store.insert_metadata_feature(annotation),
            Element::Package(package) => store.insert_package(package),
        }
    }
    store
}
