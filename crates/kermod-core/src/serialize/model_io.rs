//! Model-level record conversion
//!
//! The root record of the wire format: a `Model` record carrying the shared
//! metadata, `rootPackageIds`, and the flat `elements` array of tagged
//! element records.

use serde_json::Value;
use tracing::debug;

use super::record::{deserialize_element, model_header_from_record, serialize_element};
use crate::errors::{KermodError, Result};
use crate::model::Model;

/// Produce the root record for a model
///
/// # Errors
/// Returns `Serialization` if JSON conversion fails for the model header or
/// any contained element.
pub fn serialize_model(model: &Model) -> Result<Value> {
    let mut record = serde_json::to_value(model)?;

    let mut elements = Vec::with_capacity(model.elements.len());
    for element in &model.elements {
        elements.push(serialize_element(element)?);
    }

    let object = record.as_object_mut().ok_or_else(|| KermodError::Serialization {
        reason: "model header did not serialize to an object".to_string(),
    })?;
    object.insert("__type".to_string(), Value::String("Model".to_string()));
    object.insert("elements".to_string(), Value::Array(elements));

    debug!(op = "serialize_model", model_id = %model.element.id, element_count = model.elements.len(), "model serialized");
    Ok(record)
}

/// Reconstruct a model from its root record
///
/// Elements are rebuilt in array order through the element contract; a
/// duplicate id later in the array replaces the earlier element, mirroring
/// `Model::add_element`.
///
/// # Errors
/// * `MissingField` - If `__type`, `elements`, or a required field is absent
/// * `UnknownElementKind` - If the root or any element carries an unknown
///   discriminator
/// * `Serialization` - If the record or its `elements` entry is malformed
pub fn deserialize_model(record: &Value) -> Result<Model> {
    let object = record.as_object().ok_or_else(|| KermodError::Serialization {
        reason: "record is not a JSON object".to_string(),
    })?;

    let kind = object
        .get("__type")
        .and_then(Value::as_str)
        .ok_or_else(|| KermodError::MissingField {
            field: "__type".to_string(),
        })?;
    if kind != "Model" {
        return Err(KermodError::UnknownElementKind {
            found: kind.to_string(),
        });
    }

    let mut model: Model = model_header_from_record(record)?;

    let elements = object
        .get("elements")
        .ok_or_else(|| KermodError::MissingField {
            field: "elements".to_string(),
        })?
        .as_array()
        .ok_or_else(|| KermodError::Serialization {
            reason: "elements is not an array".to_string(),
        })?;

    for element_record in elements {
        let element = deserialize_element(element_record)?;
        model.add_element(element);
    }

    debug!(op = "deserialize_model", model_id = %model.element.id, element_count = model.elements.len(), "model deserialized");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Element, Feature, Package, Type};
    use serde_json::json;

    fn sample_model() -> Model {
        let mut model = Model::new("m-1");
        model.add_root_package("p-1");

        let mut package = Package::new("p-1");
        package.add_member("t-1");
        model.add_element(Element::Package(package));

        let mut ty = Type::new("t-1");
        ty.add_feature(Feature::new("f-1"));
        model.add_element(Element::Type(ty));

        model
    }

    #[test]
    fn test_model_round_trip() {
        let model = sample_model();

        let record = serialize_model(&model).unwrap();
        assert_eq!(record["__type"], "Model");
        assert_eq!(record["rootPackageIds"][0], "p-1");
        assert_eq!(record["elements"].as_array().unwrap().len(), 2);

        let back = deserialize_model(&record).unwrap();
        assert_eq!(model, back);

        // Re-serializing the reconstruction reproduces the original record.
        let again = serialize_model(&back).unwrap();
        assert_eq!(record, again);
    }

    #[test]
    fn test_duplicate_element_ids_replace_in_array_order() {
        let model = sample_model();
        let mut record = serialize_model(&model).unwrap();

        let mut renamed = Type::new("t-1");
        renamed.element.name = Some("Renamed".to_string());
        let duplicate =
            super::super::record::serialize_element(&Element::Type(renamed)).unwrap();
        record["elements"].as_array_mut().unwrap().push(duplicate);

        let back = deserialize_model(&record).unwrap();
        assert_eq!(back.elements.len(), 2);
        assert_eq!(
            back.find_element("t-1").unwrap().element_data().name.as_deref(),
            Some("Renamed")
        );
    }

    #[test]
    fn test_root_record_must_be_a_model() {
        let record = json!({"__type": "Package", "id": "p-1",
            "memberIds": [], "importIds": []});
        let result = deserialize_model(&record);
        assert_eq!(
            result,
            Err(KermodError::UnknownElementKind {
                found: "Package".to_string()
            })
        );
    }

    #[test]
    fn test_missing_elements_is_typed_failure() {
        let record = json!({"__type": "Model", "id": "m-1", "rootPackageIds": []});
        let result = deserialize_model(&record);
        assert_eq!(
            result,
            Err(KermodError::MissingField {
                field: "elements".to_string()
            })
        );
    }

    #[test]
    fn test_bad_element_fails_whole_load() {
        let model = sample_model();
        let mut record = serialize_model(&model).unwrap();
        record["elements"]
            .as_array_mut()
            .unwrap()
            .push(json!({"__type": "Gizmo", "id": "g-1"}));

        let result = deserialize_model(&record);
        assert!(matches!(
            result,
            Err(KermodError::UnknownElementKind { .. })
        ));
    }
}
