//! Element-level record conversion
//!
//! Every element serializes to a tagged record: a JSON object carrying a
//! `__type` discriminator naming the concrete kind, the shared metadata
//! fields, and the kind-specific fields. `Type` records embed their
//! directly-owned features inline.
//!
//! Failures are typed: an unrecognized discriminator or a record missing a
//! required field is reported to the caller, and no partially-built element
//! ever escapes.

use serde_json::Value;

use crate::errors::{KermodError, Result};
use crate::model::{
    Element, Feature, FeatureValue, MetadataFeature, Model, MultiplicityRange, Package,
    Relationship, Type, TypeOperator,
};

/// Produce the portable record for an element
///
/// # Errors
/// Returns `Serialization` if JSON conversion fails.
pub fn serialize_element(element: &Element) -> Result<Value> {
    let mut record = match element {
        Element::Type(ty) => serde_json::to_value(ty)?,
        Element::Feature(feature) => serde_json::to_value(feature)?,
        Element::Multiplicity(range) => serde_json::to_value(range)?,
        Element::Relationship(edge) => serde_json::to_value(edge)?,
        Element::Operator(operator) => serde_json::to_value(operator)?,
        Element::Value(value) => serde_json::to_value(value)?,
        Element::Annotation(annotation) => serde_json::to_value(annotation)?,
        Element::Package(package) => serde_json::to_value(package)?,
    };

    // Kinds without an embedded tag get the discriminator stamped here.
    if let Some(object) = record.as_object_mut() {
        if !object.contains_key("__type") {
            object.insert(
                "__type".to_string(),
                Value::String(element.kind_name().to_string()),
            );
        }
    }

    Ok(record)
}

/// Reconstruct an element from its portable record
///
/// # Errors
/// * `MissingField` - If `__type` or any required field is absent
/// * `UnknownElementKind` - If the discriminator names no known kind
/// * `Serialization` - If the record is not an object or is otherwise malformed
pub fn deserialize_element(record: &Value) -> Result<Element> {
    if !record.is_object() {
        return Err(KermodError::Serialization {
            reason: "record is not a JSON object".to_string(),
        });
    }

    let kind = record
        .get("__type")
        .and_then(Value::as_str)
        .ok_or_else(|| KermodError::MissingField {
            field: "__type".to_string(),
        })?;

    let element = match kind {
        "Type" | "Classifier" | "DataType" | "Class" | "Structure" | "Association"
        | "Behavior" | "Function" | "Expression" | "Predicate" | "Interaction" => {
            Element::Type(serde_json::from_value::<Type>(record.clone())?)
        }
        "Feature" | "Step" | "Connector" | "BindingConnector" | "Succession" | "ItemFlow"
        | "SuccessionItemFlow" => {
            Element::Feature(serde_json::from_value::<Feature>(record.clone())?)
        }
        "Specialization" | "Conjugation" | "FeatureMembership" | "TypeFeaturing"
        | "FeatureChaining" | "FeatureInverting" => {
            Element::Relationship(serde_json::from_value::<Relationship>(record.clone())?)
        }
        "Union" | "Intersect" | "Difference" => {
            Element::Operator(serde_json::from_value::<TypeOperator>(record.clone())?)
        }
        "MultiplicityRange" => {
            Element::Multiplicity(serde_json::from_value::<MultiplicityRange>(record.clone())?)
        }
        "FeatureValue" => Element::Value(serde_json::from_value::<FeatureValue>(record.clone())?),
        "MetadataFeature" => {
            Element::Annotation(serde_json::from_value::<MetadataFeature>(record.clone())?)
        }
        "Package" => Element::Package(serde_json::from_value::<Package>(record.clone())?),
        other => {
            return Err(KermodError::UnknownElementKind {
                found: other.to_string(),
            })
        }
    };

    Ok(element)
}

/// Reconstruct an element, re-parenting already-built children
///
/// After the element is rebuilt from the record, any `children` that are
/// features whose `owner_id` equals the new element's id are appended to its
/// owned collection (after the record's inline features, skipping ids that
/// are already present). Children with a different owner are ignored.
///
/// # Errors
/// Same failure modes as [`deserialize_element`].
pub fn deserialize_element_with_children(
    record: &Value,
    children: Vec<Element>,
) -> Result<Element> {
    let mut element = deserialize_element(record)?;

    if let Element::Type(ty) = &mut element {
        for child in children {
            if let Element::Feature(feature) = child {
                let owned_here = feature.element.owner_id.as_deref() == Some(ty.id());
                if owned_here && ty.find_feature_by_id(feature.id()).is_none() {
                    ty.features.push(feature);
                }
            }
        }
    }

    Ok(element)
}

/// Reconstruct a model's shared metadata and root package ids
///
/// Used by [`super::model_io`]; the flat element array travels separately.
pub(crate) fn model_header_from_record(record: &Value) -> Result<Model> {
    Ok(serde_json::from_value::<Model>(record.clone())?)
}
