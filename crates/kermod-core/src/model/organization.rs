//! Values and organization
//!
//! `FeatureValue` binds a value to a feature, `MetadataFeature` annotates an
//! arbitrary element, `Package` groups elements with an import graph, and
//! `Model` is the flat aggregation used as the serialization unit of work.

use serde::{Deserialize, Serialize};

use super::element::ElementData;
use super::metadata::Metadata;
use super::Element;

/// Binds a value to a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureValue {
    #[serde(flatten)]
    pub element: ElementData,

    /// Id of the feature being valued
    pub feature_id: String,

    /// The bound value
    pub value: serde_json::Value,
}

impl FeatureValue {
    pub fn new(
        id: impl Into<String>,
        feature_id: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            feature_id: feature_id.into(),
            value,
        }
    }

    pub fn id(&self) -> &str {
        &self.element.id
    }
}

/// Annotates an arbitrary element with extensible metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataFeature {
    #[serde(flatten)]
    pub element: ElementData,

    /// Id of the element being annotated
    pub annotated_element_id: String,

    /// Annotation payload
    pub metadata: Metadata,
}

impl MetadataFeature {
    pub fn new(id: impl Into<String>, annotated_element_id: impl Into<String>) -> Self {
        Self {
            element: ElementData::new(id),
            annotated_element_id: annotated_element_id.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.element.id
    }
}

/// A grouping of elements with import edges to other packages
///
/// The import graph is expected to be acyclic; the validation engine checks
/// this, the structure does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(flatten)]
    pub element: ElementData,

    /// Ids of member elements (deduplicated, insertion order)
    pub member_ids: Vec<String>,

    /// Ids of imported packages (deduplicated, insertion order)
    pub import_ids: Vec<String>,
}

impl Package {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            element: ElementData::new(id),
            member_ids: Vec::new(),
            import_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.element.id
    }

    /// Add a member element id, skipping duplicates
    pub fn add_member(&mut self, element_id: impl Into<String>) {
        let element_id = element_id.into();
        if !self.member_ids.contains(&element_id) {
            self.member_ids.push(element_id);
        }
    }

    /// Remove a member element id, returning whether it was present
    pub fn remove_member(&mut self, element_id: &str) -> bool {
        let before = self.member_ids.len();
        self.member_ids.retain(|id| id != element_id);
        self.member_ids.len() != before
    }

    /// Add an imported package id, skipping duplicates
    pub fn add_import(&mut self, package_id: impl Into<String>) {
        let package_id = package_id.into();
        if !self.import_ids.contains(&package_id) {
            self.import_ids.push(package_id);
        }
    }

    /// Remove an imported package id, returning whether it was present
    pub fn remove_import(&mut self, package_id: &str) -> bool {
        let before = self.import_ids.len();
        self.import_ids.retain(|id| id != package_id);
        self.import_ids.len() != before
    }
}

/// The flat aggregation of a whole model: root packages plus every element
///
/// `elements` is the serialization unit of work. It is kept out of the serde
/// derive because elements are written through the serialization contract in
/// [`crate::serialize`], which owns the tagged record dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(flatten)]
    pub element: ElementData,

    /// Ids of the root packages
    pub root_package_ids: Vec<String>,

    /// Flat element array; add replaces on duplicate id
    #[serde(skip)]
    pub elements: Vec<Element>,
}

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            element: ElementData::new(id),
            root_package_ids: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.element.id
    }

    /// Add a root package id, skipping duplicates
    pub fn add_root_package(&mut self, package_id: impl Into<String>) {
        let package_id = package_id.into();
        if !self.root_package_ids.contains(&package_id) {
            self.root_package_ids.push(package_id);
        }
    }

    /// Add an element, replacing any existing element with the same id
    pub fn add_element(&mut self, element: Element) {
        if let Some(existing) = self
            .elements
            .iter_mut()
            .find(|e| e.id() == element.id())
        {
            *existing = element;
        } else {
            self.elements.push(element);
        }
    }

    /// Remove an element by id, returning whether a match was found
    pub fn remove_element(&mut self, element_id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id() != element_id);
        self.elements.len() != before
    }

    /// Linear lookup of an element by id
    pub fn find_element(&self, element_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == element_id)
    }
}
