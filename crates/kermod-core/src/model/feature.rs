//! Feature domain model
//!
//! A `Feature` is a typed, ownable property or role attached to a type. The
//! original connector chain (Feature → Connector → Succession → …) is
//! flattened into [`FeatureKind`], a tagged variant carried by the flat
//! `Feature` struct, so serialization stays exhaustive over one
//! discriminator.

use serde::{Deserialize, Serialize};

use super::element::ElementData;
use crate::errors::{KermodError, Result};

/// Direction of a feature relative to its owning type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
    Inout,
}

/// Endpoint list shared by all connector kinds
///
/// At least two connected features are expected by convention; the validation
/// engine enforces this, construction does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorProps {
    /// Ordered, deduplicated ids of the connected features
    pub connected_features: Vec<String>,
}

/// Succession payload: connector endpoints plus effect/guard free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuccessionProps {
    #[serde(flatten)]
    pub connector: ConnectorProps,

    /// Free-text effect fired when the succession occurs
    pub effect: Option<String>,

    /// Free-text guard constraining when the succession may occur
    pub guard: Option<String>,
}

/// Item flow payload: connector endpoints plus the flowing item's type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ItemFlowProps {
    #[serde(flatten)]
    pub connector: ConnectorProps,

    /// Reference to the type of the items carried by the flow
    pub item_type: Option<String>,
}

/// Succession item flow payload: succession fields plus the item's type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SuccessionItemFlowProps {
    #[serde(flatten)]
    pub succession: SuccessionProps,

    /// Reference to the type of the items carried by the flow
    pub item_type: Option<String>,
}

/// Concrete kind of a feature, carrying kind-specific payload fields
///
/// The `__type` tag doubles as the wire discriminator for the portable
/// record format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type")]
pub enum FeatureKind {
    Feature,
    Step,
    Connector(ConnectorProps),
    BindingConnector(ConnectorProps),
    Succession(SuccessionProps),
    ItemFlow(ItemFlowProps),
    SuccessionItemFlow(SuccessionItemFlowProps),
}

impl Default for FeatureKind {
    fn default() -> Self {
        FeatureKind::Feature
    }
}

/// A typed, ownable property attached to a type
///
/// Features are types themselves in the source metamodel; the type-level
/// slots that survive the flattening are `specializations` and
/// `multiplicity`. `type_id` references the feature's own type and is
/// distinct from specialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(flatten)]
    pub element: ElementData,

    /// Ids of the types this feature specializes
    pub specializations: Vec<String>,

    /// Optional multiplicity expression (e.g. "0..*")
    pub multiplicity: Option<String>,

    pub is_unique: bool,
    pub is_ordered: bool,
    pub is_composite: bool,
    pub is_portion: bool,
    pub is_read_only: bool,
    pub is_derived: bool,
    pub is_end: bool,

    /// Direction relative to the owning type
    pub direction: Option<Direction>,

    /// Reference to the feature's own type
    pub type_id: Option<String>,

    /// Ids of the features this feature redefines
    pub redefinitions: Vec<String>,

    #[serde(flatten)]
    pub kind: FeatureKind,
}

impl Feature {
    /// Create a plain feature with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_kind(id, FeatureKind::Feature)
    }

    /// Create a feature of the given concrete kind
    pub fn with_kind(id: impl Into<String>, kind: FeatureKind) -> Self {
        Self {
            element: ElementData::new(id),
            specializations: Vec::new(),
            multiplicity: None,
            is_unique: true,
            is_ordered: false,
            is_composite: false,
            is_portion: false,
            is_read_only: false,
            is_derived: false,
            is_end: false,
            direction: None,
            type_id: None,
            redefinitions: Vec::new(),
            kind,
        }
    }

    /// The feature's id
    pub fn id(&self) -> &str {
        &self.element.id
    }

    /// Wire discriminator for this feature's concrete kind
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            FeatureKind::Feature => "Feature",
            FeatureKind::Step => "Step",
            FeatureKind::Connector(_) => "Connector",
            FeatureKind::BindingConnector(_) => "BindingConnector",
            FeatureKind::Succession(_) => "Succession",
            FeatureKind::ItemFlow(_) => "ItemFlow",
            FeatureKind::SuccessionItemFlow(_) => "SuccessionItemFlow",
        }
    }

    /// Whether this feature is one of the connector kinds
    pub fn is_connector(&self) -> bool {
        self.connector().is_some()
    }

    /// Add a specialization target, preserving order and skipping duplicates
    ///
    /// # Errors
    /// Returns `SelfSpecialization` if the target is the feature itself.
    pub fn add_specialization(&mut self, target_id: impl Into<String>) -> Result<()> {
        let target_id = target_id.into();
        if target_id == self.element.id {
            return Err(KermodError::SelfSpecialization {
                type_id: self.element.id.clone(),
            });
        }
        if !self.specializations.contains(&target_id) {
            self.specializations.push(target_id);
        }
        Ok(())
    }

    /// Remove a specialization target, returning whether it was present
    pub fn remove_specialization(&mut self, target_id: &str) -> bool {
        let before = self.specializations.len();
        self.specializations.retain(|id| id != target_id);
        self.specializations.len() != before
    }

    /// Add a redefinition reference, preserving order and skipping duplicates
    pub fn add_redefinition(&mut self, feature_id: impl Into<String>) {
        let feature_id = feature_id.into();
        if !self.redefinitions.contains(&feature_id) {
            self.redefinitions.push(feature_id);
        }
    }

    /// Remove a redefinition reference, returning whether it was present
    pub fn remove_redefinition(&mut self, feature_id: &str) -> bool {
        let before = self.redefinitions.len();
        self.redefinitions.retain(|id| id != feature_id);
        self.redefinitions.len() != before
    }

    /// Connect a feature id to this connector's endpoint list
    ///
    /// The endpoint list stays ordered and deduplicated.
    ///
    /// # Errors
    /// Returns `UnsupportedKind` for non-connector kinds.
    pub fn connect(&mut self, feature_id: impl Into<String>) -> Result<()> {
        let kind = self.kind_name();
        let Some(props) = self.connector_mut() else {
            return Err(KermodError::UnsupportedKind {
                op: "connect".to_string(),
                kind: kind.to_string(),
            });
        };
        let feature_id = feature_id.into();
        if !props.connected_features.contains(&feature_id) {
            props.connected_features.push(feature_id);
        }
        Ok(())
    }

    /// Disconnect a feature id, returning whether it was present
    ///
    /// # Errors
    /// Returns `UnsupportedKind` for non-connector kinds.
    pub fn disconnect(&mut self, feature_id: &str) -> Result<bool> {
        let kind = self.kind_name();
        let Some(props) = self.connector_mut() else {
            return Err(KermodError::UnsupportedKind {
                op: "disconnect".to_string(),
                kind: kind.to_string(),
            });
        };
        let before = props.connected_features.len();
        props.connected_features.retain(|id| id != feature_id);
        Ok(props.connected_features.len() != before)
    }

    /// The connector endpoint list; empty for non-connector kinds
    pub fn connected_features(&self) -> &[String] {
        self.connector()
            .map(|props| props.connected_features.as_slice())
            .unwrap_or(&[])
    }

    /// Succession effect text, if this kind carries one
    pub fn effect(&self) -> Option<&str> {
        match &self.kind {
            FeatureKind::Succession(props) => props.effect.as_deref(),
            FeatureKind::SuccessionItemFlow(props) => props.succession.effect.as_deref(),
            _ => None,
        }
    }

    /// Succession guard text, if this kind carries one
    pub fn guard(&self) -> Option<&str> {
        match &self.kind {
            FeatureKind::Succession(props) => props.guard.as_deref(),
            FeatureKind::SuccessionItemFlow(props) => props.succession.guard.as_deref(),
            _ => None,
        }
    }

    /// Item type reference, if this kind carries one
    pub fn item_type(&self) -> Option<&str> {
        match &self.kind {
            FeatureKind::ItemFlow(props) => props.item_type.as_deref(),
            FeatureKind::SuccessionItemFlow(props) => props.item_type.as_deref(),
            _ => None,
        }
    }

    fn connector(&self) -> Option<&ConnectorProps> {
        match &self.kind {
            FeatureKind::Connector(props) | FeatureKind::BindingConnector(props) => Some(props),
            FeatureKind::Succession(props) => Some(&props.connector),
            FeatureKind::ItemFlow(props) => Some(&props.connector),
            FeatureKind::SuccessionItemFlow(props) => Some(&props.succession.connector),
            FeatureKind::Feature | FeatureKind::Step => None,
        }
    }

    fn connector_mut(&mut self) -> Option<&mut ConnectorProps> {
        match &mut self.kind {
            FeatureKind::Connector(props) | FeatureKind::BindingConnector(props) => Some(props),
            FeatureKind::Succession(props) => Some(&mut props.connector),
            FeatureKind::ItemFlow(props) => Some(&mut props.connector),
            FeatureKind::SuccessionItemFlow(props) => Some(&mut props.succession.connector),
            FeatureKind::Feature | FeatureKind::Step => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_feature_defaults() {
        let feature = Feature::new("f-1");

        assert_eq!(feature.id(), "f-1");
        assert_eq!(feature.kind_name(), "Feature");
        assert!(feature.is_unique);
        assert!(!feature.is_ordered);
        assert!(!feature.is_composite);
        assert!(!feature.is_end);
        assert!(feature.type_id.is_none());
        assert!(feature.direction.is_none());
        assert!(!feature.is_connector());
        assert!(feature.connected_features().is_empty());
    }

    #[test]
    fn test_connect_deduplicates_and_preserves_order() {
        let mut connector = Feature::with_kind("c-1", FeatureKind::Connector(Default::default()));

        connector.connect("f-1").unwrap();
        connector.connect("f-2").unwrap();
        connector.connect("f-1").unwrap();

        assert_eq!(connector.connected_features(), ["f-1", "f-2"]);

        assert!(connector.disconnect("f-1").unwrap());
        assert!(!connector.disconnect("f-1").unwrap());
        assert_eq!(connector.connected_features(), ["f-2"]);
    }

    #[test]
    fn test_connect_rejected_for_plain_feature() {
        let mut feature = Feature::new("f-1");
        let result = feature.connect("f-2");
        assert!(matches!(result, Err(KermodError::UnsupportedKind { .. })));
    }

    #[test]
    fn test_self_specialization_rejected() {
        let mut feature = Feature::new("f-1");
        let result = feature.add_specialization("f-1");
        assert!(matches!(
            result,
            Err(KermodError::SelfSpecialization { .. })
        ));
        assert!(feature.specializations.is_empty());
    }

    #[test]
    fn test_succession_item_flow_accessors() {
        let mut props = SuccessionItemFlowProps::default();
        props.succession.effect = Some("notify".to_string());
        props.succession.guard = Some("ready".to_string());
        props.item_type = Some("t-water".to_string());
        let flow = Feature::with_kind("s-1", FeatureKind::SuccessionItemFlow(props));

        assert_eq!(flow.kind_name(), "SuccessionItemFlow");
        assert_eq!(flow.effect(), Some("notify"));
        assert_eq!(flow.guard(), Some("ready"));
        assert_eq!(flow.item_type(), Some("t-water"));
    }

    #[test]
    fn test_wire_shape_carries_discriminator() {
        let mut connector = Feature::with_kind("c-1", FeatureKind::Connector(Default::default()));
        connector.connect("f-1").unwrap();

        let value = serde_json::to_value(&connector).unwrap();
        assert_eq!(value["__type"], "Connector");
        assert_eq!(value["connectedFeatures"][0], "f-1");
        assert_eq!(value["isUnique"], true);
        assert_eq!(value["id"], "c-1");
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let mut feature = Feature::new("f-1");
        feature.direction = Some(Direction::Inout);
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(value["direction"], "inout");
    }

    #[test]
    fn test_feature_round_trip() {
        let mut feature = Feature::with_kind(
            "s-1",
            FeatureKind::Succession(SuccessionProps {
                connector: ConnectorProps {
                    connected_features: vec!["a".to_string(), "b".to_string()],
                },
                effect: Some("fire".to_string()),
                guard: None,
            }),
        );
        feature.is_end = true;
        feature.type_id = Some("t-1".to_string());
        feature.direction = Some(Direction::Out);

        let json = serde_json::to_value(&feature).unwrap();
        let back: Feature = serde_json::from_value(json).unwrap();
        assert_eq!(feature, back);
    }
}
