//! Type domain model
//!
//! A `Type` owns an insertion-ordered sequence of features and may specialize
//! other types. The classifier and behavior chains (Classifier → DataType /
//! Class / Structure / Association, Behavior → Function / Expression /
//! Predicate / Interaction) are flattened into [`TypeKind`], a tagged variant
//! carried by the flat `Type` struct.

use serde::{Deserialize, Serialize};

use super::element::ElementData;
use super::feature::Feature;
use crate::errors::{KermodError, Result};

/// Finality and individuality semantics added by Classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierProps {
    /// A final classifier admits no further specialization
    pub is_final: bool,

    /// An individual classifier describes exactly one instance
    pub is_individual: bool,
}

/// Behavior payload: classifier semantics plus an ordered step list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorProps {
    #[serde(flatten)]
    pub classifier: ClassifierProps,

    /// Ordered ids of the steps composing this behavior
    pub steps: Vec<String>,
}

/// Function payload: behavior fields plus a result reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FunctionProps {
    #[serde(flatten)]
    pub behavior: BehaviorProps,

    /// Reference to the feature holding the function's result
    pub result: Option<String>,
}

/// Expression payload: function fields plus a body reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionProps {
    #[serde(flatten)]
    pub function: FunctionProps,

    /// Reference to the element forming the expression body
    pub body: Option<String>,
}

/// Interaction payload: behavior fields plus a participant list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InteractionProps {
    #[serde(flatten)]
    pub behavior: BehaviorProps,

    /// Ordered ids of the participating elements
    pub participants: Vec<String>,
}

/// Concrete kind of a type, carrying kind-specific payload fields
///
/// The `__type` tag doubles as the wire discriminator for the portable
/// record format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type")]
pub enum TypeKind {
    Type,
    Classifier(ClassifierProps),
    DataType(ClassifierProps),
    Class(ClassifierProps),
    Structure(ClassifierProps),
    Association(ClassifierProps),
    Behavior(BehaviorProps),
    Function(FunctionProps),
    Expression(ExpressionProps),
    Predicate(FunctionProps),
    Interaction(InteractionProps),
}

impl Default for TypeKind {
    fn default() -> Self {
        TypeKind::Type
    }
}

/// A model type: owns features, may specialize other types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Type {
    #[serde(flatten)]
    pub element: ElementData,

    /// Directly-owned features, in insertion order (exclusive ownership)
    pub features: Vec<Feature>,

    /// Ids of the types this type specializes
    pub specializations: Vec<String>,

    pub is_abstract: bool,
    pub is_conjugated: bool,

    /// Optional multiplicity expression (e.g. "1..*")
    pub multiplicity: Option<String>,

    #[serde(flatten)]
    pub kind: TypeKind,
}

impl Type {
    /// Create a plain type with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_kind(id, TypeKind::Type)
    }

    /// Create a type of the given concrete kind
    pub fn with_kind(id: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            element: ElementData::new(id),
            features: Vec::new(),
            specializations: Vec::new(),
            is_abstract: false,
            is_conjugated: false,
            multiplicity: None,
            kind,
        }
    }

    /// The type's id
    pub fn id(&self) -> &str {
        &self.element.id
    }

    /// Wire discriminator for this type's concrete kind
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            TypeKind::Type => "Type",
            TypeKind::Classifier(_) => "Classifier",
            TypeKind::DataType(_) => "DataType",
            TypeKind::Class(_) => "Class",
            TypeKind::Structure(_) => "Structure",
            TypeKind::Association(_) => "Association",
            TypeKind::Behavior(_) => "Behavior",
            TypeKind::Function(_) => "Function",
            TypeKind::Expression(_) => "Expression",
            TypeKind::Predicate(_) => "Predicate",
            TypeKind::Interaction(_) => "Interaction",
        }
    }

    /// Take ownership of a feature and append it to this type
    ///
    /// Overwrites the feature's `owner_id` with this type's id. If the
    /// feature was previously owned by another type, that transfer is silent
    /// and the previous owner's collection is untouched; removing it there is
    /// the caller's responsibility. A feature with an id already present here
    /// replaces the existing entry in place.
    pub fn add_feature(&mut self, mut feature: Feature) {
        feature.element.owner_id = Some(self.element.id.clone());
        if let Some(existing) = self
            .features
            .iter_mut()
            .find(|f| f.element.id == feature.element.id)
        {
            *existing = feature;
        } else {
            self.features.push(feature);
        }
    }

    /// Remove an owned feature by id, returning whether a match was found
    pub fn remove_feature(&mut self, feature_id: &str) -> bool {
        let before = self.features.len();
        self.features.retain(|f| f.element.id != feature_id);
        self.features.len() != before
    }

    /// Linear lookup of an owned feature by id
    pub fn find_feature_by_id(&self, feature_id: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.element.id == feature_id)
    }

    /// Linear lookup of an owned feature by name
    ///
    /// Duplicate names are legal at this layer; the first match wins.
    pub fn find_feature_by_name(&self, name: &str) -> Option<&Feature> {
        self.features
            .iter()
            .find(|f| f.element.name.as_deref() == Some(name))
    }

    /// Add a specialization target, preserving order and skipping duplicates
    ///
    /// # Errors
    /// Returns `SelfSpecialization` if the target is the type itself.
    /// Transitive cycles are a validation-engine concern, not checked here.
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

    /// Classifier payload, if this kind carries one
    pub fn classifier_props(&self) -> Option<&ClassifierProps> {
        match &self.kind {
            TypeKind::Classifier(props)
            | TypeKind::DataType(props)
            | TypeKind::Class(props)
            | TypeKind::Structure(props)
            | TypeKind::Association(props) => Some(props),
            TypeKind::Behavior(props) => Some(&props.classifier),
            TypeKind::Function(props) | TypeKind::Predicate(props) => {
                Some(&props.behavior.classifier)
            }
            TypeKind::Expression(props) => Some(&props.function.behavior.classifier),
            TypeKind::Interaction(props) => Some(&props.behavior.classifier),
            TypeKind::Type => None,
        }
    }

    /// Ordered step ids, if this kind is behavioral
    pub fn steps(&self) -> Option<&[String]> {
        self.behavior().map(|props| props.steps.as_slice())
    }

    /// Append a step id to a behavioral kind, skipping duplicates
    ///
    /// # Errors
    /// Returns `UnsupportedKind` for non-behavioral kinds.
    pub fn add_step(&mut self, step_id: impl Into<String>) -> Result<()> {
        let kind = self.kind_name();
        let Some(props) = self.behavior_mut() else {
            return Err(KermodError::UnsupportedKind {
                op: "add_step".to_string(),
                kind: kind.to_string(),
            });
        };
        let step_id = step_id.into();
        if !props.steps.contains(&step_id) {
            props.steps.push(step_id);
        }
        Ok(())
    }

    /// Remove a step id, returning whether it was present
    ///
    /// # Errors
    /// Returns `UnsupportedKind` for non-behavioral kinds.
    pub fn remove_step(&mut self, step_id: &str) -> Result<bool> {
        let kind = self.kind_name();
        let Some(props) = self.behavior_mut() else {
            return Err(KermodError::UnsupportedKind {
                op: "remove_step".to_string(),
                kind: kind.to_string(),
            });
        };
        let before = props.steps.len();
        props.steps.retain(|id| id != step_id);
        Ok(props.steps.len() != before)
    }

    /// Result feature reference, if this kind carries one
    pub fn result(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Function(props) | TypeKind::Predicate(props) => props.result.as_deref(),
            TypeKind::Expression(props) => props.function.result.as_deref(),
            _ => None,
        }
    }

    /// Set the result reference on a function-like kind
    ///
    /// # Errors
    /// Returns `UnsupportedKind` for kinds without a result slot.
    pub fn set_result(&mut self, result: Option<String>) -> Result<()> {
        match &mut self.kind {
            TypeKind::Function(props) | TypeKind::Predicate(props) => {
                props.result = result;
                Ok(())
            }
            TypeKind::Expression(props) => {
                props.function.result = result;
                Ok(())
            }
            _ => Err(KermodError::UnsupportedKind {
                op: "set_result".to_string(),
                kind: self.kind_name().to_string(),
            }),
        }
    }

    /// Expression body reference, if this kind carries one
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Expression(props) => props.body.as_deref(),
            _ => None,
        }
    }

    /// Participant ids, if this kind is an interaction
    pub fn participants(&self) -> Option<&[String]> {
        match &self.kind {
            TypeKind::Interaction(props) => Some(props.participants.as_slice()),
            _ => None,
        }
    }

    /// Append a participant id to an interaction, skipping duplicates
    ///
    /// # Errors
    /// Returns `UnsupportedKind` for non-interaction kinds.
    pub fn add_participant(&mut self, participant_id: impl Into<String>) -> Result<()> {
        match &mut self.kind {
            TypeKind::Interaction(props) => {
                let participant_id = participant_id.into();
                if !props.participants.contains(&participant_id) {
                    props.participants.push(participant_id);
                }
                Ok(())
            }
            _ => Err(KermodError::UnsupportedKind {
                op: "add_participant".to_string(),
                kind: self.kind_name().to_string(),
            }),
        }
    }

    fn behavior(&self) -> Option<&BehaviorProps> {
        match &self.kind {
            TypeKind::Behavior(props) => Some(props),
            TypeKind::Function(props) | TypeKind::Predicate(props) => Some(&props.behavior),
            TypeKind::Expression(props) => Some(&props.function.behavior),
            TypeKind::Interaction(props) => Some(&props.behavior),
            _ => None,
        }
    }

    fn behavior_mut(&mut self) -> Option<&mut BehaviorProps> {
        match &mut self.kind {
            TypeKind::Behavior(props) => Some(props),
            TypeKind::Function(props) | TypeKind::Predicate(props) => Some(&mut props.behavior),
            TypeKind::Expression(props) => Some(&mut props.function.behavior),
            TypeKind::Interaction(props) => Some(&mut props.behavior),
            _ => None,
        }
    }
}
