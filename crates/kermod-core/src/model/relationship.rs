//! Relationship layer
//!
//! Directed edges over the type graph. Each relationship is a first-class
//! edge entity with two mandatory endpoint ids, stored independently of its
//! endpoints — integrity is a whole-model property checked by the validation
//! engine, never at construction.

use serde::{Deserialize, Serialize};

use super::element::ElementData;

/// A directed "is-a" edge between a specific and a general type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    #[serde(flatten)]
    pub element: ElementData,
    pub specific: String,
    pub general: String,
}

impl Specialization {
    pub fn new(
        id: impl Into<String>,
        specific: impl Into<String>,
        general: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            specific: specific.into(),
            general: general.into(),
        }
    }
}

/// A conjugate-of edge between a type and its conjugated counterpart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conjugation {
    #[serde(flatten)]
    pub element: ElementData,
    pub original: String,
    pub conjugated: String,
}

impl Conjugation {
    pub fn new(
        id: impl Into<String>,
        original: impl Into<String>,
        conjugated: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            original: original.into(),
            conjugated: conjugated.into(),
        }
    }
}

/// An edge asserting that a type owns a given feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureMembership {
    #[serde(flatten)]
    pub element: ElementData,
    pub owning_type: String,
    pub member_feature: String,
}

impl FeatureMembership {
    pub fn new(
        id: impl Into<String>,
        owning_type: impl Into<String>,
        member_feature: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            owning_type: owning_type.into(),
            member_feature: member_feature.into(),
        }
    }
}

/// An edge asserting that a feature is featured by a type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeFeaturing {
    #[serde(flatten)]
    pub element: ElementData,
    pub featured_type: String,
    pub featuring_type: String,
}

impl TypeFeaturing {
    pub fn new(
        id: impl Into<String>,
        featured_type: impl Into<String>,
        featuring_type: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            featured_type: featured_type.into(),
            featuring_type: featuring_type.into(),
        }
    }
}

/// An edge composing a feature out of a chain of features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureChaining {
    #[serde(flatten)]
    pub element: ElementData,
    pub chaining_feature: String,
    pub chained_feature: String,
}

impl FeatureChaining {
    pub fn new(
        id: impl Into<String>,
        chaining_feature: impl Into<String>,
        chained_feature: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            chaining_feature: chaining_feature.into(),
            chained_feature: chained_feature.into(),
        }
    }
}

/// An edge declaring two features to be inverses of each other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureInverting {
    #[serde(flatten)]
    pub element: ElementData,
    pub featured_inverting: String,
    pub inverting_feature: String,
}

impl FeatureInverting {
    pub fn new(
        id: impl Into<String>,
        featured_inverting: impl Into<String>,
        inverting_feature: impl Into<String>,
    ) -> Self {
        Self {
            element: ElementData::new(id),
            featured_inverting: featured_inverting.into(),
            inverting_feature: inverting_feature.into(),
        }
    }
}

/// Sum type unifying all relationship edges for storage and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type")]
pub enum Relationship {
    Specialization(Specialization),
    Conjugation(Conjugation),
    FeatureMembership(FeatureMembership),
    TypeFeaturing(TypeFeaturing),
    FeatureChaining(FeatureChaining),
    FeatureInverting(FeatureInverting),
}

impl Relationship {
    /// The edge's id
    pub fn id(&self) -> &str {
        &self.element().id
    }

    /// Shared element metadata
    pub fn element(&self) -> &ElementData {
        match self {
            Relationship::Specialization(r) => &r.element,
            Relationship::Conjugation(r) => &r.element,
            Relationship::FeatureMembership(r) => &r.element,
            Relationship::TypeFeaturing(r) => &r.element,
            Relationship::FeatureChaining(r) => &r.element,
            Relationship::FeatureInverting(r) => &r.element,
        }
    }

    /// Mutable shared element metadata
    pub fn element_mut(&mut self) -> &mut ElementData {
        match self {
            Relationship::Specialization(r) => &mut r.element,
            Relationship::Conjugation(r) => &mut r.element,
            Relationship::FeatureMembership(r) => &mut r.element,
            Relationship::TypeFeaturing(r) => &mut r.element,
            Relationship::FeatureChaining(r) => &mut r.element,
            Relationship::FeatureInverting(r) => &mut r.element,
        }
    }

    /// Wire discriminator for this edge's concrete kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Relationship::Specialization(_) => "Specialization",
            Relationship::Conjugation(_) => "Conjugation",
            Relationship::FeatureMembership(_) => "FeatureMembership",
            Relationship::TypeFeaturing(_) => "TypeFeaturing",
            Relationship::FeatureChaining(_) => "FeatureChaining",
            Relationship::FeatureInverting(_) => "FeatureInverting",
        }
    }

    /// The edge's two endpoints as (role name, endpoint id) pairs
    ///
    /// Role names match the wire field names, so the validation engine can
    /// name the offending role when an endpoint is empty.
    pub fn endpoints(&self) -> [(&'static str, &str); 2] {
        match self {
            Relationship::Specialization(r) => {
                [("specific", r.specific.as_str()), ("general", r.general.as_str())]
            }
            Relationship::Conjugation(r) => [
                ("original", r.original.as_str()),
                ("conjugated", r.conjugated.as_str()),
            ],
            Relationship::FeatureMembership(r) => [
                ("owningType", r.owning_type.as_str()),
                ("memberFeature", r.member_feature.as_str()),
            ],
            Relationship::TypeFeaturing(r) => [
                ("featuredType", r.featured_type.as_str()),
                ("featuringType", r.featuring_type.as_str()),
            ],
            Relationship::FeatureChaining(r) => [
                ("chainingFeature", r.chaining_feature.as_str()),
                ("chainedFeature", r.chained_feature.as_str()),
            ],
            Relationship::FeatureInverting(r) => [
                ("featuredInverting", r.featured_inverting.as_str()),
                ("invertingFeature", r.inverting_feature.as_str()),
            ],
        }
    }
}

impl From<Specialization> for Relationship {
    fn from(r: Specialization) -> Self {
        Relationship::Specialization(r)
    }
}

impl From<Conjugation> for Relationship {
    fn from(r: Conjugation) -> Self {
        Relationship::Conjugation(r)
    }
}

impl From<FeatureMembership> for Relationship {
    fn from(r: FeatureMembership) -> Self {
        Relationship::FeatureMembership(r)
    }
}

impl From<TypeFeaturing> for Relationship {
    fn from(r: TypeFeaturing) -> Self {
        Relationship::TypeFeaturing(r)
    }
}

impl From<FeatureChaining> for Relationship {
    fn from(r: FeatureChaining) -> Self {
        Relationship::FeatureChaining(r)
    }
}

impl From<FeatureInverting> for Relationship {
    fn from(r: FeatureInverting) -> Self {
        Relationship::FeatureInverting(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialization_endpoints() {
        let edge: Relationship = Specialization::new("s-1", "t-child", "t-parent").into();

        assert_eq!(edge.id(), "s-1");
        assert_eq!(edge.kind_name(), "Specialization");
        assert_eq!(
            edge.endpoints(),
            [("specific", "t-child"), ("general", "t-parent")]
        );
    }

    #[test]
    fn test_membership_endpoints_use_wire_role_names() {
        let edge: Relationship = FeatureMembership::new("m-1", "t-1", "f-1").into();
        let [(role_a, _), (role_b, _)] = edge.endpoints();
        assert_eq!(role_a, "owningType");
        assert_eq!(role_b, "memberFeature");
    }

    #[test]
    fn test_empty_endpoints_are_constructible() {
        // Construction never fails; completeness is a validation concern.
        let edge: Relationship = TypeFeaturing::new("tf-1", "", "t-1").into();
        assert_eq!(edge.endpoints()[0].1, "");
    }

    #[test]
    fn test_wire_shape_carries_discriminator() {
        let edge: Relationship = FeatureChaining::new("fc-1", "f-a", "f-b").into();
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["__type"], "FeatureChaining");
        assert_eq!(value["chainingFeature"], "f-a");
        assert_eq!(value["chainedFeature"], "f-b");
    }

    #[test]
    fn test_round_trip() {
        let edge: Relationship = Conjugation::new("c-1", "t-1", "t-2").into();
        let json = serde_json::to_value(&edge).unwrap();
        let back: Relationship = serde_json::from_value(json).unwrap();
        assert_eq!(edge, back);
    }
}
