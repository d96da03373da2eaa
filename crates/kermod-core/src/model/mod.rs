pub mod element;
pub mod feature;
pub mod metadata;
pub mod multiplicity;
pub mod operator;
pub mod organization;
pub mod relationship;
pub mod type_graph;

pub use element::{fresh_id, ElementData};
pub use feature::{
    ConnectorProps, Direction, Feature, FeatureKind, ItemFlowProps, SuccessionItemFlowProps,
    SuccessionProps,
};
pub use metadata::Metadata;
pub use multiplicity::MultiplicityRange;
pub use operator::{DifferenceType, IntersectType, TypeOperator, UnionType};
pub use organization::{FeatureValue, MetadataFeature, Model, Package};
pub use relationship::{
    Conjugation, FeatureChaining, FeatureInverting, FeatureMembership, Relationship,
    Specialization, TypeFeaturing,
};
pub use type_graph::{
    BehaviorProps, ClassifierProps, ExpressionProps, FunctionProps, InteractionProps, Type,
    TypeKind,
};

/// Sum over every concrete element kind in the model
///
/// This is the flat tagged-variant view of the metamodel: one enumeration,
/// shared metadata through [`ElementData`], kind-specific fields in the
/// payload structs. `Model` itself stays outside — it is the serialization
/// unit of work holding the flat element array.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Type(Type),
    Feature(Feature),
    Multiplicity(MultiplicityRange),
    Relationship(Relationship),
    Operator(TypeOperator),
    Value(FeatureValue),
    Annotation(MetadataFeature),
    Package(Package),
}

impl Element {
    /// The element's id
    pub fn id(&self) -> &str {
        &self.element_data().id
    }

    /// Shared element metadata
    pub fn element_data(&self) -> &ElementData {
        match self {
            Element::Type(t) => &t.element,
            Element::Feature(f) => &f.element,
            Element::Multiplicity(m) => &m.element,
            Element::Relationship(r) => r.element(),
            Element::Operator(op) => op.element(),
            Element::Value(v) => &v.element,
            Element::Annotation(a) => &a.element,
            Element::Package(p) => &p.element,
        }
    }

    /// Mutable shared element metadata
    pub fn element_data_mut(&mut self) -> &mut ElementData {
        match self {
            Element::Type(t) => &mut t.element,
            Element::Feature(f) => &mut f.element,
            Element::Multiplicity(m) => &mut m.element,
            Element::Relationship(r) => r.element_mut(),
            Element::Operator(op) => op.element_mut(),
            Element::Value(v) => &mut v.element,
            Element::Annotation(a) => &mut a.element,
            Element::Package(p) => &mut p.element,
        }
    }

    /// Wire discriminator for this element's concrete kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Element::Type(t) => t.kind_name(),
            Element::Feature(f) => f.kind_name(),
            Element::Multiplicity(_) => "MultiplicityRange",
            Element::Relationship(r) => r.kind_name(),
            Element::Operator(op) => op.kind_name(),
            Element::Value(_) => "FeatureValue",
            Element::Annotation(_) => "MetadataFeature",
            Element::Package(_) => "Package",
        }
    }
}
