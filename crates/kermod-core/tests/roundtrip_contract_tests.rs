//! Round-trip contract tests
//!
//! For every concrete element kind: `deserialize(serialize(x))` equals `x`
//! field-for-field, and `serialize(deserialize(serialize(x)))` equals
//! `serialize(x)`.

use kermod_core::model::{
    ClassifierProps, Conjugation, ConnectorProps, DifferenceType, Direction, Element, ElementData,
    ExpressionProps, Feature, FeatureChaining, FeatureInverting, FeatureKind, FeatureMembership,
    FeatureValue, FunctionProps, IntersectType, ItemFlowProps, MetadataFeature, MultiplicityRange,
    Package, Specialization, SuccessionItemFlowProps, SuccessionProps, Type, TypeFeaturing,
    TypeKind, UnionType,
};
use kermod_core::serialize::{deserialize_element, serialize_element};
use proptest::prelude::*;
use serde_json::json;

fn assert_round_trip(element: Element) {
    let record = serialize_element(&element).unwrap();
    let rebuilt = deserialize_element(&record).unwrap();
    assert_eq!(element, rebuilt, "round trip changed the element");

    let record_again = serialize_element(&rebuilt).unwrap();
    assert_eq!(record, record_again, "re-serialization drifted");
}

fn named(id: &str) -> ElementData {
    ElementData::new(id)
        .with_name(format!("{id}-name"))
        .with_short_name(format!("{id}-short"))
        .with_qualified_name(format!("Root::{id}"))
        .with_description("described")
}

#[test]
fn test_type_family_round_trips() {
    let kinds = [
        TypeKind::Type,
        TypeKind::Classifier(ClassifierProps {
            is_final: true,
            is_individual: false,
        }),
        TypeKind::DataType(ClassifierProps::default()),
        TypeKind::Class(ClassifierProps {
            is_final: false,
            is_individual: true,
        }),
        TypeKind::Structure(ClassifierProps::default()),
        TypeKind::Association(ClassifierProps::default()),
    ];

    for (index, kind) in kinds.into_iter().enumerate() {
        let mut ty = Type::with_kind(format!("t-{index}"), kind);
        ty.element = named(&format!("t-{index}"));
        ty.is_abstract = index % 2 == 0;
        ty.multiplicity = Some("1..*".to_string());
        ty.add_specialization("t-base").unwrap();
        assert_round_trip(Element::Type(ty));
    }
}

#[test]
fn test_behavior_family_round_trips() {
    let mut behavior = Type::with_kind(
        "b-1",
        TypeKind::Behavior(kermod_core::model::BehaviorProps::default()),
    );
    behavior.add_step("s-1").unwrap();
    behavior.add_step("s-2").unwrap();
    assert_round_trip(Element::Type(behavior));

    let mut function = Type::with_kind("fn-1", TypeKind::Function(FunctionProps::default()));
    function.add_step("s-1").unwrap();
    function.set_result(Some("f-result".to_string())).unwrap();
    assert_round_trip(Element::Type(function));

    let mut expression = Type::with_kind(
        "ex-1",
        TypeKind::Expression(ExpressionProps {
            body: Some("e-body".to_string()),
            ..Default::default()
        }),
    );
    expression.set_result(Some("f-out".to_string())).unwrap();
    assert_round_trip(Element::Type(expression));

    let predicate = Type::with_kind("pr-1", TypeKind::Predicate(FunctionProps::default()));
    assert_round_trip(Element::Type(predicate));

    let mut interaction = Type::with_kind(
        "in-1",
        TypeKind::Interaction(kermod_core::model::InteractionProps::default()),
    );
    interaction.add_participant("p-1").unwrap();
    interaction.add_participant("p-2").unwrap();
    assert_round_trip(Element::Type(interaction));
}

#[test]
fn test_feature_family_round_trips() {
    let mut feature = Feature::new("f-1");
    feature.element = named("f-1");
    feature.is_ordered = true;
    feature.is_derived = true;
    feature.direction = Some(Direction::In);
    feature.type_id = Some("t-1".to_string());
    feature.add_redefinition("f-base");
    feature.add_specialization("f-general").unwrap();
    assert_round_trip(Element::Feature(feature));

    let step = Feature::with_kind("st-1", FeatureKind::Step);
    assert_round_trip(Element::Feature(step));

    let mut connector = Feature::with_kind("c-1", FeatureKind::Connector(ConnectorProps::default()));
    connector.connect("f-a").unwrap();
    connector.connect("f-b").unwrap();
    assert_round_trip(Element::Feature(connector));

    let mut binding =
        Feature::with_kind("bc-1", FeatureKind::BindingConnector(ConnectorProps::default()));
    binding.connect("f-a").unwrap();
    binding.connect("f-b").unwrap();
    assert_round_trip(Element::Feature(binding));

    let succession = Feature::with_kind(
        "su-1",
        FeatureKind::Succession(SuccessionProps {
            connector: ConnectorProps {
                connected_features: vec!["f-a".to_string(), "f-b".to_string()],
            },
            effect: Some("notify".to_string()),
            guard: Some("armed".to_string()),
        }),
    );
    assert_round_trip(Element::Feature(succession));

    let item_flow = Feature::with_kind(
        "if-1",
        FeatureKind::ItemFlow(ItemFlowProps {
            connector: ConnectorProps {
                connected_features: vec!["f-a".to_string(), "f-b".to_string()],
            },
            item_type: Some("t-item".to_string()),
        }),
    );
    assert_round_trip(Element::Feature(item_flow));

    let mut sif_props = SuccessionItemFlowProps::default();
    sif_props.succession.connector.connected_features =
        vec!["f-a".to_string(), "f-b".to_string()];
    sif_props.succession.effect = Some("fire".to_string());
    sif_props.item_type = Some("t-item".to_string());
    let succession_item_flow =
        Feature::with_kind("sif-1", FeatureKind::SuccessionItemFlow(sif_props));
    assert_round_trip(Element::Feature(succession_item_flow));
}

#[test]
fn test_relationship_round_trips() {
    assert_round_trip(Element::Relationship(
        Specialization::new("s-1", "t-a", "t-b").into(),
    ));
    assert_round_trip(Element::Relationship(
        Conjugation::new("cj-1", "t-a", "t-b").into(),
    ));
    assert_round_trip(Element::Relationship(
        FeatureMembership::new("fm-1", "t-a", "f-1").into(),
    ));
    assert_round_trip(Element::Relationship(
        TypeFeaturing::new("tf-1", "t-a", "t-b").into(),
    ));
    assert_round_trip(Element::Relationship(
        FeatureChaining::new("fc-1", "f-1", "f-2").into(),
    ));
    assert_round_trip(Element::Relationship(
        FeatureInverting::new("fi-1", "f-1", "f-2").into(),
    ));
}

#[test]
fn test_operator_round_trips() {
    let mut union = UnionType::new("u-1");
    union.add_operand("t-1");
    union.add_operand("t-2");
    assert_round_trip(Element::Operator(union.into()));

    let mut intersect = IntersectType::new("i-1");
    intersect.add_operand("t-1");
    assert_round_trip(Element::Operator(intersect.into()));

    assert_round_trip(Element::Operator(
        DifferenceType::new("d-1", "t-1", "t-2").into(),
    ));
}

#[test]
fn test_value_and_organization_round_trips() {
    assert_round_trip(Element::Multiplicity(MultiplicityRange::new("m-1", 0, -1)));

    assert_round_trip(Element::Value(FeatureValue::new(
        "v-1",
        "f-1",
        json!({"amount": 3, "unit": "kg"}),
    )));

    let mut annotation = MetadataFeature::new("md-1", "t-1");
    annotation.metadata.set("stereotype".to_string(), json!("block"));
    assert_round_trip(Element::Annotation(annotation));

    let mut package = Package::new("p-1");
    package.add_member("t-1");
    package.add_import("p-2");
    assert_round_trip(Element::Package(package));
}

#[test]
fn test_nested_ownership_round_trips_deeply() {
    // A type owning a connector owning nothing, plus plain features; the
    // inline embedding must survive arbitrarily rich owned sequences.
    let mut ty = Type::with_kind("t-1", TypeKind::Class(ClassifierProps::default()));
    let mut plain = Feature::new("f-plain");
    plain.direction = Some(Direction::Inout);
    ty.add_feature(plain);

    let mut connector = Feature::with_kind("f-conn", FeatureKind::Connector(ConnectorProps::default()));
    connector.connect("f-plain").unwrap();
    connector.connect("f-other").unwrap();
    ty.add_feature(connector);

    assert_round_trip(Element::Type(ty));
}

proptest! {
    #[test]
    fn prop_feature_metadata_round_trips(
        name in proptest::option::of("[a-zA-Z0-9 _-]{0,24}"),
        short_name in proptest::option::of("[a-z0-9]{0,8}"),
        description in proptest::option::of(".{0,64}"),
        is_unique in any::<bool>(),
        is_ordered in any::<bool>(),
        is_composite in any::<bool>(),
        is_portion in any::<bool>(),
        is_read_only in any::<bool>(),
        is_derived in any::<bool>(),
        is_end in any::<bool>(),
        type_id in proptest::option::of("[a-z0-9-]{1,12}"),
    ) {
        let mut feature = Feature::new("f-prop");
        feature.element.name = name;
        feature.element.short_name = short_name;
        feature.element.description = description;
        feature.is_unique = is_unique;
        feature.is_ordered = is_ordered;
        feature.is_composite = is_composite;
        feature.is_portion = is_portion;
        feature.is_read_only = is_read_only;
        feature.is_derived = is_derived;
        feature.is_end = is_end;
        feature.type_id = type_id;

        let element = Element::Feature(feature);
        let record = serialize_element(&element).unwrap();
        let rebuilt = deserialize_element(&record).unwrap();
        prop_assert_eq!(&element, &rebuilt);
        prop_assert_eq!(record, serialize_element(&rebuilt).unwrap());
    }
}
