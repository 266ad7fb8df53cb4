//! Integration tests for the complete conversion pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - Ontology document → dispatchers → graph
//! - Graph → node/edge document → JSON
//!
//! Run with: cargo test --test integration_tests

use owlviz_convert::ontology::{
    Axiom, ClassAxiom, ClassExpression, IndividualAxiom, PropertyAxiom, PropertyExpr,
};
use owlviz_convert::{convert, convert_json_document, Ontology};
use owlviz_graph::{NodeAttribute, Quantifier};

fn ex(name: &str) -> String {
    format!("http://example.org/{name}")
}

// ============================================================================
// End-to-end conversion
// ============================================================================

#[test]
fn test_subclass_end_to_end() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    let ontology = Ontology {
        iri: ex("zoo"),
        axioms: vec![Axiom::Class {
            subject: ex("Dog"),
            axiom: ClassAxiom::SubClassOf {
                sub: ClassExpression::named(&ex("Dog")),
                sup: ClassExpression::named(&ex("Animal")),
            },
        }],
    };

    let conversion = convert(&ontology);

    let dog = conversion.graph.class(&ex("Dog")).expect("Dog node");
    assert_eq!(dog.super_entities, [ex("Animal")].into_iter().collect());
    assert!(dog.sub_entities.is_empty());
    assert!(dog.union_members.is_empty());
    assert!(dog.equivalent_elements.is_empty());

    let animal = conversion.graph.class(&ex("Animal")).expect("Animal node");
    assert_eq!(animal.sub_entities, [ex("Dog")].into_iter().collect());
    assert!(animal.super_entities.is_empty());

    assert!(conversion.skipped.is_empty());
}

#[test]
fn test_mixed_ontology_conversion() {
    let ontology = Ontology {
        iri: ex("family"),
        axioms: vec![
            Axiom::Class {
                subject: ex("Parent"),
                axiom: ClassAxiom::EquivalentClasses {
                    operands: vec![
                        ClassExpression::named(&ex("Parent")),
                        ClassExpression::UnionOf {
                            operands: vec![
                                ClassExpression::named(&ex("Mother")),
                                ClassExpression::named(&ex("Father")),
                            ],
                        },
                    ],
                },
            },
            Axiom::Class {
                subject: ex("Person"),
                axiom: ClassAxiom::SubClassOf {
                    sub: ClassExpression::named(&ex("Person")),
                    sup: ClassExpression::AllValuesFrom {
                        property: PropertyExpr::Named {
                            iri: ex("hasParent"),
                        },
                        filler: Box::new(ClassExpression::named(&ex("Person"))),
                    },
                },
            },
            Axiom::Class {
                subject: ex("Mother"),
                axiom: ClassAxiom::DisjointClasses {
                    operands: vec![
                        ClassExpression::named(&ex("Mother")),
                        ClassExpression::named(&ex("Father")),
                    ],
                },
            },
            Axiom::Property {
                axiom: PropertyAxiom::Functional {
                    property: ex("hasBirthMother"),
                },
            },
            Axiom::Individual {
                axiom: IndividualAxiom::ClassAssertion {
                    individual: ex("alice"),
                    class: ClassExpression::named(&ex("Mother")),
                },
            },
        ],
    };

    let conversion = convert(&ontology);
    let graph = &conversion.graph;

    let parent = graph.class(&ex("Parent")).unwrap();
    assert!(parent.attributes.contains(&NodeAttribute::Union));
    assert_eq!(parent.union_members.len(), 2);

    let vr = graph.value_reference(&ex("hasParent"), Quantifier::All).unwrap();
    assert!(vr.domains.contains(&ex("Person")));
    assert!(vr.ranges.contains(&ex("Person")));

    assert!(graph.searcher().has_disjoint(&ex("Father"), &ex("Mother")));

    assert!(graph
        .property(&ex("hasBirthMother"))
        .unwrap()
        .attributes
        .contains(&NodeAttribute::Functional));

    assert!(graph.class(&ex("Mother")).unwrap().individuals.contains(&ex("alice")));

    assert!(conversion.skipped.is_empty());
}

#[test]
fn test_degraded_constructs_do_not_abort_the_run() {
    let ontology = Ontology {
        iri: ex("degraded"),
        axioms: vec![
            // Unrepresentable: qualified cardinality.
            Axiom::Class {
                subject: ex("A"),
                axiom: ClassAxiom::SubClassOf {
                    sub: ClassExpression::named(&ex("A")),
                    sup: ClassExpression::MinCardinality {
                        property: PropertyExpr::Named { iri: ex("p") },
                        cardinality: 2,
                        filler: Some(Box::new(ClassExpression::named(&ex("B")))),
                    },
                },
            },
            // Unrepresentable: data has-value.
            Axiom::Class {
                subject: ex("A"),
                axiom: ClassAxiom::SubClassOf {
                    sub: ClassExpression::named(&ex("A")),
                    sup: ClassExpression::DataHasValue {
                        property: ex("q"),
                        literal: "42".to_string(),
                    },
                },
            },
            // Representable: must still be applied after the two above.
            Axiom::Class {
                subject: ex("A"),
                axiom: ClassAxiom::SubClassOf {
                    sub: ClassExpression::named(&ex("A")),
                    sup: ClassExpression::named(&ex("B")),
                },
            },
        ],
    };

    let conversion = convert(&ontology);
    assert_eq!(conversion.skipped.len(), 2);
    assert!(conversion
        .graph
        .class(&ex("A"))
        .unwrap()
        .super_entities
        .contains(&ex("B")));
}

// ============================================================================
// Document hand-off
// ============================================================================

#[test]
fn test_graph_document_json_hand_off() {
    let ontology = Ontology {
        iri: ex("zoo"),
        axioms: vec![
            Axiom::Class {
                subject: ex("Dog"),
                axiom: ClassAxiom::SubClassOf {
                    sub: ClassExpression::named(&ex("Dog")),
                    sup: ClassExpression::named(&ex("Animal")),
                },
            },
            Axiom::Class {
                subject: ex("Dog"),
                axiom: ClassAxiom::DisjointClasses {
                    operands: vec![
                        ClassExpression::named(&ex("Dog")),
                        ClassExpression::named(&ex("Cat")),
                    ],
                },
            },
        ],
    };

    let document = convert(&ontology).graph.to_document();
    let json = document.to_json_string().expect("serialize");

    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    let classes = value["classes"].as_array().expect("classes array");
    assert_eq!(classes.len(), 3);
    assert_eq!(value["disjoint_pairs"].as_array().unwrap().len(), 1);
    assert_eq!(value["skipped"].as_array().unwrap().len(), 0);
}

#[test]
fn test_json_ontology_document_input() {
    let text = r#"{
        "iri": "http://example.org/zoo",
        "axioms": [
            {
                "level": "class",
                "subject": "http://example.org/Dog",
                "axiom": {
                    "kind": "sub_class_of",
                    "sub": { "kind": "class", "iri": "http://example.org/Dog" },
                    "sup": {
                        "kind": "some_values_from",
                        "property": { "kind": "named", "iri": "http://example.org/hasOwner" },
                        "filler": { "kind": "class", "iri": "http://example.org/Person" }
                    }
                }
            },
            {
                "level": "property",
                "axiom": {
                    "kind": "inverse_of",
                    "first": "http://example.org/hasOwner",
                    "second": "http://example.org/owns"
                }
            }
        ]
    }"#;

    let conversion = convert_json_document(text).expect("valid document");
    let graph = &conversion.graph;

    let vr = graph
        .value_reference(&ex("hasOwner"), Quantifier::Some)
        .expect("value reference");
    assert!(vr.domains.contains(&ex("Dog")));

    assert_eq!(
        graph.property(&ex("owns")).unwrap().inverse_of,
        Some(ex("hasOwner"))
    );
}
