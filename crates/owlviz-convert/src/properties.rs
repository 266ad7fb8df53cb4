//! Property-level axiom dispatcher.
//!
//! Same contract as the class dispatcher: exhaustive match, best effort,
//! diagnostics instead of failures. Hierarchy links are mutual pairs, domain
//! and range sets are additive, inverse pairing overwrites, characteristics
//! become attribute tags on the property node.

use crate::classes::{skip_unknown, skip_unsupported};
use crate::ontology::PropertyAxiom;
use owlviz_graph::{NodeAttribute, OntologyGraph};

pub fn dispatch_property_axiom(graph: &mut OntologyGraph, axiom: &PropertyAxiom) {
    match axiom {
        PropertyAxiom::SubPropertyOf { sub, sup } => graph.link_subproperty(sub, sup),
        PropertyAxiom::Domain { property, domain } => match domain.as_named() {
            Some(iri) => {
                graph.property_for(property).domains.insert(iri.clone());
            }
            None => skip_unsupported(
                graph,
                "property_domain",
                format!(
                    "anonymous {} domain on {property}",
                    domain.construct_name()
                ),
            ),
        },
        PropertyAxiom::Range { property, range } => match range.as_named() {
            Some(iri) => {
                graph.property_for(property).ranges.insert(iri.clone());
            }
            None => skip_unsupported(
                graph,
                "property_range",
                format!("anonymous {} range on {property}", range.construct_name()),
            ),
        },
        PropertyAxiom::InverseOf { first, second } => {
            graph.property_for(first).inverse_of = Some(second.clone());
            graph.property_for(second).inverse_of = Some(first.clone());
        }
        PropertyAxiom::EquivalentProperties { properties } => {
            for property in properties {
                let node = graph.property_for(property);
                for other in properties {
                    if other != property {
                        node.equivalent_properties.insert(other.clone());
                    }
                }
                node.attributes.insert(NodeAttribute::Equivalent);
            }
        }
        PropertyAxiom::Functional { property } => {
            graph
                .property_for(property)
                .attributes
                .insert(NodeAttribute::Functional);
        }
        PropertyAxiom::InverseFunctional { property } => {
            graph
                .property_for(property)
                .attributes
                .insert(NodeAttribute::InverseFunctional);
        }
        PropertyAxiom::Transitive { property } => {
            graph
                .property_for(property)
                .attributes
                .insert(NodeAttribute::Transitive);
        }
        PropertyAxiom::Symmetric { property } => {
            graph
                .property_for(property)
                .attributes
                .insert(NodeAttribute::Symmetric);
        }
        PropertyAxiom::PropertyChain { sup, .. } => skip_unknown(
            graph,
            "property_chain",
            format!("property chains (into {sup}) are not represented"),
        ),
        PropertyAxiom::HasKey { class, .. } => skip_unknown(
            graph,
            "has_key",
            format!("key axioms (on {class}) are not represented"),
        ),
    }
}
