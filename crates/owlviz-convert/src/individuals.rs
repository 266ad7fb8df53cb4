//! Individual-level processing.
//!
//! Individuals are rendered as members of their class node, so the only
//! mutating path is a class assertion (directly, or delegated from a one-of
//! enumeration). Identity axioms and property assertions between individuals
//! have no counterpart in the graph schema and degrade to diagnostics.

use crate::classes::skip_unsupported;
use crate::ontology::IndividualAxiom;
use owlviz_graph::{Iri, OntologyGraph};

/// Records `individual` as a member of the context class. Entry point used
/// both for direct class assertions and for one-of enumerations.
pub fn process_individual(graph: &mut OntologyGraph, context: &Iri, individual: &Iri) {
    graph
        .class_for(context)
        .individuals
        .insert(individual.clone());
}

pub fn dispatch_individual_axiom(graph: &mut OntologyGraph, axiom: &IndividualAxiom) {
    match axiom {
        IndividualAxiom::ClassAssertion { individual, class } => match class.as_named() {
            Some(iri) => {
                let iri = iri.clone();
                process_individual(graph, &iri, individual);
            }
            None => skip_unsupported(
                graph,
                "class_assertion",
                format!(
                    "assertion of {individual} against anonymous {}",
                    class.construct_name()
                ),
            ),
        },
        IndividualAxiom::SameIndividual { individuals } => skip_unsupported(
            graph,
            "same_individual",
            format!("identity over {} individuals is not represented", individuals.len()),
        ),
        IndividualAxiom::DifferentIndividuals { individuals } => skip_unsupported(
            graph,
            "different_individuals",
            format!(
                "distinctness over {} individuals is not represented",
                individuals.len()
            ),
        ),
        IndividualAxiom::ObjectPropertyAssertion { subject, property, .. } => skip_unsupported(
            graph,
            "object_property_assertion",
            format!("assertion {property} on {subject} is not represented"),
        ),
        IndividualAxiom::DataPropertyAssertion { subject, property, .. } => skip_unsupported(
            graph,
            "data_property_assertion",
            format!("assertion {property} on {subject} is not represented"),
        ),
    }
}
