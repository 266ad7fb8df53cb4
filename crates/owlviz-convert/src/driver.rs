//! Conversion driver.
//!
//! One run: one ontology, one fresh graph, axioms applied sequentially in
//! order. The graph is exclusively owned for the lifetime of the run and
//! handed over with the fidelity report when the run finishes.

use crate::classes::dispatch_class_axiom;
use crate::individuals::dispatch_individual_axiom;
use crate::ontology::{Axiom, Ontology};
use crate::properties::dispatch_property_axiom;
use owlviz_graph::{Diagnostic, OntologyGraph};

/// Result of a conversion run: the populated graph plus the structured list
/// of constructs that were skipped along the way. The engine is best-effort
/// by design, so the run itself cannot fail; `skipped` is how callers tell
/// fully modeled output from degraded output.
#[derive(Debug)]
pub struct Conversion {
    pub graph: OntologyGraph,
    pub skipped: Vec<Diagnostic>,
}

/// Converts an ontology into its visual graph.
pub fn convert(ontology: &Ontology) -> Conversion {
    let mut graph = OntologyGraph::new();

    for axiom in &ontology.axioms {
        match axiom {
            Axiom::Class { subject, axiom } => dispatch_class_axiom(&mut graph, subject, axiom),
            Axiom::Property { axiom } => dispatch_property_axiom(&mut graph, axiom),
            Axiom::Individual { axiom } => dispatch_individual_axiom(&mut graph, axiom),
        }
    }

    tracing::debug!(
        ontology = %ontology.iri,
        classes = graph.classes().len(),
        properties = graph.properties().len(),
        skipped = graph.diagnostics().len(),
        "conversion finished"
    );

    let skipped = graph.diagnostics().to_vec();
    Conversion { graph, skipped }
}

/// Decodes a JSON ontology document and converts it.
pub fn convert_json_document(text: &str) -> anyhow::Result<Conversion> {
    let ontology = Ontology::from_json_str(text)?;
    Ok(convert(&ontology))
}
