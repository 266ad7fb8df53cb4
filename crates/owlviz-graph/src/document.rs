//! Serializable node/edge document handed to an external visualizer.
//!
//! The document is a structural dump of the graph, not a layouted picture:
//! nodes with their attribute tags and relation sets, plus the synthetic
//! value/datatype references and the disjointness pairs. Ordering is
//! deterministic (the arena is keyed by `BTreeMap`), so the same graph always
//! serializes to the same document.

use crate::diagnostics::Diagnostic;
use crate::graph::OntologyGraph;
use crate::nodes::{ClassNode, DatatypeNode, DisjointFact, PropertyNode, ValueReferenceNode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub classes: Vec<ClassNode>,
    pub properties: Vec<PropertyNode>,
    pub value_references: Vec<ValueReferenceNode>,
    pub datatypes: Vec<DatatypeNode>,
    pub disjoint_pairs: Vec<DisjointFact>,
    /// Constructs the conversion skipped, so document consumers can tell
    /// complete output from degraded output.
    pub skipped: Vec<Diagnostic>,
}

impl OntologyGraph {
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            classes: self.classes().values().cloned().collect(),
            properties: self.properties().values().cloned().collect(),
            value_references: self.value_references().cloned().collect(),
            datatypes: self.datatypes().values().cloned().collect(),
            disjoint_pairs: self.disjoint_facts().iter().cloned().collect(),
            skipped: self.diagnostics().to_vec(),
        }
    }
}

impl GraphDocument {
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{Quantifier, ValueReferenceKind};

    #[test]
    fn document_is_deterministic() {
        let build = || {
            let mut graph = OntologyGraph::new();
            graph.link_subclass("http://example.org/B", "http://example.org/A");
            graph.link_subclass("http://example.org/C", "http://example.org/A");
            graph.add_disjoint("http://example.org/C", "http://example.org/B");
            graph
                .value_reference_for("http://example.org/p", Quantifier::Some, ValueReferenceKind::Object)
                .ranges
                .insert("http://example.org/B".to_string());
            graph.to_document().to_json_string().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn document_carries_skipped_constructs() {
        let mut graph = OntologyGraph::new();
        graph.push_diagnostic(crate::diagnostics::Diagnostic::unsupported_shape(
            "union_of",
            "anonymous operand in union",
        ));
        let doc = graph.to_document();
        assert_eq!(doc.skipped.len(), 1);
        assert_eq!(doc.skipped[0].construct, "union_of");
    }
}
