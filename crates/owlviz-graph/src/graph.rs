//! The shared graph an axiom dispatch run mutates.
//!
//! `OntologyGraph` is an arena-style node table addressed by identifier. It is
//! the sole owner of node identity: `class_for`/`property_for` get-or-create,
//! and N calls with the same identifier always address the same node. One
//! graph instance exists per conversion run and is threaded as `&mut` through
//! every dispatch call; there is no process-global state.
//!
//! The generator half of the API vends synthetic elements that have no
//! directly asserted identifier (value references, datatype references,
//! disjoint facts). Those factories are idempotent per key, which is what
//! makes repeated restrictions on the same `(property, quantifier)` pair
//! accumulate instead of duplicating.

use crate::diagnostics::Diagnostic;
use crate::nodes::{
    ClassNode, DatatypeNode, DisjointFact, Iri, PropertyNode, Quantifier, ValueReferenceKind,
    ValueReferenceNode,
};
use crate::searcher::Searcher;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default)]
pub struct OntologyGraph {
    classes: BTreeMap<Iri, ClassNode>,
    properties: BTreeMap<Iri, PropertyNode>,
    value_references: BTreeMap<(Iri, Quantifier), ValueReferenceNode>,
    datatypes: BTreeMap<Iri, DatatypeNode>,
    disjoint_facts: BTreeSet<DisjointFact>,
    diagnostics: Vec<Diagnostic>,
}

// ============================================================================
// Registry: identity and lookup-or-create
// ============================================================================

impl OntologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The class node for `iri`, created on first reference.
    pub fn class_for(&mut self, iri: &str) -> &mut ClassNode {
        self.classes
            .entry(iri.to_string())
            .or_insert_with(|| ClassNode::new(iri))
    }

    /// The property node for `iri`, created on first reference.
    pub fn property_for(&mut self, iri: &str) -> &mut PropertyNode {
        self.properties
            .entry(iri.to_string())
            .or_insert_with(|| PropertyNode::new(iri))
    }

    pub fn class(&self, iri: &str) -> Option<&ClassNode> {
        self.classes.get(iri)
    }

    pub fn property(&self, iri: &str) -> Option<&PropertyNode> {
        self.properties.get(iri)
    }

    pub fn classes(&self) -> &BTreeMap<Iri, ClassNode> {
        &self.classes
    }

    pub fn properties(&self) -> &BTreeMap<Iri, PropertyNode> {
        &self.properties
    }

    pub fn datatypes(&self) -> &BTreeMap<Iri, DatatypeNode> {
        &self.datatypes
    }

    pub fn value_reference(&self, property: &str, quantifier: Quantifier) -> Option<&ValueReferenceNode> {
        self.value_references
            .get(&(property.to_string(), quantifier))
    }

    pub fn value_references(&self) -> impl Iterator<Item = &ValueReferenceNode> {
        self.value_references.values()
    }

    pub fn disjoint_facts(&self) -> &BTreeSet<DisjointFact> {
        &self.disjoint_facts
    }

    /// Read-only duplicate-detection queries over the accumulated graph.
    pub fn searcher(&self) -> Searcher<'_> {
        Searcher::new(self)
    }

    /// Links `sub` under `sup` as a mutual pair: the sub side records the
    /// super entity and the super side records the sub entity.
    pub fn link_subclass(&mut self, sub: &str, sup: &str) {
        self.class_for(sub).super_entities.insert(sup.to_string());
        self.class_for(sup).sub_entities.insert(sub.to_string());
    }

    /// Links `sub` under `sup` on the property hierarchy, mutually.
    pub fn link_subproperty(&mut self, sub: &str, sup: &str) {
        self.property_for(sub)
            .super_properties
            .insert(sup.to_string());
        self.property_for(sup).sub_properties.insert(sub.to_string());
    }
}

// ============================================================================
// Generator: synthetic, non-named elements
// ============================================================================

impl OntologyGraph {
    /// The value reference node for `(property, quantifier)`.
    ///
    /// The first call creates the node; every later call with the same key
    /// returns the same node, so domains and ranges accumulate across axioms.
    pub fn value_reference_for(
        &mut self,
        property: &str,
        quantifier: Quantifier,
        kind: ValueReferenceKind,
    ) -> &mut ValueReferenceNode {
        self.value_references
            .entry((property.to_string(), quantifier))
            .or_insert_with(|| ValueReferenceNode::new(property, quantifier, kind))
    }

    /// The datatype reference for `iri`, created on first use. Returns the
    /// identifier under which the datatype is rendered.
    pub fn datatype_reference_for(&mut self, iri: &str) -> Iri {
        self.datatypes
            .entry(iri.to_string())
            .or_insert_with(|| DatatypeNode {
                iri: iri.to_string(),
            });
        iri.to_string()
    }

    /// Records the disjointness fact for the unordered pair `{a, b}`.
    /// Returns false if the fact already existed.
    pub fn add_disjoint(&mut self, a: &str, b: &str) -> bool {
        self.disjoint_facts.insert(DisjointFact::new(a, b))
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

impl OntologyGraph {
    /// Records a skipped construct. Informational only: the run continues.
    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        tracing::info!(
            construct = %diagnostic.construct,
            kind = ?diagnostic.kind,
            "{}",
            diagnostic.detail
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_for_is_idempotent() {
        let mut graph = OntologyGraph::new();
        graph
            .class_for("http://example.org/A")
            .attributes
            .insert(crate::nodes::NodeAttribute::Union);

        // A second lookup addresses the same node, not a fresh one.
        let again = graph.class_for("http://example.org/A");
        assert!(again.attributes.contains(&crate::nodes::NodeAttribute::Union));
        assert_eq!(graph.classes().len(), 1);
    }

    #[test]
    fn link_subclass_is_mutual() {
        let mut graph = OntologyGraph::new();
        graph.link_subclass("http://example.org/Dog", "http://example.org/Animal");

        let dog = graph.class("http://example.org/Dog").unwrap();
        assert!(dog.super_entities.contains("http://example.org/Animal"));
        let animal = graph.class("http://example.org/Animal").unwrap();
        assert!(animal.sub_entities.contains("http://example.org/Dog"));
    }

    #[test]
    fn value_reference_accumulates_per_key() {
        let mut graph = OntologyGraph::new();
        let vr = graph.value_reference_for("http://example.org/p", Quantifier::Some, ValueReferenceKind::Object);
        vr.ranges.insert("http://example.org/C1".to_string());
        let vr = graph.value_reference_for("http://example.org/p", Quantifier::Some, ValueReferenceKind::Object);
        vr.ranges.insert("http://example.org/C2".to_string());

        let vr = graph
            .value_reference("http://example.org/p", Quantifier::Some)
            .unwrap();
        assert_eq!(vr.ranges.len(), 2);

        // A different quantifier is a different node.
        graph.value_reference_for("http://example.org/p", Quantifier::All, ValueReferenceKind::Object);
        assert_eq!(graph.value_references().count(), 2);
    }

    #[test]
    fn searcher_sees_generator_writes() {
        let mut graph = OntologyGraph::new();
        assert!(!graph.searcher().has_disjoint("a", "b"));
        assert!(graph.add_disjoint("a", "b"));
        assert!(graph.searcher().has_disjoint("b", "a"));
        assert!(!graph.add_disjoint("b", "a"));
        assert_eq!(graph.disjoint_facts().len(), 1);
    }
}
