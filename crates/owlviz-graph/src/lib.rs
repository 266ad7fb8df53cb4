//! Visual graph model for converted ontologies.
//!
//! This crate owns the node-and-edge model that the axiom dispatchers in
//! `owlviz-convert` populate:
//!
//! - [`nodes`]: the typed graph entities (classes, properties, synthetic
//!   value references) and their relation collections.
//! - [`graph`]: the per-run arena with get-or-create identity, the generator
//!   for synthetic elements, and the accumulated diagnostics.
//! - [`searcher`]: read-only duplicate-detection queries.
//! - [`document`]: the deterministic serde document handed to a visualizer.
//!
//! One `OntologyGraph` exists per conversion run. Nodes are created lazily on
//! first reference, are never deleted mid-run, and are treated as immutable
//! once exported as a document.

pub mod diagnostics;
pub mod document;
pub mod graph;
pub mod nodes;
pub mod searcher;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use document::GraphDocument;
pub use graph::OntologyGraph;
pub use nodes::{
    ClassNode, DatatypeNode, DisjointFact, Iri, NodeAttribute, PropertyNode, Quantifier,
    ValueReferenceKind, ValueReferenceNode,
};
pub use searcher::Searcher;
