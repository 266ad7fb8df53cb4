//! Axiom-to-graph lowering engine.
//!
//! Interprets each logical construct of an ontology (subclass, equivalence,
//! disjointness, cardinality, quantified restriction, boolean combinations,
//! individual enumeration) and mutates a shared [`owlviz_graph::OntologyGraph`]
//! accordingly. The construct set is a closed tagged union; anything outside
//! it, and any shape inside it that the graph schema cannot carry, degrades
//! to an informational diagnostic. The engine never aborts a run.
//!
//! Layout:
//! - [`ontology`]: the typed axiom model the engine consumes.
//! - [`classes`], [`properties`], [`individuals`]: the per-level dispatchers.
//! - [`driver`]: run orchestration and the fidelity report.

pub mod classes;
pub mod driver;
pub mod individuals;
pub mod ontology;
pub mod properties;

pub use driver::{convert, convert_json_document, Conversion};
pub use ontology::{
    Axiom, ClassAxiom, ClassExpression, DataRange, IndividualAxiom, Ontology, OntologyDocError,
    PropertyAxiom, PropertyExpr,
};
