//! Read-only duplicate-detection queries over the evolving graph.

use crate::graph::OntologyGraph;
use crate::nodes::DisjointFact;

/// Borrowed query view over a graph. Because a run is single-threaded and the
/// view borrows the same arena the generator writes to, every query observes
/// all prior writes with no staleness window.
pub struct Searcher<'a> {
    graph: &'a OntologyGraph,
}

impl<'a> Searcher<'a> {
    pub(crate) fn new(graph: &'a OntologyGraph) -> Self {
        Self { graph }
    }

    /// True if the unordered pair `{a, b}` is already recorded disjoint.
    pub fn has_disjoint(&self, a: &str, b: &str) -> bool {
        self.graph.disjoint_facts().contains(&DisjointFact::new(a, b))
    }
}
