//! Typed graph entities.
//!
//! Every node carries the relation collections that the axiom dispatchers
//! populate. Relation sets are `BTreeSet` so that repeated contributions from
//! different axioms merge deterministically regardless of axiom order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque entity identifier (a resource IRI in practice).
pub type Iri = String;

// ============================================================================
// Attributes and keys
// ============================================================================

/// Additive rendering tags on a node. Multiple tags coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeAttribute {
    Equivalent,
    Union,
    Intersection,
    Complement,
    DisjointUnion,
    Functional,
    InverseFunctional,
    Transitive,
    Symmetric,
}

/// Restriction modality of a quantified restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    All,
    Some,
}

/// Whether a value reference was produced by an object or a data restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueReferenceKind {
    Object,
    Datatype,
}

// ============================================================================
// Nodes
// ============================================================================

/// A named class of the source ontology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNode {
    pub iri: Iri,
    pub attributes: BTreeSet<NodeAttribute>,
    pub super_entities: BTreeSet<Iri>,
    pub sub_entities: BTreeSet<Iri>,
    pub equivalent_elements: BTreeSet<Iri>,
    pub disjoint_union_members: BTreeSet<Iri>,
    pub union_members: BTreeSet<Iri>,
    pub intersection_members: BTreeSet<Iri>,
    /// At most one complement target; a later complement axiom overwrites.
    pub complement_target: Option<Iri>,
    pub individuals: BTreeSet<Iri>,
}

impl ClassNode {
    pub fn new(iri: &str) -> Self {
        Self {
            iri: iri.to_string(),
            ..Self::default()
        }
    }
}

/// A named property of the source ontology.
///
/// Cardinality bounds use overwrite semantics: the latest axiom that sets a
/// bound replaces any earlier value for that bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyNode {
    pub iri: Iri,
    pub attributes: BTreeSet<NodeAttribute>,
    pub min_cardinality: Option<u32>,
    pub max_cardinality: Option<u32>,
    pub exact_cardinality: Option<u32>,
    pub super_properties: BTreeSet<Iri>,
    pub sub_properties: BTreeSet<Iri>,
    pub equivalent_properties: BTreeSet<Iri>,
    pub domains: BTreeSet<Iri>,
    pub ranges: BTreeSet<Iri>,
    /// Inverse pairing; a later inverse axiom overwrites.
    pub inverse_of: Option<Iri>,
}

impl PropertyNode {
    pub fn new(iri: &str) -> Self {
        Self {
            iri: iri.to_string(),
            ..Self::default()
        }
    }
}

/// Synthetic node for a quantified restriction on a property.
///
/// One node exists per `(property, quantifier)` key; repeated restrictions on
/// the same key widen `domains`/`ranges` instead of creating new nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueReferenceNode {
    pub property: Iri,
    pub quantifier: Quantifier,
    pub kind: ValueReferenceKind,
    pub domains: BTreeSet<Iri>,
    pub ranges: BTreeSet<Iri>,
}

impl ValueReferenceNode {
    pub fn new(property: &str, quantifier: Quantifier, kind: ValueReferenceKind) -> Self {
        Self {
            property: property.to_string(),
            quantifier,
            kind,
            domains: BTreeSet::new(),
            ranges: BTreeSet::new(),
        }
    }
}

/// Derived reference to a named datatype used as a restriction range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatatypeNode {
    pub iri: Iri,
}

// ============================================================================
// Disjointness
// ============================================================================

/// An unordered, deduplicated pair of disjoint classes.
///
/// The constructor normalizes operand order, so `{A, B}` and `{B, A}` compare
/// equal and at most one fact per unordered pair can exist in a set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DisjointFact {
    left: Iri,
    right: Iri,
}

impl DisjointFact {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                left: a.to_string(),
                right: b.to_string(),
            }
        } else {
            Self {
                left: b.to_string(),
                right: a.to_string(),
            }
        }
    }

    pub fn left(&self) -> &Iri {
        &self.left
    }

    pub fn right(&self) -> &Iri {
        &self.right
    }

    pub fn connects(&self, a: &str, b: &str) -> bool {
        *self == Self::new(a, b)
    }
}
