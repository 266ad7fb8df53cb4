//! Typed ontology axiom model (the input side of the conversion).
//!
//! This is the boundary the dispatchers consume: a closed, serde-round-
//! trippable tagged union of construct kinds, each carrying its own typed
//! payload. Loading an actual ontology file (RDF/XML, Turtle, ...) into this
//! model is a separate concern; any loader that produces these values — or
//! the equivalent JSON document — can feed the engine.

use owlviz_graph::Iri;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// IRI of the universal class.
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
/// IRI of the empty class.
pub const OWL_NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

// ============================================================================
// Expressions
// ============================================================================

/// A property position in a restriction. Object restrictions may sit on the
/// inverse of a named property; the graph renders both against the named one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyExpr {
    Named { iri: Iri },
    InverseOf { iri: Iri },
}

impl PropertyExpr {
    /// The named property underlying this expression.
    pub fn named(&self) -> &Iri {
        match self {
            PropertyExpr::Named { iri } | PropertyExpr::InverseOf { iri } => iri,
        }
    }
}

/// Range of a data restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataRange {
    Datatype { iri: Iri },
    LiteralEnumeration { literals: Vec<String> },
    DatatypeRestriction { on: Iri },
}

impl DataRange {
    pub fn as_datatype(&self) -> Option<&Iri> {
        match self {
            DataRange::Datatype { iri } => Some(iri),
            _ => None,
        }
    }
}

/// A class expression: a named class or an anonymous combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassExpression {
    Class {
        iri: Iri,
    },
    UnionOf {
        operands: Vec<ClassExpression>,
    },
    IntersectionOf {
        operands: Vec<ClassExpression>,
    },
    ComplementOf {
        operand: Box<ClassExpression>,
    },
    OneOf {
        individuals: Vec<Iri>,
    },
    SomeValuesFrom {
        property: PropertyExpr,
        filler: Box<ClassExpression>,
    },
    AllValuesFrom {
        property: PropertyExpr,
        filler: Box<ClassExpression>,
    },
    HasValue {
        property: PropertyExpr,
        individual: Iri,
    },
    MinCardinality {
        property: PropertyExpr,
        cardinality: u32,
        /// Absent or universal/empty means unqualified; anything else is a
        /// qualified restriction, which is not representable.
        filler: Option<Box<ClassExpression>>,
    },
    MaxCardinality {
        property: PropertyExpr,
        cardinality: u32,
        filler: Option<Box<ClassExpression>>,
    },
    ExactCardinality {
        property: PropertyExpr,
        cardinality: u32,
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: Iri,
        filler: DataRange,
    },
    DataAllValuesFrom {
        property: Iri,
        filler: DataRange,
    },
    DataHasValue {
        property: Iri,
        literal: String,
    },
    DataMinCardinality {
        property: Iri,
        cardinality: u32,
        filler: Option<DataRange>,
    },
    DataMaxCardinality {
        property: Iri,
        cardinality: u32,
        filler: Option<DataRange>,
    },
    DataExactCardinality {
        property: Iri,
        cardinality: u32,
        filler: Option<DataRange>,
    },
}

impl ClassExpression {
    pub fn named(iri: &str) -> Self {
        ClassExpression::Class {
            iri: iri.to_string(),
        }
    }

    /// The IRI if this expression is a plain named class.
    pub fn as_named(&self) -> Option<&Iri> {
        match self {
            ClassExpression::Class { iri } => Some(iri),
            _ => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.as_named().is_none()
    }

    /// Construct name used in diagnostics.
    pub fn construct_name(&self) -> &'static str {
        match self {
            ClassExpression::Class { .. } => "class",
            ClassExpression::UnionOf { .. } => "union_of",
            ClassExpression::IntersectionOf { .. } => "intersection_of",
            ClassExpression::ComplementOf { .. } => "complement_of",
            ClassExpression::OneOf { .. } => "one_of",
            ClassExpression::SomeValuesFrom { .. } => "some_values_from",
            ClassExpression::AllValuesFrom { .. } => "all_values_from",
            ClassExpression::HasValue { .. } => "has_value",
            ClassExpression::MinCardinality { .. } => "min_cardinality",
            ClassExpression::MaxCardinality { .. } => "max_cardinality",
            ClassExpression::ExactCardinality { .. } => "exact_cardinality",
            ClassExpression::DataSomeValuesFrom { .. } => "data_some_values_from",
            ClassExpression::DataAllValuesFrom { .. } => "data_all_values_from",
            ClassExpression::DataHasValue { .. } => "data_has_value",
            ClassExpression::DataMinCardinality { .. } => "data_min_cardinality",
            ClassExpression::DataMaxCardinality { .. } => "data_max_cardinality",
            ClassExpression::DataExactCardinality { .. } => "data_exact_cardinality",
        }
    }
}

// ============================================================================
// Axioms
// ============================================================================

/// Class-level axioms, dispatched with a subject-class context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassAxiom {
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses {
        operands: Vec<ClassExpression>,
    },
    DisjointClasses {
        operands: Vec<ClassExpression>,
    },
    DisjointUnion {
        base: ClassExpression,
        members: Vec<ClassExpression>,
    },
}

/// Property-level axioms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyAxiom {
    SubPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    Domain {
        property: Iri,
        domain: ClassExpression,
    },
    Range {
        property: Iri,
        range: ClassExpression,
    },
    InverseOf {
        first: Iri,
        second: Iri,
    },
    EquivalentProperties {
        properties: Vec<Iri>,
    },
    Functional {
        property: Iri,
    },
    InverseFunctional {
        property: Iri,
    },
    Transitive {
        property: Iri,
    },
    Symmetric {
        property: Iri,
    },
    PropertyChain {
        chain: Vec<Iri>,
        sup: Iri,
    },
    HasKey {
        class: Iri,
        properties: Vec<Iri>,
    },
}

/// Individual-level axioms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndividualAxiom {
    ClassAssertion {
        individual: Iri,
        class: ClassExpression,
    },
    SameIndividual {
        individuals: Vec<Iri>,
    },
    DifferentIndividuals {
        individuals: Vec<Iri>,
    },
    ObjectPropertyAssertion {
        subject: Iri,
        property: Iri,
        object: Iri,
    },
    DataPropertyAssertion {
        subject: Iri,
        property: Iri,
        value: String,
    },
}

/// One axiom as handed to the driver. Class axioms carry the subject class
/// whose processing produced them; the dispatcher may rebind that context
/// when recursing into nested anonymous expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "snake_case")]
pub enum Axiom {
    Class { subject: Iri, axiom: ClassAxiom },
    Property { axiom: PropertyAxiom },
    Individual { axiom: IndividualAxiom },
}

/// The ontology as the engine sees it: an identifier plus a sequence of
/// axioms, already discriminated into the closed construct set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ontology {
    pub iri: Iri,
    pub axioms: Vec<Axiom>,
}

#[derive(Debug, Error)]
pub enum OntologyDocError {
    #[error("invalid ontology document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Ontology {
    pub fn from_json_str(text: &str) -> Result<Self, OntologyDocError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self) -> Result<String, OntologyDocError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
