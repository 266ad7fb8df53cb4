//! Class-level axiom dispatcher.
//!
//! The engine of the conversion: an exhaustive match over the closed set of
//! class constructs. Each arm applies the construct-specific policy against
//! the shared graph; every shape that cannot be represented degrades to a
//! recorded diagnostic with zero mutation. Nothing here is a hard failure.
//!
//! Dispatch carries a **context class** — the subject of processing. The
//! context is rebound when an equivalence axiom anchors on a named class and
//! recursion descends into the anonymous operands.

use crate::individuals::process_individual;
use crate::ontology::{ClassAxiom, ClassExpression, DataRange, PropertyExpr, OWL_NOTHING, OWL_THING};
use owlviz_graph::{
    Diagnostic, Iri, NodeAttribute, OntologyGraph, Quantifier, ValueReferenceKind,
};

/// Nesting bound for recursive expression dispatch. Source ontologies control
/// expression depth, so the bound protects the call stack on pathological
/// inputs; exceeding it is a diagnostic, not a failure.
pub const MAX_EXPRESSION_DEPTH: usize = 64;

/// Applies one class-level axiom against the graph, with `subject` as the
/// context class.
pub fn dispatch_class_axiom(graph: &mut OntologyGraph, subject: &Iri, axiom: &ClassAxiom) {
    match axiom {
        ClassAxiom::SubClassOf { sub, sup } => apply_subclass(graph, subject, sub, sup),
        ClassAxiom::EquivalentClasses { operands } => apply_equivalent(graph, subject, operands),
        ClassAxiom::DisjointClasses { operands } => apply_disjoint(graph, operands),
        ClassAxiom::DisjointUnion { base, members } => apply_disjoint_union(graph, base, members),
    }
}

// ============================================================================
// Axiom-level constructs
// ============================================================================

fn apply_subclass(
    graph: &mut OntologyGraph,
    subject: &Iri,
    sub: &ClassExpression,
    sup: &ClassExpression,
) {
    // General class inclusions (anonymous subject side) are not representable.
    let Some(sub_iri) = sub.as_named() else {
        skip_unsupported(
            graph,
            "sub_class_of",
            format!("general class inclusion with anonymous subject (context {subject})"),
        );
        return;
    };

    match sup.as_named() {
        Some(sup_iri) => graph.link_subclass(sub_iri, sup_iri),
        None => dispatch_expression(graph, subject, sup, 1),
    }
}

/// Equivalence policy:
///
/// - Exactly one named operand: that class becomes the anchor and every other
///   operand is dispatched with the anchor as context.
/// - More than one named operand (ambiguous case): every named operand other
///   than the context class is recorded into the context's equivalent
///   elements and the context is tagged; anonymous operands are skipped
///   individually.
/// - No named operand: nothing to anchor on, diagnostic only.
fn apply_equivalent(graph: &mut OntologyGraph, subject: &Iri, operands: &[ClassExpression]) {
    let named: Vec<&Iri> = operands.iter().filter_map(|op| op.as_named()).collect();

    match named.len() {
        0 => skip_unsupported(
            graph,
            "equivalent_classes",
            format!("no named operand to anchor on (context {subject})"),
        ),
        1 => {
            let anchor = named[0].clone();
            for operand in operands {
                if operand.as_named() == Some(&anchor) {
                    continue;
                }
                dispatch_expression(graph, &anchor, operand, 1);
            }
        }
        _ => {
            for operand in operands {
                match operand.as_named() {
                    Some(iri) if iri != subject => {
                        graph
                            .class_for(subject)
                            .equivalent_elements
                            .insert(iri.clone());
                    }
                    Some(_) => {}
                    None => skip_unsupported(
                        graph,
                        "equivalent_classes",
                        format!(
                            "anonymous {} operand in multi-named equivalence (context {subject})",
                            operand.construct_name()
                        ),
                    ),
                }
            }
            graph
                .class_for(subject)
                .attributes
                .insert(NodeAttribute::Equivalent);
        }
    }
}

fn apply_disjoint(graph: &mut OntologyGraph, operands: &[ClassExpression]) {
    let mut named: Vec<Iri> = Vec::new();
    for operand in operands {
        match operand.as_named() {
            Some(iri) => {
                if !named.contains(iri) {
                    named.push(iri.clone());
                }
            }
            None => skip_unsupported(
                graph,
                "disjoint_classes",
                format!("anonymous {} operand in disjointness", operand.construct_name()),
            ),
        }
    }

    // Expand to pairwise facts, creating each unordered pair at most once.
    for (index, a) in named.iter().enumerate() {
        for b in &named[index + 1..] {
            if !graph.searcher().has_disjoint(a, b) {
                graph.add_disjoint(a, b);
            }
        }
    }
}

fn apply_disjoint_union(graph: &mut OntologyGraph, base: &ClassExpression, members: &[ClassExpression]) {
    let Some(base_iri) = base.as_named() else {
        skip_unsupported(graph, "disjoint_union", "disjoint union base is anonymous");
        return;
    };
    let base_iri = base_iri.clone();

    graph
        .class_for(&base_iri)
        .attributes
        .insert(NodeAttribute::DisjointUnion);

    for member in members {
        match member.as_named() {
            Some(iri) => {
                graph
                    .class_for(&base_iri)
                    .disjoint_union_members
                    .insert(iri.clone());
            }
            None => skip_unsupported(
                graph,
                "disjoint_union",
                format!(
                    "anonymous {} member in disjoint union of {base_iri}",
                    member.construct_name()
                ),
            ),
        }
    }
}

// ============================================================================
// Expression-level constructs
// ============================================================================

/// Applies one class expression against the graph with `subject` as context.
/// Used for the anonymous sides of subclass and equivalence axioms.
pub(crate) fn dispatch_expression(
    graph: &mut OntologyGraph,
    subject: &Iri,
    expr: &ClassExpression,
    depth: usize,
) {
    if depth > MAX_EXPRESSION_DEPTH {
        skip_unsupported(
            graph,
            expr.construct_name(),
            format!("expression nesting deeper than {MAX_EXPRESSION_DEPTH} (context {subject})"),
        );
        return;
    }

    match expr {
        ClassExpression::UnionOf { operands } => {
            apply_members(graph, subject, operands, NodeAttribute::Union)
        }
        ClassExpression::IntersectionOf { operands } => {
            apply_members(graph, subject, operands, NodeAttribute::Intersection)
        }
        ClassExpression::ComplementOf { operand } => apply_complement(graph, subject, operand),
        ClassExpression::OneOf { individuals } => {
            for individual in individuals {
                process_individual(graph, subject, individual);
            }
        }
        ClassExpression::SomeValuesFrom { property, filler } => {
            apply_object_restriction(graph, subject, property, filler, Quantifier::Some)
        }
        ClassExpression::AllValuesFrom { property, filler } => {
            apply_object_restriction(graph, subject, property, filler, Quantifier::All)
        }
        ClassExpression::DataSomeValuesFrom { property, filler } => {
            apply_data_restriction(graph, subject, property, filler, Quantifier::Some)
        }
        ClassExpression::DataAllValuesFrom { property, filler } => {
            apply_data_restriction(graph, subject, property, filler, Quantifier::All)
        }
        ClassExpression::MinCardinality {
            property,
            cardinality,
            filler,
        } => apply_object_cardinality(graph, property, *cardinality, filler, Bound::Min),
        ClassExpression::MaxCardinality {
            property,
            cardinality,
            filler,
        } => apply_object_cardinality(graph, property, *cardinality, filler, Bound::Max),
        ClassExpression::ExactCardinality {
            property,
            cardinality,
            filler,
        } => apply_object_cardinality(graph, property, *cardinality, filler, Bound::Exact),
        ClassExpression::DataMinCardinality {
            property,
            cardinality,
            filler,
        } => apply_data_cardinality(graph, property, *cardinality, filler, Bound::Min),
        ClassExpression::DataMaxCardinality {
            property,
            cardinality,
            filler,
        } => apply_data_cardinality(graph, property, *cardinality, filler, Bound::Max),
        ClassExpression::DataExactCardinality {
            property,
            cardinality,
            filler,
        } => apply_data_cardinality(graph, property, *cardinality, filler, Bound::Exact),
        ClassExpression::DataHasValue { property, .. } => skip_unsupported(
            graph,
            "data_has_value",
            format!("data has-value on {property} is not represented"),
        ),
        // Everything else falls to the default handler: record and move on.
        other => skip_unknown(
            graph,
            other.construct_name(),
            format!("construct not in the modeled set (context {subject})"),
        ),
    }
}

/// Shared policy for union-of and intersection-of: each named operand joins
/// the context's member set and sets the tag; each anonymous operand is
/// skipped individually without aborting the rest of the axiom.
fn apply_members(
    graph: &mut OntologyGraph,
    subject: &Iri,
    operands: &[ClassExpression],
    attribute: NodeAttribute,
) {
    let construct = match attribute {
        NodeAttribute::Union => "union_of",
        _ => "intersection_of",
    };

    for operand in operands {
        match operand.as_named() {
            Some(iri) => {
                let node = graph.class_for(subject);
                match attribute {
                    NodeAttribute::Union => node.union_members.insert(iri.clone()),
                    _ => node.intersection_members.insert(iri.clone()),
                };
                node.attributes.insert(attribute);
            }
            None => skip_unsupported(
                graph,
                construct,
                format!(
                    "anonymous {} operand (context {subject})",
                    operand.construct_name()
                ),
            ),
        }
    }
}

fn apply_complement(graph: &mut OntologyGraph, subject: &Iri, operand: &ClassExpression) {
    let Some(target) = operand.as_named() else {
        skip_unsupported(
            graph,
            "complement_of",
            format!(
                "anonymous {} operand in complement (context {subject})",
                operand.construct_name()
            ),
        );
        return;
    };

    let node = graph.class_for(subject);
    node.complement_target = Some(target.clone());
    node.attributes.insert(NodeAttribute::Complement);
}

fn apply_object_restriction(
    graph: &mut OntologyGraph,
    subject: &Iri,
    property: &PropertyExpr,
    filler: &ClassExpression,
    quantifier: Quantifier,
) {
    let Some(range) = filler.as_named() else {
        skip_unsupported(
            graph,
            match quantifier {
                Quantifier::All => "all_values_from",
                Quantifier::Some => "some_values_from",
            },
            format!(
                "anonymous {} filler on {} (context {subject})",
                filler.construct_name(),
                property.named()
            ),
        );
        return;
    };

    let range = range.clone();
    let reference =
        graph.value_reference_for(property.named(), quantifier, ValueReferenceKind::Object);
    reference.domains.insert(subject.clone());
    reference.ranges.insert(range);
}

fn apply_data_restriction(
    graph: &mut OntologyGraph,
    subject: &Iri,
    property: &Iri,
    filler: &DataRange,
    quantifier: Quantifier,
) {
    let Some(datatype) = filler.as_datatype() else {
        skip_unsupported(
            graph,
            match quantifier {
                Quantifier::All => "data_all_values_from",
                Quantifier::Some => "data_some_values_from",
            },
            format!("range of data restriction on {property} is not a named datatype"),
        );
        return;
    };

    let datatype = graph.datatype_reference_for(datatype);
    let reference = graph.value_reference_for(property, quantifier, ValueReferenceKind::Datatype);
    reference.domains.insert(subject.clone());
    reference.ranges.insert(datatype);
}

#[derive(Clone, Copy)]
enum Bound {
    Min,
    Max,
    Exact,
}

impl Bound {
    fn construct_name(self) -> &'static str {
        match self {
            Bound::Min => "min_cardinality",
            Bound::Max => "max_cardinality",
            Bound::Exact => "exact_cardinality",
        }
    }
}

/// True when the filler leaves the restriction unqualified: absent, the
/// universal class, or the empty class.
fn is_unqualified(filler: &Option<Box<ClassExpression>>) -> bool {
    match filler.as_deref() {
        None => true,
        Some(ClassExpression::Class { iri }) => iri == OWL_THING || iri == OWL_NOTHING,
        Some(_) => false,
    }
}

fn apply_object_cardinality(
    graph: &mut OntologyGraph,
    property: &PropertyExpr,
    cardinality: u32,
    filler: &Option<Box<ClassExpression>>,
    bound: Bound,
) {
    if !is_unqualified(filler) {
        skip_unsupported(
            graph,
            bound.construct_name(),
            format!("qualified cardinality on {} is not represented", property.named()),
        );
        return;
    }

    set_bound(graph, property.named(), cardinality, bound);
}

fn apply_data_cardinality(
    graph: &mut OntologyGraph,
    property: &Iri,
    cardinality: u32,
    filler: &Option<DataRange>,
    bound: Bound,
) {
    if filler.is_some() {
        skip_unsupported(
            graph,
            bound.construct_name(),
            format!("qualified data cardinality on {property} is not represented"),
        );
        return;
    }

    set_bound(graph, property, cardinality, bound);
}

fn set_bound(graph: &mut OntologyGraph, property: &str, cardinality: u32, bound: Bound) {
    let node = graph.property_for(property);
    // Last write wins.
    match bound {
        Bound::Min => node.min_cardinality = Some(cardinality),
        Bound::Max => node.max_cardinality = Some(cardinality),
        Bound::Exact => node.exact_cardinality = Some(cardinality),
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

pub(crate) fn skip_unsupported(graph: &mut OntologyGraph, construct: &str, detail: impl Into<String>) {
    graph.push_diagnostic(Diagnostic::unsupported_shape(construct, detail));
}

pub(crate) fn skip_unknown(graph: &mut OntologyGraph, construct: &str, detail: impl Into<String>) {
    graph.push_diagnostic(Diagnostic::unknown_construct(construct, detail));
}
