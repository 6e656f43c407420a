use sparql_containment_model::{
    GraphPattern, NamedNodePattern, Query, TermPattern, TriplePattern, Variable,
};
use std::collections::BTreeSet;

/// Returns the graph pattern of any query form.
pub fn query_pattern(query: &Query) -> &GraphPattern {
    match query {
        Query::Select { pattern, .. }
        | Query::Construct { pattern, .. }
        | Query::Describe { pattern, .. }
        | Query::Ask { pattern, .. } => pattern,
    }
}

/// Returns whether the final projection of the query drops at least one in-scope variable.
///
/// `SELECT *` and a `SELECT` that lists every in-scope variable have no projection in this sense.
pub fn has_projection(query: &Query) -> bool {
    let mut pattern = query_pattern(query);
    loop {
        match pattern {
            GraphPattern::Distinct { inner }
            | GraphPattern::Reduced { inner }
            | GraphPattern::OrderBy { inner, .. }
            | GraphPattern::Slice { inner, .. } => pattern = inner.as_ref(),
            GraphPattern::Project { inner, variables } => {
                let mut drops_variable = false;
                inner.on_in_scope_variable(|variable| {
                    drops_variable |= !variables.contains(variable);
                });
                return drops_variable;
            }
            _ => return false,
        }
    }
}

/// Returns the names of all variables that occur in a triple pattern of the query, including the
/// ones in `SERVICE` clauses.
pub fn query_variables(query: &Query) -> BTreeSet<String> {
    let mut variables = BTreeSet::new();
    walk_graph_pattern(query_pattern(query), &mut |pattern| {
        match pattern {
            GraphPattern::Bgp { patterns } => {
                for variable in patterns.iter().flat_map(triple_pattern_variables) {
                    variables.insert(variable.as_str().to_owned());
                }
            }
            GraphPattern::Path {
                subject, object, ..
            } => {
                for variable in [subject, object].into_iter().filter_map(as_variable) {
                    variables.insert(variable.as_str().to_owned());
                }
            }
            _ => {}
        }
        true
    });
    variables
}

/// Returns whether the query contains a property path that could not be expressed as plain triple
/// patterns.
pub fn has_property_path(query: &Query) -> bool {
    let mut found = false;
    walk_graph_pattern(query_pattern(query), &mut |pattern| {
        found |= matches!(pattern, GraphPattern::Path { .. });
        !found
    });
    found
}

/// Visits `pattern` and its descendants in pre-order. The children of a pattern are only visited
/// if `visitor` returns `true` for it.
pub fn walk_graph_pattern(
    pattern: &GraphPattern,
    visitor: &mut impl FnMut(&GraphPattern) -> bool,
) {
    if !visitor(pattern) {
        return;
    }

    match pattern {
        GraphPattern::Join { left, right }
        | GraphPattern::LeftJoin { left, right, .. }
        | GraphPattern::Union { left, right }
        | GraphPattern::Minus { left, right } => {
            walk_graph_pattern(left, visitor);
            walk_graph_pattern(right, visitor);
        }
        GraphPattern::Filter { inner, .. }
        | GraphPattern::Graph { inner, .. }
        | GraphPattern::Extend { inner, .. }
        | GraphPattern::OrderBy { inner, .. }
        | GraphPattern::Project { inner, .. }
        | GraphPattern::Distinct { inner }
        | GraphPattern::Reduced { inner }
        | GraphPattern::Slice { inner, .. }
        | GraphPattern::Group { inner, .. }
        | GraphPattern::Service { inner, .. } => walk_graph_pattern(inner, visitor),
        GraphPattern::Bgp { .. } | GraphPattern::Path { .. } | GraphPattern::Values { .. } => {}
        #[allow(
            unreachable_patterns,
            reason = "Lateral joins only exist if spargebra is compiled with sep-0006"
        )]
        _ => {}
    }
}

fn triple_pattern_variables(pattern: &TriplePattern) -> impl Iterator<Item = &Variable> {
    let predicate = match &pattern.predicate {
        NamedNodePattern::Variable(variable) => Some(variable),
        NamedNodePattern::NamedNode(_) => None,
    };
    as_variable(&pattern.subject)
        .into_iter()
        .chain(predicate)
        .chain(as_variable(&pattern.object))
}

fn as_variable(pattern: &TermPattern) -> Option<&Variable> {
    match pattern {
        TermPattern::Variable(variable) => Some(variable),
        _ => None,
    }
}
