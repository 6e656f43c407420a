use crate::{ActiveGraph, QueryRepresentation, Service, SigmaTerm};
use rustc_hash::FxHashSet;
use sparql_containment_encoding::{scoped_variable_name, TermEncoder};
use sparql_containment_model::{
    GraphPattern, ModelError, NamedNodePattern, Query, Term, Variable,
};
use tracing::trace;

/// Builds the [QueryRepresentation] of a query by traversing its algebra once.
///
/// The traversal handles the operators as follows:
/// - `Bgp`: every triple pattern becomes a [SigmaTerm] in the current [ActiveGraph].
/// - `Project`: the outermost projection is the final projection of the query. Nested
///   projections (sub-selects) are descended into but do not change the final projection. The
///   variables that a sub-select does not project are renamed into a fresh scope of the encoder.
///   They neither join with the enclosing pattern nor count as used variables.
/// - `Join`, `Distinct`, `Reduced` and `OrderBy` are descended into.
/// - `Service`: the inner pattern is descended into with the endpoint as the active graph. In
///   addition, the inner pattern is built recursively into a [Service]. Clauses that name the
///   same endpoint are joined into a single [Service].
/// - Every other operator is rejected with [ModelError::UnsupportedPattern].
///
/// All terms are encoded with the given [TermEncoder]. The encoder should be shared by all
/// representations that take part in one containment check.
pub struct QueryRepresentationBuilder<'encoder> {
    encoder: &'encoder mut TermEncoder,
}

impl<'encoder> QueryRepresentationBuilder<'encoder> {
    pub fn new(encoder: &'encoder mut TermEncoder) -> Self {
        Self { encoder }
    }

    /// Builds the representation of a `SELECT` or `ASK` query. An `ASK` query has no projection.
    ///
    /// Queries with a dataset clause (`FROM` or `FROM NAMED`) are rejected.
    pub fn build_query(&mut self, query: &Query) -> Result<QueryRepresentation, ModelError> {
        match query {
            Query::Select {
                dataset: Some(_), ..
            }
            | Query::Ask {
                dataset: Some(_), ..
            } => ModelError::unsupported("FROM"),
            Query::Select { pattern, .. } => self.build(pattern),
            Query::Ask { pattern, .. } => self.build_pattern(pattern, false),
            Query::Construct { .. } => ModelError::unsupported("CONSTRUCT query"),
            Query::Describe { .. } => ModelError::unsupported("DESCRIBE query"),
        }
    }

    /// Builds the representation of a graph pattern.
    pub fn build(&mut self, pattern: &GraphPattern) -> Result<QueryRepresentation, ModelError> {
        self.build_pattern(pattern, true)
    }

    fn build_pattern(
        &mut self,
        pattern: &GraphPattern,
        with_projection: bool,
    ) -> Result<QueryRepresentation, ModelError> {
        let mut state = CollectionState::default();
        self.collect(pattern, &ActiveGraph::DefaultGraph, with_projection, &mut state)?;

        let mut services = Vec::with_capacity(state.services.len());
        for (url, patterns) in state.services {
            trace!("Building representation of SERVICE <{url}>");
            let query = self.build(&join_all(patterns))?;
            services.push(Service::new(url, query));
        }

        Ok(QueryRepresentation::new(
            state.sigmas,
            state.used_variables,
            state.projection,
            services,
        ))
    }

    fn collect(
        &mut self,
        pattern: &GraphPattern,
        graph: &ActiveGraph,
        is_root: bool,
        state: &mut CollectionState,
    ) -> Result<(), ModelError> {
        match pattern {
            GraphPattern::Bgp { patterns } => {
                for pattern in patterns {
                    let terms = Term::from_triple_pattern(pattern)?;
                    for variable in terms.iter().filter_map(Term::as_variable) {
                        if state.hiding_scope(variable).is_none() {
                            state.use_variable(variable);
                        }
                    }
                    let terms = terms.map(|term| state.resolve(term));
                    state
                        .sigmas
                        .push(SigmaTerm::encode(self.encoder, &terms, graph.clone()));
                }
                Ok(())
            }
            GraphPattern::Project { inner, variables } => {
                let variables = variables
                    .iter()
                    .map(|variable| variable.as_str().to_owned());
                if is_root {
                    state.projection = Some(variables.collect());
                    return self.collect(inner, graph, false, state);
                }

                state.sub_selects.push(SubSelect {
                    scope: self.encoder.open_scope(),
                    projection: variables.collect(),
                });
                let result = self.collect(inner, graph, false, state);
                state.sub_selects.pop();
                result
            }
            GraphPattern::Distinct { inner }
            | GraphPattern::Reduced { inner }
            | GraphPattern::OrderBy { inner, .. } => self.collect(inner, graph, is_root, state),
            GraphPattern::Join { left, right } => {
                self.collect(left, graph, false, state)?;
                self.collect(right, graph, false, state)
            }
            GraphPattern::Service { name, inner, .. } => {
                let NamedNodePattern::NamedNode(endpoint) = name else {
                    return Err(ModelError::UnsupportedServiceName(name.to_string()));
                };

                state.add_service(endpoint.as_str(), inner.as_ref());
                let service_graph =
                    ActiveGraph::Service(self.encoder.encode(&Term::Iri(endpoint.clone())));
                self.collect(inner, &service_graph, false, state)
            }
            GraphPattern::Path { .. } => ModelError::unsupported("property path"),
            GraphPattern::LeftJoin { .. } => ModelError::unsupported("OPTIONAL"),
            GraphPattern::Union { .. } => ModelError::unsupported("UNION"),
            GraphPattern::Minus { .. } => ModelError::unsupported("MINUS"),
            GraphPattern::Filter { .. } => ModelError::unsupported("FILTER"),
            GraphPattern::Extend { .. } => ModelError::unsupported("BIND"),
            GraphPattern::Values { .. } => ModelError::unsupported("VALUES"),
            GraphPattern::Group { .. } => ModelError::unsupported("GROUP BY"),
            GraphPattern::Slice { .. } => ModelError::unsupported("LIMIT/OFFSET"),
            GraphPattern::Graph { .. } => ModelError::unsupported("GRAPH"),
            #[allow(
                unreachable_patterns,
                reason = "Lateral joins only exist if spargebra is compiled with sep-0006"
            )]
            _ => ModelError::unsupported("LATERAL"),
        }
    }
}

#[derive(Debug, Default)]
struct CollectionState {
    sigmas: Vec<SigmaTerm>,
    used_variables: Vec<String>,
    seen_variables: FxHashSet<String>,
    projection: Option<Vec<String>>,
    services: Vec<(String, Vec<GraphPattern>)>,
    sub_selects: Vec<SubSelect>,
}

/// A sub-select that encloses the pattern currently being collected.
#[derive(Debug)]
struct SubSelect {
    scope: String,
    projection: FxHashSet<String>,
}

impl CollectionState {
    /// Returns the scope of the innermost sub-select that hides `variable`, if any.
    fn hiding_scope(&self, variable: &str) -> Option<&str> {
        self.sub_selects
            .iter()
            .rev()
            .find(|sub_select| !sub_select.projection.contains(variable))
            .map(|sub_select| sub_select.scope.as_str())
    }

    /// Renames a variable that is hidden by an enclosing sub-select into the scope of that
    /// sub-select.
    fn resolve(&self, term: Term) -> Term {
        match term {
            Term::Variable(variable) => match self.hiding_scope(variable.as_str()) {
                Some(scope) => Term::Variable(Variable::new_unchecked(scoped_variable_name(
                    variable.as_str(),
                    scope,
                ))),
                None => Term::Variable(variable),
            },
            term => term,
        }
    }

    fn use_variable(&mut self, variable: &str) {
        if self.seen_variables.insert(variable.to_owned()) {
            self.used_variables.push(variable.to_owned());
        }
    }

    fn add_service(&mut self, url: &str, inner: &GraphPattern) {
        match self.services.iter_mut().find(|(existing, _)| existing == url) {
            Some((_, patterns)) => patterns.push(inner.clone()),
            None => self.services.push((url.to_owned(), vec![inner.clone()])),
        }
    }
}

/// Joins the patterns of multiple `SERVICE` clauses that address the same endpoint.
fn join_all(patterns: Vec<GraphPattern>) -> GraphPattern {
    patterns
        .into_iter()
        .reduce(|left, right| GraphPattern::Join {
            left: Box::new(left),
            right: Box::new(right),
        })
        .unwrap_or_else(|| GraphPattern::Bgp {
            patterns: Vec::new(),
        })
}
