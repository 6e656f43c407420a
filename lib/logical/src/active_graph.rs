use sparql_containment_encoding::{Constant, DEFAULT_GRAPH};
use std::fmt::Display;

/// The active graph defines in which graph a triple pattern is matched.
///
/// The dataset-membership predicate of the formulas is 4-ary. The active graph fills its fourth
/// position.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActiveGraph {
    /// Only the default graph forms the active graph.
    #[default]
    DefaultGraph,
    /// The patterns are evaluated by a federated endpoint (`SERVICE <iri> { ... }`). The graph is
    /// identified by the constant of the endpoint's IRI.
    Service(Constant),
}

impl ActiveGraph {
    /// Returns the constant that must be declared for this graph, if any. The default graph is
    /// declared by the formula prelude.
    pub fn constant(&self) -> Option<&Constant> {
        match self {
            ActiveGraph::DefaultGraph => None,
            ActiveGraph::Service(constant) => Some(constant),
        }
    }
}

impl Display for ActiveGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveGraph::DefaultGraph => write!(f, "<{DEFAULT_GRAPH}>"),
            ActiveGraph::Service(constant) => write!(f, "{constant}"),
        }
    }
}
