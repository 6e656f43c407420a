use crate::ActiveGraph;
use sparql_containment_encoding::{Constant, TermEncoder};
use sparql_containment_model::Term;

/// The formal representation of a single triple pattern.
///
/// Each position holds the constant of the encoded term. Together with the active graph, a sigma
/// term is rendered as one application of the dataset-membership predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SigmaTerm {
    subject: Constant,
    predicate: Constant,
    object: Constant,
    graph: ActiveGraph,
}

impl SigmaTerm {
    /// Encodes the given terms.
    pub fn encode(encoder: &mut TermEncoder, terms: &[Term; 3], graph: ActiveGraph) -> Self {
        let [subject, predicate, object] = terms;
        Self {
            subject: encoder.encode(subject),
            predicate: encoder.encode(predicate),
            object: encoder.encode(object),
            graph,
        }
    }

    pub fn subject(&self) -> &Constant {
        &self.subject
    }

    pub fn predicate(&self) -> &Constant {
        &self.predicate
    }

    pub fn object(&self) -> &Constant {
        &self.object
    }

    pub fn graph(&self) -> &ActiveGraph {
        &self.graph
    }

    /// Returns every constant that this sigma term refers to, the graph included.
    pub fn constants(&self) -> impl Iterator<Item = &Constant> {
        [&self.subject, &self.predicate, &self.object]
            .into_iter()
            .chain(self.graph.constant())
    }

    /// Returns a copy in which every variable lives in the given local scope.
    #[must_use]
    pub fn scoped(&self, scope: &str) -> Self {
        Self {
            subject: self.subject.scoped(scope),
            predicate: self.predicate.scoped(scope),
            object: self.object.scoped(scope),
            graph: self.graph.clone(),
        }
    }
}
