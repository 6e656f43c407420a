use crate::ModelError;
use spargebra::term::{
    BlankNode, Literal, NamedNode, NamedNodePattern, TermPattern, TriplePattern, Variable,
};
use std::fmt::{Display, Formatter};

/// The kind of a [Term].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    Iri,
    Literal,
    Variable,
    BlankNode,
}

/// An RDF term that occurs in the subject, predicate or object position of a triple pattern.
///
/// This is the closed set of term kinds the containment check can reason about. Conversions from
/// the algebra's [TermPattern] reject everything else (e.g., quoted triples).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(NamedNode),
    Literal(Literal),
    Variable(Variable),
    BlankNode(BlankNode),
}

impl Term {
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::Literal(_) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::BlankNode(_) => TermKind::BlankNode,
        }
    }

    /// Returns the lexical value of the term without any syntax (e.g., no `?` for variables or
    /// no quotes for literals).
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(inner) => inner.as_str(),
            Term::Literal(inner) => inner.value(),
            Term::Variable(inner) => inner.as_str(),
            Term::BlankNode(inner) => inner.as_str(),
        }
    }

    /// Returns the name of the variable if the term is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(inner) => Some(inner.as_str()),
            _ => None,
        }
    }

    /// Converts the three positions of a triple pattern into terms.
    pub fn from_triple_pattern(pattern: &TriplePattern) -> Result<[Term; 3], ModelError> {
        Ok([
            Term::try_from(&pattern.subject)?,
            Term::from(&pattern.predicate),
            Term::try_from(&pattern.object)?,
        ])
    }
}

impl TryFrom<&TermPattern> for Term {
    type Error = ModelError;

    fn try_from(value: &TermPattern) -> Result<Self, Self::Error> {
        match value {
            TermPattern::NamedNode(inner) => Ok(Term::Iri(inner.clone())),
            TermPattern::BlankNode(inner) => Ok(Term::BlankNode(inner.clone())),
            TermPattern::Literal(inner) => Ok(Term::Literal(inner.clone())),
            TermPattern::Variable(inner) => Ok(Term::Variable(inner.clone())),
            TermPattern::Triple(inner) => Err(ModelError::MalformedTerm(inner.to_string())),
        }
    }
}

impl From<&NamedNodePattern> for Term {
    fn from(value: &NamedNodePattern) -> Self {
        match value {
            NamedNodePattern::NamedNode(inner) => Term::Iri(inner.clone()),
            NamedNodePattern::Variable(inner) => Term::Variable(inner.clone()),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(inner) => inner.fmt(f),
            Term::Literal(inner) => inner.fmt(f),
            Term::Variable(inner) => inner.fmt(f),
            Term::BlankNode(inner) => inner.fmt(f),
        }
    }
}
