mod error;
mod term;

pub use error::*;
pub use term::*;

// Re-export the algebra of spargebra.
pub use spargebra::algebra::{GraphPattern, PropertyPathExpression};
pub use spargebra::term::{
    BlankNode, Literal, NamedNode, NamedNodePattern, TermPattern, TriplePattern, Variable,
};
pub use spargebra::{Query, SparqlSyntaxError};
