use sparql_containment_model::{ModelError, SparqlSyntaxError};
use sparql_containment_solver::SolverError;

/// An error that prevents a containment check from producing a verdict.
///
/// Note that a query that is not contained in another one is not an error. Such checks produce a
/// [SolverResponse](crate::SolverResponse) with a negative result.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ContainmentError {
    /// The requested check is not implemented.
    #[error("{0} is not implemented")]
    NotImplemented(String),
    /// A query could not be translated into its formal representation.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The solver failed to decide a formula.
    #[error(transparent)]
    Solver(#[from] SolverError),
    /// A query could not be parsed.
    #[error(transparent)]
    Parsing(#[from] SparqlSyntaxError),
}

impl ContainmentError {
    pub(crate) fn not_implemented<T>(feature: impl Into<String>) -> Result<T, Self> {
        Err(Self::NotImplemented(feature.into()))
    }
}
