use crate::SolverError;
use async_trait::async_trait;
use std::sync::Arc;

/// An SMT solver that evaluates SMT-LIB 2 formulas.
///
/// Implementations return the raw textual response. The caller decides how to interpret it (see
/// [classify_response](crate::classify_response)).
#[async_trait]
pub trait SmtSolver: Send + Sync {
    /// Evaluates `formula` and returns the response of the solver.
    async fn evaluate(&self, formula: &str) -> Result<String, SolverError>;
}

#[async_trait]
impl<T: SmtSolver + ?Sized> SmtSolver for Arc<T> {
    async fn evaluate(&self, formula: &str) -> Result<String, SolverError> {
        self.as_ref().evaluate(formula).await
    }
}
