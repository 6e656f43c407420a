use std::io;
use std::time::Duration;

/// An error while running the SMT solver.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SolverError {
    /// The solver process could not be spawned or its pipes failed.
    #[error("Failed to communicate with the solver: {0}")]
    Io(#[from] io::Error),
    /// The solver did not answer in time.
    #[error("The solver did not answer within {0:?}")]
    Timeout(Duration),
    /// The solver answered with something other than `sat` or `unsat`.
    #[error("Unexpected solver response: {0}")]
    UnexpectedResponse(String),
    /// The solver configuration is invalid.
    #[error("Invalid solver configuration: {0}")]
    Configuration(String),
    /// The solver binary could not be found or does not work.
    #[error("The solver is not available: {0}")]
    Unavailable(String),
}
