//! Drives the SMT solver that decides the containment formulas.
//!
//! The formulas are plain SMT-LIB 2 text. A [SmtSolver] evaluates such a text and returns the raw
//! response of the solver, which is then interpreted with [classify_response].

mod config;
mod error;
mod response;
mod solver;
mod z3;

pub use config::{SolverConfig, Z3_PATH_VAR, Z3_TIMEOUT_MS_VAR};
pub use error::SolverError;
pub use response::{classify_response, SatResult};
pub use solver::SmtSolver;
pub use z3::Z3Solver;
