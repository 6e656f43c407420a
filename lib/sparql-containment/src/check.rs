use sparql_containment_engine::{
    ContainmentChecker, ContainmentError, ContainmentSemantics, SolverResponse,
};
use sparql_containment_model::Query;
use sparql_containment_solver::{SmtSolver, SolverConfig, Z3Solver};

/// Parses both queries and checks whether `sub` is contained in `sup`.
///
/// Syntax errors are reported as [ContainmentError::Parsing].
pub async fn is_contained_str<S: SmtSolver>(
    checker: &ContainmentChecker<S>,
    sub: &str,
    sup: &str,
    semantics: ContainmentSemantics,
) -> Result<SolverResponse, ContainmentError> {
    let sub = sub.parse::<Query>()?;
    let sup = sup.parse::<Query>()?;
    checker.is_contained(&sub, &sup, semantics).await
}

/// Creates a checker that runs z3 as configured by [SolverConfig::from_env].
pub fn z3_checker() -> Result<ContainmentChecker<Z3Solver>, ContainmentError> {
    let config = SolverConfig::from_env()?;
    Ok(ContainmentChecker::new(Z3Solver::new(config)))
}
