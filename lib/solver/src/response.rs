use crate::SolverError;

/// The decision of the solver for a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SatResult {
    Sat,
    Unsat,
}

/// Interprets the raw response of the solver.
///
/// Only the first line of the response is considered. Any other answer (`unknown`, an error
/// message, an empty response) is reported as [SolverError::UnexpectedResponse] with the full
/// response.
pub fn classify_response(response: &str) -> Result<SatResult, SolverError> {
    let first_line = response.trim_start().lines().next().unwrap_or_default().trim();
    match first_line {
        "sat" => Ok(SatResult::Sat),
        "unsat" => Ok(SatResult::Unsat),
        _ => Err(SolverError::UnexpectedResponse(response.trim().to_owned())),
    }
}
