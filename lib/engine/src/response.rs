use std::collections::BTreeMap;

/// The verdict of a containment check together with the evidence it is based on.
///
/// Only [SolverResponse::result] is meant to be acted upon. The remaining fields exist to audit
/// or debug a verdict.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverResponse {
    result: bool,
    formula: Option<String>,
    justification: Option<String>,
    endpoint_results: BTreeMap<String, SolverResponse>,
}

impl SolverResponse {
    /// Creates a response for a verdict that was decided by the solver.
    pub fn decided(result: bool, formula: String) -> Self {
        Self {
            result,
            formula: Some(formula),
            ..Self::default()
        }
    }

    /// Creates a negative response that was decided without the solver.
    pub fn rejected(justification: impl Into<String>) -> Self {
        Self {
            result: false,
            justification: Some(justification.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }

    #[must_use]
    pub fn with_endpoint_results(
        mut self,
        endpoint_results: BTreeMap<String, SolverResponse>,
    ) -> Self {
        self.endpoint_results = endpoint_results;
        self
    }

    /// Whether the sub-query is contained in the super-query.
    pub fn result(&self) -> bool {
        self.result
    }

    /// The formula that decided the verdict, if the solver was asked.
    pub fn formula(&self) -> Option<&str> {
        self.formula.as_deref()
    }

    pub fn justification(&self) -> Option<&str> {
        self.justification.as_deref()
    }

    /// The results of the federated endpoints, keyed by the endpoint URL.
    pub fn endpoint_results(&self) -> &BTreeMap<String, SolverResponse> {
        &self.endpoint_results
    }
}
