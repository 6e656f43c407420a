use thiserror::Error;

/// An error raised while building the formal representation of a query.
///
/// None of these errors is recoverable: if one of them occurs, no formula can be built for the
/// query and nothing is submitted to a solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// A term that is neither an IRI, a literal, a variable nor a blank node.
    #[error("The term {0} is not an IRI, a literal, a variable or a blank node")]
    MalformedTerm(String),
    /// An operator of the SPARQL algebra that is outside the supported fragment.
    #[error("The graph pattern {0} is not supported by the containment check")]
    UnsupportedPattern(String),
    /// A `SERVICE` clause whose endpoint is not a fixed IRI.
    #[error("The SERVICE endpoint {0} is not an IRI")]
    UnsupportedServiceName(String),
}

impl ModelError {
    /// Creates a result with an [ModelError::UnsupportedPattern].
    pub fn unsupported<T>(pattern: impl Into<String>) -> Result<T, Self> {
        Err(Self::UnsupportedPattern(pattern.into()))
    }
}
