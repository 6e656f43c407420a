use crate::SigmaTerm;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// A variable that is used in a triple pattern but not part of the final projection (Ov).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OtherVariable(String);

impl OtherVariable {
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// A variable that is used in a triple pattern and part of the final projection (Rv).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelevantVariable(String);

impl RelevantVariable {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for RelevantVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "?{}", self.0)
    }
}

/// A federated sub-query, keyed by the URL of its endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Service {
    url: String,
    query: QueryRepresentation,
}

impl Service {
    pub fn new(url: String, query: QueryRepresentation) -> Self {
        Self { url, query }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn query(&self) -> &QueryRepresentation {
        &self.query
    }
}

/// The formal representation of a query.
///
/// It holds the sigma terms of all triple patterns, the partition of the used variables into
/// relevant and other variables, and the federated sub-queries. A representation is never mutated
/// after it has been built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRepresentation {
    sigmas: Vec<SigmaTerm>,
    variables: BTreeSet<String>,
    other_variables: Vec<OtherVariable>,
    relevant_variables: Vec<RelevantVariable>,
    services: Vec<Service>,
}

impl QueryRepresentation {
    /// Creates a new representation.
    ///
    /// `used_variables` are the variables of the triple patterns in the order of their first
    /// occurrence. `projection` is the final projection of the query, if there is one. Without a
    /// projection, there are no relevant variables.
    pub fn new(
        sigmas: Vec<SigmaTerm>,
        used_variables: Vec<String>,
        projection: Option<Vec<String>>,
        services: Vec<Service>,
    ) -> Self {
        let projected = projection
            .unwrap_or_default()
            .into_iter()
            .collect::<FxHashSet<_>>();

        let (relevant, other): (Vec<_>, Vec<_>) = used_variables
            .iter()
            .cloned()
            .partition(|variable| projected.contains(variable));

        Self {
            sigmas,
            variables: used_variables.into_iter().collect(),
            other_variables: other.into_iter().map(OtherVariable).collect(),
            relevant_variables: relevant.into_iter().map(RelevantVariable).collect(),
            services,
        }
    }

    pub fn sigmas(&self) -> &[SigmaTerm] {
        &self.sigmas
    }

    /// The names of all variables used in the triple patterns.
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    pub fn other_variables(&self) -> &[OtherVariable] {
        &self.other_variables
    }

    pub fn relevant_variables(&self) -> &[RelevantVariable] {
        &self.relevant_variables
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }
}
