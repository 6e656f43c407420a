use rustc_hash::FxHashSet;
use sparql_containment_logical::{QueryRepresentation, RelevantVariable};

/// Returns whether two queries project the same relevant variables (`~`).
///
/// Only the names are compared. Order and duplicates do not matter.
pub fn tilde_check(sub: &[RelevantVariable], sup: &[RelevantVariable]) -> bool {
    names(sub) == names(sup)
}

/// The `~` relation under bag-set semantics. In addition to [tilde_check], the super-query must
/// use every variable of the sub-query.
pub fn tilde_check_bag_set(sub: &QueryRepresentation, sup: &QueryRepresentation) -> bool {
    tilde_check(sub.relevant_variables(), sup.relevant_variables())
        && sup.variables().is_superset(sub.variables())
}

fn names(variables: &[RelevantVariable]) -> FxHashSet<&str> {
    variables.iter().map(RelevantVariable::name).collect()
}
