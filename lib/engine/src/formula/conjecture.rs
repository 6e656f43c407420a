use crate::formula::template::{conjunction, equality, exists, membership};
use crate::formula::FormulaBuilder;
use itertools::Itertools;
use sparql_containment_encoding::TermEncoder;
use sparql_containment_logical::QueryRepresentation;

/// The scope of the variables of the super-query within the containment conjecture.
pub const SUPER_SCOPE: &str = "super";

/// Renders the query-containment conjecture of two queries whose relevant variables are
/// compatible.
///
/// The formula asserts the triple patterns of `sub`, with its variables as free constants. Then it
/// asserts that no binding of the variables of `sup` matches the patterns of `sup` while agreeing
/// with `sub` on the relevant variables. The variables of `sup` are bound in the [SUPER_SCOPE].
///
/// The formula is unsatisfiable iff `sub` is contained in `sup`.
///
/// `encoder` must be the encoder that built both representations.
pub fn containment_conjecture(
    sub: &QueryRepresentation,
    sup: &QueryRepresentation,
    encoder: &TermEncoder,
) -> String {
    let mut formula = FormulaBuilder::new();
    for sigma in sub.sigmas() {
        formula.declare_sigma(sigma);
    }
    for sigma in sup.sigmas() {
        formula.declare_ground(sigma);
    }

    for sigma in sub.sigmas() {
        formula.assert(membership(sigma));
    }

    let bound = sup
        .sigmas()
        .iter()
        .flat_map(|sigma| sigma.constants())
        .filter(|constant| constant.is_variable())
        .unique()
        .map(|constant| constant.scoped(SUPER_SCOPE))
        .collect_vec();
    let patterns = sup
        .sigmas()
        .iter()
        .map(|sigma| membership(&sigma.scoped(SUPER_SCOPE)));
    let equalities = sup
        .relevant_variables()
        .iter()
        .filter_map(|variable| encoder.variable(variable.name()))
        .map(|constant| equality(&constant.scoped(SUPER_SCOPE), constant));

    let super_has_answer = exists(&bound, conjunction(patterns.chain(equalities)));
    formula.assert(format!("(not {super_has_answer})"));

    formula.build()
}

/// Renders the theta-evaluation conjecture of a query: the query has at least one answer.
///
/// The formula only involves `sub`. It is satisfiable iff `sub` can produce an answer.
pub fn theta_conjecture(sub: &QueryRepresentation) -> String {
    let mut formula = FormulaBuilder::new();
    for sigma in sub.sigmas() {
        formula.declare_sigma(sigma);
        formula.assert(membership(sigma));
    }
    formula.build()
}
