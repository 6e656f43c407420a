use itertools::Itertools;
use sparql_containment_encoding::{Constant, DEFAULT_GRAPH, RDF_VALUE_SORT};
use sparql_containment_logical::SigmaTerm;

/// The name of the dataset-membership predicate.
pub const MEMBERSHIP_PREDICATE: &str = "P";

const SECTION_WIDTH: usize = 53;

pub(crate) fn section(title: &str) -> String {
    format!("{:-<SECTION_WIDTH$}", format!("; ------------ {title} "))
}

pub(crate) fn prelude() -> [String; 3] {
    [
        format!("(declare-sort {RDF_VALUE_SORT} 0)"),
        format!(
            "(declare-fun {MEMBERSHIP_PREDICATE} ({RDF_VALUE_SORT} {RDF_VALUE_SORT} {RDF_VALUE_SORT} {RDF_VALUE_SORT}) Bool)"
        ),
        format!("(declare-const <{DEFAULT_GRAPH}> {RDF_VALUE_SORT})"),
    ]
}

/// `(assert (distinct ...))` over the given terms. There is nothing to assert for fewer than two
/// terms.
pub(crate) fn distinct(terms: &[String]) -> Option<String> {
    (terms.len() >= 2).then(|| format!("(assert (distinct {}))", terms.join(" ")))
}

/// Renders the membership of a sigma term in its active graph.
pub fn membership(sigma: &SigmaTerm) -> String {
    format!(
        "({MEMBERSHIP_PREDICATE} {} {} {} {})",
        sigma.subject(),
        sigma.predicate(),
        sigma.object(),
        sigma.graph()
    )
}

pub(crate) fn equality(left: &Constant, right: &Constant) -> String {
    format!("(= {left} {right})")
}

/// The conjunction of `terms`. An empty conjunction is `true`.
pub fn conjunction(terms: impl IntoIterator<Item = String>) -> String {
    let mut terms = terms.into_iter().collect_vec();
    match terms.len() {
        0 => "true".to_owned(),
        1 => terms.remove(0),
        _ => format!("(and {})", terms.join(" ")),
    }
}

/// Binds `bound` existentially in `body`. Without bound constants, `body` is returned as is.
pub fn exists(bound: &[Constant], body: String) -> String {
    if bound.is_empty() {
        return body;
    }

    let declarations = bound
        .iter()
        .map(|constant| format!("({constant} {RDF_VALUE_SORT})"))
        .join(" ");
    format!("(exists ({declarations}) {body})")
}
