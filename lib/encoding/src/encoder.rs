use crate::constant::{Constant, ConstantKind, DEFAULT_GRAPH};
use crate::iri::{rename_iri, sanitize};
use rustc_hash::{FxHashMap, FxHashSet};
use sparql_containment_model::Term;

/// Assigns a [Constant] to every RDF [Term] of a containment check.
///
/// One encoder must be used for both queries of a check (and all their federated sub-queries), as
/// the formulas rely on equal terms being encoded as equal constants:
/// - IRIs are renamed with [rename_iri]. Two occurrences of the same IRI share a constant.
/// - Literals are numbered `l_0`, `l_1`, ... in the order they are first encountered. Two
///   occurrences of the same literal (lexical form, datatype and language) share a constant.
/// - Variables keep their name.
/// - Blank nodes are numbered `_b0`, `_b1`, ... in the order they are first encountered, as the
///   parser may assign random labels to anonymous blank nodes.
///
/// Every name is reserved by the encoder. If a name is already taken by another term, a `_N`
/// suffix is appended. Hence, two distinct terms never share a constant.
///
/// The counters are owned by the encoder. Creating a fresh encoder for each check keeps
/// independent checks from influencing each other.
#[derive(Debug)]
pub struct TermEncoder {
    iris: FxHashMap<String, Constant>,
    literals: FxHashMap<String, Constant>,
    variables: FxHashMap<String, Constant>,
    blank_nodes: FxHashMap<String, Constant>,
    taken: FxHashSet<String>,
    literal_counter: usize,
    blank_node_counter: usize,
    scope_counter: usize,
}

impl Default for TermEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TermEncoder {
    pub fn new() -> Self {
        let mut taken = FxHashSet::default();
        taken.insert(DEFAULT_GRAPH.to_owned());
        Self {
            iris: FxHashMap::default(),
            literals: FxHashMap::default(),
            variables: FxHashMap::default(),
            blank_nodes: FxHashMap::default(),
            taken,
            literal_counter: 0,
            blank_node_counter: 0,
            scope_counter: 0,
        }
    }

    /// Returns the number of distinct literals encoded so far.
    pub fn literal_counter(&self) -> usize {
        self.literal_counter
    }

    /// Encodes `term` into a constant.
    pub fn encode(&mut self, term: &Term) -> Constant {
        match term {
            Term::Iri(iri) => encode_with(
                &mut self.iris,
                &mut self.taken,
                iri.as_str(),
                ConstantKind::Iri,
                || rename_iri(iri.as_str()),
            ),
            Term::Literal(literal) => {
                let counter = &mut self.literal_counter;
                encode_with(
                    &mut self.literals,
                    &mut self.taken,
                    &literal.to_string(),
                    ConstantKind::Literal,
                    || {
                        let name = format!("l_{counter}");
                        *counter += 1;
                        name
                    },
                )
            }
            Term::Variable(variable) => encode_with(
                &mut self.variables,
                &mut self.taken,
                variable.as_str(),
                ConstantKind::Variable,
                || sanitize(variable.as_str()),
            ),
            Term::BlankNode(blank_node) => {
                let counter = &mut self.blank_node_counter;
                encode_with(
                    &mut self.blank_nodes,
                    &mut self.taken,
                    blank_node.as_str(),
                    ConstantKind::Variable,
                    || {
                        let name = format!("_b{counter}");
                        *counter += 1;
                        name
                    },
                )
            }
        }
    }

    /// Returns the name of a fresh scope for variables that are hidden by a sub-select.
    ///
    /// A variable that is renamed into such a scope (see [scoped_variable_name]) never shares a
    /// constant with a variable of the query, as `#` cannot occur in a SPARQL variable name.
    pub fn open_scope(&mut self) -> String {
        let scope = format!("sq{}", self.scope_counter);
        self.scope_counter += 1;
        scope
    }

    /// Returns the constant of an already encoded variable.
    pub fn variable(&self, name: &str) -> Option<&Constant> {
        self.variables.get(name)
    }
}

/// Returns the name of `variable` within the given scope of [TermEncoder::open_scope].
pub fn scoped_variable_name(variable: &str, scope: &str) -> String {
    format!("{variable}#{scope}")
}

fn encode_with(
    constants: &mut FxHashMap<String, Constant>,
    taken: &mut FxHashSet<String>,
    key: &str,
    kind: ConstantKind,
    base_name: impl FnOnce() -> String,
) -> Constant {
    if let Some(constant) = constants.get(key) {
        return constant.clone();
    }

    let constant = Constant::new(kind, claim(taken, base_name()));
    constants.insert(key.to_owned(), constant.clone());
    constant
}

/// Reserves `base` or, if it is already taken, the first free `base_N`.
fn claim(taken: &mut FxHashSet<String>, base: String) -> String {
    if !taken.contains(&base) {
        taken.insert(base.clone());
        return base;
    }

    let mut suffix = 1_usize;
    loop {
        let candidate = format!("{base}_{suffix}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}
