use std::fmt::{Display, Formatter};

/// The uninterpreted sort of all RDF values in the generated formulas.
pub const RDF_VALUE_SORT: &str = "RDFValue";

/// The name of the distinguished constant that represents the default graph.
pub const DEFAULT_GRAPH: &str = "default_graph";

/// Classifies the declaration of a [Constant].
///
/// Blank nodes are encoded as [ConstantKind::Variable], as they behave like non-projected
/// variables within a basic graph pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConstantKind {
    Iri,
    Literal,
    Variable,
}

/// A 0-ary logical constant of the [RDF_VALUE_SORT] that stands for an RDF term.
///
/// The name never contains the `.` character. Scoped copies of variable constants (see
/// [Constant::scoped]) use it to separate the scope from the name, which keeps them disjoint from
/// every name handed out by the [TermEncoder](crate::TermEncoder).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constant {
    kind: ConstantKind,
    name: String,
}

impl Constant {
    pub(crate) fn new(kind: ConstantKind, name: String) -> Self {
        Self { kind, name }
    }

    pub fn kind(&self) -> ConstantKind {
        self.kind
    }

    /// The bare name of the constant without the surrounding `<` and `>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_variable(&self) -> bool {
        self.kind == ConstantKind::Variable
    }

    /// Returns the SMT-LIB declaration of this constant.
    pub fn declaration(&self) -> String {
        format!("(declare-const {self} {RDF_VALUE_SORT})")
    }

    /// Returns a copy of a variable constant that lives in the given local scope (e.g., the
    /// variables bound by a quantifier). IRIs and literals are global and returned unchanged.
    #[must_use]
    pub fn scoped(&self, scope: &str) -> Self {
        if self.is_variable() {
            Self::new(self.kind, format!("{scope}.{}", self.name))
        } else {
            self.clone()
        }
    }
}

impl Display for Constant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.name)
    }
}
