use crate::formula::template::{distinct, prelude, section};
use rustc_hash::FxHashSet;
use sparql_containment_encoding::{Constant, ConstantKind, DEFAULT_GRAPH};
use sparql_containment_logical::SigmaTerm;

/// Collects the declarations and assertions of a formula and renders it.
///
/// Every constant is declared at most once, no matter how often it is passed to the builder. The
/// declarations are grouped by their [ConstantKind] and keep the order in which they were first
/// seen. Hence, building the same formula twice yields the same text.
#[derive(Debug, Default)]
pub struct FormulaBuilder {
    iris: Vec<Constant>,
    literals: Vec<Constant>,
    variables: Vec<Constant>,
    declared: FxHashSet<Constant>,
    assertions: Vec<String>,
}

impl FormulaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a constant.
    pub fn declare(&mut self, constant: &Constant) {
        if !self.declared.insert(constant.clone()) {
            return;
        }

        let declarations = match constant.kind() {
            ConstantKind::Iri => &mut self.iris,
            ConstantKind::Literal => &mut self.literals,
            ConstantKind::Variable => &mut self.variables,
        };
        declarations.push(constant.clone());
    }

    /// Declares every constant of `sigma`.
    pub fn declare_sigma(&mut self, sigma: &SigmaTerm) {
        for constant in sigma.constants() {
            self.declare(constant);
        }
    }

    /// Declares the IRIs and literals of `sigma`, but not its variables.
    pub fn declare_ground(&mut self, sigma: &SigmaTerm) {
        for constant in sigma.constants().filter(|constant| !constant.is_variable()) {
            self.declare(constant);
        }
    }

    /// Adds `(assert term)` to the conjecture.
    pub fn assert(&mut self, term: String) {
        self.assertions.push(format!("(assert {term})"));
    }

    /// Renders the formula.
    pub fn build(self) -> String {
        let mut lines = Vec::new();

        lines.push(section("Sort and Predicate"));
        lines.extend(prelude());

        lines.push(section("IRIs"));
        lines.extend(self.iris.iter().map(Constant::declaration));

        lines.push(section("Literals"));
        lines.extend(self.literals.iter().map(Constant::declaration));

        let ground = std::iter::once(format!("<{DEFAULT_GRAPH}>"))
            .chain(self.iris.iter().chain(&self.literals).map(ToString::to_string))
            .collect::<Vec<_>>();
        if let Some(distinct) = distinct(&ground) {
            lines.push(section("Unique Names"));
            lines.push(distinct);
        }

        lines.push(section("Variables"));
        lines.extend(self.variables.iter().map(Constant::declaration));

        lines.push(section("Conjecture"));
        lines.extend(self.assertions);
        lines.push("(check-sat)".to_owned());

        lines.join("\n")
    }
}
