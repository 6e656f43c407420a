//! Renders the SMT-LIB 2 formulas of a containment check.
//!
//! A formula declares one uninterpreted sort for RDF values and the 4-ary membership predicate
//! `P(subject, predicate, object, graph)`. Then, every constant is declared once, the ground
//! constants are asserted to be pairwise distinct, and the conjecture is asserted. The formula ends
//! with a `(check-sat)` directive.

mod builder;
mod conjecture;
mod template;

pub use builder::FormulaBuilder;
pub use conjecture::{containment_conjecture, theta_conjecture, SUPER_SCOPE};
pub use template::{conjunction, exists, membership, MEMBERSHIP_PREDICATE};
