//! Syntax types: unification terms, propositional literals, and clauses.

mod clause;
mod literal;
mod term;

pub use clause::Clause;
pub use literal::{Literal, NEGATION_MARKER};
pub use term::{is_variable_name, Term};
