//! proplog: term unification and propositional resolution refutation
//!
//! The crate provides a Robinson unifier over S-expression terms and a
//! saturation-based resolution engine over propositional clauses. A query is
//! refuted with each of its literals negated into its own unit clause, so it
//! succeeds when at least one of the literals follows.

pub mod syntax;
pub mod unify;
pub mod resolution;
pub mod parser;
pub mod config;
pub mod session;
pub mod repl;

#[cfg(test)]
mod tests;
