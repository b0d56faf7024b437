//! Semantic tests for unification and resolution.
//!
//! These tests check algebraic properties of the unifier and the refutation
//! loop rather than individual outputs. The property tests compare the
//! resolution engine with a truth-table oracle over a small alphabet.
//!
//! # References
//!
//! - J. A. Robinson. "A Machine-Oriented Logic Based on the Resolution
//!   Principle." J. ACM 12(1), 23-41 (1965).
//!   https://doi.org/10.1145/321250.321253
//!
use crate::resolution::{negate, resolve, ResolutionEngine, Saturation, SaturationLimits};
use crate::syntax::{Clause, Literal, Term};
use crate::unify::{occurs_check, unify, unify_many, Substitution, UnifyFailure, UnifyResult};

/// Helper to run a proof attempt from knowledge-base lines and a query line.
fn entails(kb: &[&str], query: &str) -> bool {
    ResolutionEngine::new(kb, query).resolution()
}

/// Helper to build a sequence term from a head atom and arguments.
fn app(head: &str, args: Vec<Term>) -> Term {
    let mut items = vec![Term::atom(head)];
    items.extend(args);
    Term::seq(items)
}

mod proptests;
mod unification_semantics;
