//! Clause database: the growing set of clauses a proof attempt works on.

use std::collections::BTreeSet;

use crate::syntax::Clause;

/// A set of clauses that only grows.
///
/// Duplicate clauses collapse. Iteration order is the canonical clause
/// order, so saturation is deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseDatabase {
    clauses: BTreeSet<Clause>,
}

impl ClauseDatabase {
    pub fn new() -> Self {
        ClauseDatabase::default()
    }

    /// Add a clause. Returns true if it was not already present.
    pub fn insert(&mut self, clause: Clause) -> bool {
        self.clauses.insert(clause)
    }

    /// Add every clause from `other`. Returns how many were new.
    pub fn merge(&mut self, other: impl IntoIterator<Item = Clause>) -> usize {
        let before = self.clauses.len();
        self.clauses.extend(other);
        self.clauses.len() - before
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    /// Check for the contradiction marker.
    pub fn contains_empty(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    /// True if every clause of `other` is already present.
    pub fn covers(&self, other: &BTreeSet<Clause>) -> bool {
        other.is_subset(&self.clauses)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn as_set(&self) -> &BTreeSet<Clause> {
        &self.clauses
    }
}

impl FromIterator<Clause> for ClauseDatabase {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        ClauseDatabase {
            clauses: iter.into_iter().collect(),
        }
    }
}
