//! Resolution refutation over propositional clauses.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use super::{ClauseDatabase, Saturation, SaturationLimits, SaturationStats};
use crate::syntax::{Clause, Literal};

/// Return the negation of a literal.
pub fn negate(literal: &Literal) -> Literal {
    literal.negated()
}

/// All resolvents of two clauses.
///
/// Every complementary pair `l1 ∈ c1`, `l2 ∈ c2` yields its own resolvent
/// `(c1 ∪ c2) \ {l1, l2}`. Two complementary unit clauses yield the empty
/// clause.
pub fn resolve(c1: &Clause, c2: &Clause) -> Vec<Clause> {
    let mut resolvents = Vec::new();
    for l1 in c1.iter() {
        for l2 in c2.iter() {
            if l1.is_complementary(l2) {
                let resolvent: Clause = c1
                    .iter()
                    .chain(c2.iter())
                    .filter(|lit| *lit != l1 && *lit != l2)
                    .cloned()
                    .collect();
                resolvents.push(resolvent);
            }
        }
    }
    resolvents
}

/// A single proof attempt: knowledge base plus negated query.
///
/// The engine is built once per query. Its working clause set only grows
/// while [`ResolutionEngine::saturate`] runs.
#[derive(Debug, Clone)]
pub struct ResolutionEngine {
    knowledge_base: Vec<Clause>,
    negated_query: Vec<Clause>,
    clauses: ClauseDatabase,
    stats: SaturationStats,
}

impl ResolutionEngine {
    /// Build an engine from knowledge-base lines and a query line.
    ///
    /// Blank lines contribute no clause. Each query literal is negated into
    /// its own unit clause.
    pub fn new<S: AsRef<str>>(knowledge_base: &[S], query: &str) -> Self {
        let kb = knowledge_base
            .iter()
            .map(|line| line.as_ref())
            .filter(|line| !line.trim().is_empty())
            .map(Clause::parse)
            .collect();
        let query: Vec<Literal> = query.split_whitespace().map(Literal::parse).collect();
        ResolutionEngine::from_clauses(kb, &query)
    }

    /// Build an engine from already-parsed clauses and query literals.
    pub fn from_clauses(knowledge_base: Vec<Clause>, query: &[Literal]) -> Self {
        let negated_query: Vec<Clause> = query.iter().map(|lit| Clause::unit(negate(lit))).collect();
        let mut engine = ResolutionEngine {
            knowledge_base,
            negated_query,
            clauses: ClauseDatabase::new(),
            stats: SaturationStats::default(),
        };
        engine.clauses = engine.initial_clauses();
        engine.stats.clauses = engine.clauses.len();
        engine
    }

    pub fn knowledge_base(&self) -> &[Clause] {
        &self.knowledge_base
    }

    pub fn negated_query(&self) -> &[Clause] {
        &self.negated_query
    }

    /// Knowledge-base clauses together with the negated query clauses.
    pub fn initial_clauses(&self) -> ClauseDatabase {
        self.knowledge_base
            .iter()
            .chain(self.negated_query.iter())
            .cloned()
            .collect()
    }

    /// The working clause set of the latest run.
    pub fn clauses(&self) -> &ClauseDatabase {
        &self.clauses
    }

    pub fn stats(&self) -> SaturationStats {
        self.stats
    }

    /// Refutation by saturation, without limits.
    ///
    /// Returns true when the empty clause is derivable, i.e. the query is
    /// entailed by the knowledge base.
    pub fn resolution(&mut self) -> bool {
        self.saturate(&SaturationLimits::unlimited()).is_refuted()
    }

    /// Saturate the clause set until refutation, fixpoint, or a limit.
    ///
    /// Each round resolves every unordered pair of distinct clauses present
    /// at the start of the round. The run restarts from the initial clauses.
    pub fn saturate(&mut self, limits: &SaturationLimits) -> Saturation {
        self.clauses = self.initial_clauses();
        self.stats = SaturationStats {
            clauses: self.clauses.len(),
            ..SaturationStats::default()
        };

        if self.clauses.contains_empty() {
            debug!("empty clause present in input");
            return Saturation::Refuted;
        }

        loop {
            if limits.max_rounds.is_some_and(|max| self.stats.rounds >= max) {
                debug!(rounds = self.stats.rounds, "round limit reached");
                return Saturation::ResourceLimit;
            }
            self.stats.rounds += 1;
            debug!(
                round = self.stats.rounds,
                clauses = self.clauses.len(),
                "starting resolution round"
            );

            let mut pending = BTreeSet::new();
            let current: Vec<&Clause> = self.clauses.iter().collect();
            for (i, c1) in current.iter().enumerate() {
                for c2 in &current[i + 1..] {
                    let resolvents = resolve(c1, c2);
                    self.stats.resolvents += resolvents.len();
                    if resolvents.iter().any(Clause::is_empty) {
                        debug!(
                            round = self.stats.rounds,
                            left = %c1,
                            right = %c2,
                            "derived empty clause"
                        );
                        return Saturation::Refuted;
                    }
                    for resolvent in resolvents {
                        trace!(resolvent = %resolvent, "derived resolvent");
                        pending.insert(resolvent);
                    }
                }
            }

            if self.clauses.covers(&pending) {
                debug!(
                    round = self.stats.rounds,
                    clauses = self.clauses.len(),
                    "fixpoint reached"
                );
                return Saturation::Saturated;
            }

            let added = self.clauses.merge(pending);
            self.stats.clauses = self.clauses.len();
            debug!(round = self.stats.rounds, added, "merged new clauses");

            if limits.max_clauses.is_some_and(|max| self.clauses.len() > max) {
                debug!(clauses = self.clauses.len(), "clause limit reached");
                return Saturation::ResourceLimit;
            }
        }
    }
}
