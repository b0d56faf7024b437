//! Clauses: disjunctions of propositional literals.

use std::collections::BTreeSet;
use std::fmt;

use super::literal::Literal;

/// A clause is a disjunction of literals: `L1 ∨ L2 ∨ ... ∨ Ln`.
///
/// Literals are kept in a set, so duplicates collapse and order is
/// irrelevant. Examples (in our syntax):
/// - Unit clause: `rain`
/// - Implication `p ∧ q → r`: `~p ~q r`
/// - Empty clause: `⊥` (contradiction)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    pub literals: BTreeSet<Literal>,
}

impl Clause {
    /// Create a clause from literals.
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Clause {
            literals: literals.into_iter().collect(),
        }
    }

    /// Create the empty clause (represents contradiction/false).
    pub fn empty() -> Self {
        Clause::default()
    }

    /// Create a clause holding a single literal.
    pub fn unit(literal: Literal) -> Self {
        Clause::new([literal])
    }

    /// Read a clause from whitespace-separated literal tokens.
    pub fn parse(line: &str) -> Self {
        Clause::new(line.split_whitespace().map(Literal::parse))
    }

    /// Check if this is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if this clause contains a literal and its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|lit| !lit.positive && self.literals.contains(&lit.negated()))
    }

    /// Check if the clause contains the given literal.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Iterate over the literals in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Get the number of literals in this clause.
    pub fn len(&self) -> usize {
        self.literals.len()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause::new(iter)
    }
}
