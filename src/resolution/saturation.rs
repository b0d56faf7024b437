//! Outcome, limits, and statistics of a saturation run.

use std::fmt;

/// Result of saturating a clause database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Saturation {
    /// The empty clause was derived: the clause set is unsatisfiable.
    Refuted,
    /// A fixpoint was reached without deriving the empty clause.
    Saturated,
    /// A configured limit stopped the loop before either outcome.
    ResourceLimit,
}

impl Saturation {
    pub fn is_refuted(&self) -> bool {
        matches!(self, Saturation::Refuted)
    }
}

impl fmt::Display for Saturation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Saturation::Refuted => write!(f, "refuted"),
            Saturation::Saturated => write!(f, "saturated"),
            Saturation::ResourceLimit => write!(f, "resource limit"),
        }
    }
}

/// Optional bounds on a saturation run. `None` means unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturationLimits {
    /// Maximum number of resolution rounds
    pub max_rounds: Option<usize>,
    /// Maximum size of the working clause set
    pub max_clauses: Option<usize>,
}

impl SaturationLimits {
    pub fn unlimited() -> Self {
        SaturationLimits::default()
    }
}

/// Counters collected while saturating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturationStats {
    /// Resolution rounds started
    pub rounds: usize,
    /// Resolvents produced, including duplicates
    pub resolvents: usize,
    /// Size of the working clause set when the run stopped
    pub clauses: usize,
}

impl fmt::Display for SaturationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rounds, {} resolvents, {} clauses",
            self.rounds, self.resolvents, self.clauses
        )
    }
}
