//! Unification algorithm: Robinson's algorithm with occurs check.

use std::fmt;

use super::Substitution;
use crate::syntax::Term;

/// Result of a unification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyResult {
    /// Unification succeeded with the given substitution.
    Success(Substitution),
    /// Unification failed.
    Failure(UnifyFailure),
}

impl UnifyResult {
    pub fn is_success(&self) -> bool {
        matches!(self, UnifyResult::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, UnifyResult::Failure(_))
    }

    /// The substitution on success, `None` on failure.
    pub fn into_substitution(self) -> Option<Substitution> {
        match self {
            UnifyResult::Success(subst) => Some(subst),
            UnifyResult::Failure(_) => None,
        }
    }
}

impl From<Result<Substitution, UnifyFailure>> for UnifyResult {
    fn from(result: Result<Substitution, UnifyFailure>) -> Self {
        match result {
            Ok(subst) => UnifyResult::Success(subst),
            Err(failure) => UnifyResult::Failure(failure),
        }
    }
}

/// Reasons why unification can fail.
///
/// Failure is an ordinary outcome; the reason is kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyFailure {
    /// Occurs check failed: variable would occur in its own binding.
    OccursCheck { var: String, term: Term },
    /// Two atoms differ, or an atom meets a sequence.
    SymbolClash { left: Term, right: Term },
    /// Sequences of different lengths.
    ArityMismatch { left: usize, right: usize },
}

impl fmt::Display for UnifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnifyFailure::OccursCheck { var, term } => {
                write!(f, "occurs check: {} occurs in {}", var, term)
            }
            UnifyFailure::SymbolClash { left, right } => {
                write!(f, "cannot unify {} with {}", left, right)
            }
            UnifyFailure::ArityMismatch { left, right } => {
                write!(f, "sequence length mismatch: {} vs {}", left, right)
            }
        }
    }
}

/// Unify two terms under an existing substitution.
///
/// On success the returned substitution extends `subst`. On failure the
/// caller's `subst` is untouched and can be reused.
pub fn unify(x: &Term, y: &Term, subst: &Substitution) -> UnifyResult {
    unify_terms(x, y, subst.clone()).into()
}

/// Bind `var` to `value` under `subst`, dereferencing either side first.
pub fn unify_var(var: &str, value: &Term, subst: &Substitution) -> UnifyResult {
    bind_var(var, value, subst.clone()).into()
}

/// Simultaneous unification of several term pairs, left to right.
pub fn unify_many(pairs: &[(Term, Term)], subst: &Substitution) -> UnifyResult {
    pairs
        .iter()
        .try_fold(subst.clone(), |acc, (x, y)| unify_terms(x, y, acc))
        .into()
}

/// Check whether binding `var` to `value` would create a cycle.
///
/// Recurses into sequences and follows variable bindings in `subst`.
pub fn occurs_check(var: &str, value: &Term, subst: &Substitution) -> bool {
    match value {
        Term::Variable(name) if name == var => true,
        Term::Variable(name) => match subst.lookup(name) {
            Some(bound) => occurs_check(var, bound, subst),
            None => false,
        },
        Term::Atom(_) => false,
        Term::Sequence(items) => items.iter().any(|item| occurs_check(var, item, subst)),
    }
}

fn unify_terms(x: &Term, y: &Term, subst: Substitution) -> Result<Substitution, UnifyFailure> {
    if x == y {
        return Ok(subst);
    }

    match (x, y) {
        (Term::Variable(var), _) => bind_var(var, y, subst),
        (_, Term::Variable(var)) => bind_var(var, x, subst),
        (Term::Sequence(xs), Term::Sequence(ys)) => {
            if xs.len() != ys.len() {
                return Err(UnifyFailure::ArityMismatch {
                    left: xs.len(),
                    right: ys.len(),
                });
            }
            // Heads first; each tail is unified under the head's result.
            xs.iter()
                .zip(ys)
                .try_fold(subst, |acc, (a, b)| unify_terms(a, b, acc))
        }
        _ => Err(UnifyFailure::SymbolClash {
            left: x.clone(),
            right: y.clone(),
        }),
    }
}

fn bind_var(var: &str, value: &Term, mut subst: Substitution) -> Result<Substitution, UnifyFailure> {
    if let Some(bound) = subst.lookup(var).cloned() {
        return unify_terms(&bound, value, subst);
    }

    if let Term::Variable(other) = value {
        if let Some(bound) = subst.lookup(other).cloned() {
            return unify_terms(&Term::var(var), &bound, subst);
        }
    }

    if occurs_check(var, value, &subst) {
        return Err(UnifyFailure::OccursCheck {
            var: var.to_string(),
            term: value.clone(),
        });
    }

    subst.bind(var, value.clone());
    Ok(subst)
}
