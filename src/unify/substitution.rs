//! Substitution: mapping variables to terms.

use std::collections::HashMap;
use std::fmt;

use crate::syntax::Term;

/// A substitution mapping variable names to terms.
///
/// Bindings are stored in triangular form: a bound term may mention other
/// variables that are themselves bound. [`Substitution::resolve`] follows
/// those chains. Unification keeps the substitution acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    bindings: HashMap<String, Term>,
}

impl Substitution {
    /// Create an empty substitution (identity).
    pub fn empty() -> Self {
        Substitution {
            bindings: HashMap::new(),
        }
    }

    /// Create a substitution with a single binding.
    pub fn singleton(var: impl Into<String>, term: Term) -> Self {
        let mut subst = Substitution::empty();
        subst.bind(var, term);
        subst
    }

    /// Add a binding to this substitution.
    pub fn bind(&mut self, var: impl Into<String>, term: Term) {
        self.bindings.insert(var.into(), term);
    }

    /// Look up the direct binding of a variable.
    pub fn lookup(&self, var: &str) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Apply this substitution exhaustively, following chains of bindings.
    pub fn resolve(&self, term: &Term) -> Term {
        match term {
            Term::Variable(name) => match self.bindings.get(name) {
                Some(bound) => self.resolve(bound),
                None => term.clone(),
            },
            Term::Atom(_) => term.clone(),
            Term::Sequence(items) => Term::Sequence(items.iter().map(|t| self.resolve(t)).collect()),
        }
    }

    /// Bindings with each bound term fully resolved, sorted by variable name.
    pub fn resolved_bindings(&self) -> Vec<(String, Term)> {
        let mut out: Vec<(String, Term)> = self
            .bindings
            .keys()
            .map(|var| (var.clone(), self.resolve(&Term::var(var.as_str()))))
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Check if this substitution is empty (has no bindings).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.resolved_bindings().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", var, term)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (String, Term)>>(iter: I) -> Self {
        Substitution {
            bindings: iter.into_iter().collect(),
        }
    }
}
