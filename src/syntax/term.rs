//! Terms for unification: variables, atoms, and sequences of terms.

use std::fmt;

/// A term of the unification domain.
///
/// In S-expression syntax:
/// - Variables: `x`, `who`, `y1` (lowercase-initial)
/// - Atoms: `Socrates`, `A`, `42`, `"any text"`
/// - Sequences: `(f x y)`, `(Knows John x)`, `()`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A variable; binds to any term.
    Variable(String),
    /// A primitive identifier or literal value; equal only to itself.
    Atom(String),
    /// An ordered list of terms, unified element by element.
    Sequence(Vec<Term>),
}

impl Term {
    /// Create a variable term.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Create an atom term.
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    /// Create a sequence term.
    pub fn seq(items: Vec<Term>) -> Self {
        Term::Sequence(items)
    }

    /// Classify a bare token: lowercase-initial names are variables,
    /// everything else is an atom.
    pub fn from_token(token: &str) -> Self {
        if is_variable_name(token) {
            Term::var(token)
        } else {
            Term::atom(token)
        }
    }
}

/// A name denotes a variable when its first character is a lowercase letter.
pub fn is_variable_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_lowercase())
}

/// Atoms that would read back as variables, directives, comments, or
/// several tokens.
fn needs_quotes(name: &str) -> bool {
    name.is_empty()
        || is_variable_name(name)
        || name.starts_with(':')
        || name.starts_with("//")
        || name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '\\'))
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(name) => write!(f, "{}", name),
            Term::Atom(name) if needs_quotes(name) => {
                write!(f, "\"")?;
                for c in name.chars() {
                    if c == '"' || c == '\\' {
                        write!(f, "\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, "\"")
            }
            Term::Atom(name) => write!(f, "{}", name),
            Term::Sequence(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
        }
    }
}
