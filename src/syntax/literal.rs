//! Literals: signed propositional symbols.

use std::fmt;

/// Marker character that negates a literal in surface syntax.
pub const NEGATION_MARKER: char = '~';

/// A literal is a signed propositional symbol.
///
/// - Positive literal: `rain` means "rain is true"
/// - Negative literal: `~rain` means "rain is false"
///
/// Only a single leading marker is part of the sign; in `~~p` the symbol
/// is `~p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// The proposition name, without the sign marker
    pub symbol: String,
    /// True if positive, false if negated
    pub positive: bool,
}

impl Literal {
    /// Create a positive literal.
    pub fn pos(symbol: impl Into<String>) -> Self {
        Literal {
            symbol: symbol.into(),
            positive: true,
        }
    }

    /// Create a negative literal.
    pub fn neg(symbol: impl Into<String>) -> Self {
        Literal {
            symbol: symbol.into(),
            positive: false,
        }
    }

    /// Read a literal token, stripping at most one leading negation marker.
    pub fn parse(token: &str) -> Self {
        match token.strip_prefix(NEGATION_MARKER) {
            Some(rest) => Literal::neg(rest),
            None => Literal::pos(token),
        }
    }

    /// Return the negation of this literal.
    pub fn negated(&self) -> Literal {
        Literal {
            symbol: self.symbol.clone(),
            positive: !self.positive,
        }
    }

    /// Two literals are complementary when one is the negation of the other.
    pub fn is_complementary(&self, other: &Literal) -> bool {
        self.symbol == other.symbol && self.positive != other.positive
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.symbol)
        } else {
            write!(f, "{}{}", NEGATION_MARKER, self.symbol)
        }
    }
}
