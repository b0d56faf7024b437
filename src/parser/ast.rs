//! AST types for proplog surface syntax.

use crate::syntax::{Clause, Literal, Term};

/// A statement: one non-blank line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A knowledge-base clause (disjunction of literals)
    Clause(Clause),
    /// A query to prove (`?- p q`)
    Query(Vec<Literal>),
    /// A unification request (`:unify t1 t2`)
    Unify(Term, Term),
    /// A directive
    Directive(Directive),
}

impl Statement {
    /// Short name of the statement kind, used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Clause(_) => "clause",
            Statement::Query(_) => "query",
            Statement::Unify(_, _) => "unify request",
            Statement::Directive(_) => "directive",
        }
    }
}

/// A directive in proplog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Load a knowledge-base file
    Load(String),
    /// Set a configuration option
    Set { key: String, value: String },
    /// List the knowledge base
    Clauses,
    /// Clear the knowledge base
    Reset,
    /// Show help
    Help,
    /// Leave the REPL
    Quit,
}
