//! Session: end-to-end API for building a knowledge base and answering queries.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{ConfigError, ProverConfig};
use crate::parser::{parse_file, Directive, ParseError, Statement};
use crate::resolution::{ResolutionEngine, Saturation, SaturationStats};
use crate::syntax::{Clause, Literal, Term};
use crate::unify::{unify, Substitution, UnifyResult};

/// Answer to a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAnswer {
    /// The knowledge base plus the negated query is refutable.
    Entailed(SaturationStats),
    /// Saturation reached a fixpoint without the empty clause.
    NotEntailed(SaturationStats),
    /// A configured limit stopped saturation first.
    Unknown(SaturationStats),
}

impl QueryAnswer {
    pub fn is_entailed(&self) -> bool {
        matches!(self, QueryAnswer::Entailed(_))
    }

    pub fn stats(&self) -> &SaturationStats {
        match self {
            QueryAnswer::Entailed(stats)
            | QueryAnswer::NotEntailed(stats)
            | QueryAnswer::Unknown(stats) => stats,
        }
    }
}

impl fmt::Display for QueryAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryAnswer::Entailed(_) => write!(f, "yes"),
            QueryAnswer::NotEntailed(_) => write!(f, "no"),
            QueryAnswer::Unknown(_) => write!(f, "unknown"),
        }
    }
}

/// Result of executing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecResult {
    ClauseAdded,
    QueryAnswer(QueryAnswer),
    Unified(UnifyResult),
    DirectiveApplied(DirectiveResult),
}

/// Result of applying a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveResult {
    Loaded { path: String, clauses: usize },
    Set { key: String, value: String },
    Listed(Vec<Clause>),
    Reset { removed: usize },
    Help,
    Quit,
}

/// Session error.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error("{path}: a knowledge-base file cannot contain a {kind}")]
    UnexpectedStatement { path: String, kind: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A session holds the knowledge base and prover configuration.
///
/// Every query runs on a fresh [`ResolutionEngine`]; nothing derived during
/// one proof attempt is kept for the next.
#[derive(Debug, Clone, Default)]
pub struct Session {
    knowledge_base: Vec<Clause>,
    config: ProverConfig,
}

impl Session {
    /// Create a new empty session.
    pub fn new() -> Self {
        Session::default()
    }

    /// Create a session with the given configuration.
    pub fn with_config(config: ProverConfig) -> Self {
        Session {
            knowledge_base: Vec::new(),
            config,
        }
    }

    /// Add a clause to the knowledge base.
    pub fn add_clause(&mut self, clause: Clause) {
        debug!(clause = %clause, "adding clause");
        self.knowledge_base.push(clause);
    }

    /// Execute a parsed statement.
    pub fn execute_statement(&mut self, stmt: Statement) -> Result<ExecResult, SessionError> {
        match stmt {
            Statement::Clause(clause) => {
                self.add_clause(clause);
                Ok(ExecResult::ClauseAdded)
            }
            Statement::Query(literals) => {
                Ok(ExecResult::QueryAnswer(self.execute_query(&literals)))
            }
            Statement::Unify(left, right) => Ok(ExecResult::Unified(self.unify_terms(&left, &right))),
            Statement::Directive(directive) => {
                Ok(ExecResult::DirectiveApplied(self.apply_directive(directive)?))
            }
        }
    }

    /// Prove a query (list of literals) against the knowledge base.
    pub fn execute_query(&self, literals: &[Literal]) -> QueryAnswer {
        let mut engine = ResolutionEngine::from_clauses(self.knowledge_base.clone(), literals);
        let outcome = engine.saturate(&self.config.limits());
        let stats = engine.stats();
        info!(
            query = %display_literals(literals),
            outcome = %outcome,
            rounds = stats.rounds,
            clauses = stats.clauses,
            "query finished"
        );
        match outcome {
            Saturation::Refuted => QueryAnswer::Entailed(stats),
            Saturation::Saturated => QueryAnswer::NotEntailed(stats),
            Saturation::ResourceLimit => QueryAnswer::Unknown(stats),
        }
    }

    /// Unify two terms starting from an empty substitution.
    pub fn unify_terms(&self, left: &Term, right: &Term) -> UnifyResult {
        unify(left, right, &Substitution::empty())
    }

    /// Load a file and add all its clauses to the knowledge base.
    ///
    /// A knowledge-base file holds clause lines, comments, and `:set`
    /// directives. Nothing is added if any line is rejected.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<DirectiveResult, SessionError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let source = std::fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: shown.clone(),
            source,
        })?;
        let statements = parse_file(&source).map_err(|source| SessionError::Parse {
            path: shown.clone(),
            source,
        })?;

        let mut clauses = Vec::new();
        let mut config = self.config;
        for stmt in statements {
            match stmt {
                Statement::Clause(clause) => clauses.push(clause),
                Statement::Directive(Directive::Set { key, value }) => config.set(&key, &value)?,
                other => {
                    return Err(SessionError::UnexpectedStatement {
                        path: shown,
                        kind: other.kind(),
                    })
                }
            }
        }

        let count = clauses.len();
        self.config = config;
        for clause in clauses {
            self.add_clause(clause);
        }
        info!(path = %shown, clauses = count, "loaded knowledge base");
        Ok(DirectiveResult::Loaded {
            path: shown,
            clauses: count,
        })
    }

    /// Apply a directive.
    pub fn apply_directive(&mut self, directive: Directive) -> Result<DirectiveResult, SessionError> {
        match directive {
            Directive::Load(path) => self.load_file(path),
            Directive::Set { key, value } => self.set_option(&key, &value),
            Directive::Clauses => Ok(DirectiveResult::Listed(self.knowledge_base.clone())),
            Directive::Reset => Ok(DirectiveResult::Reset {
                removed: self.reset(),
            }),
            Directive::Help => Ok(DirectiveResult::Help),
            Directive::Quit => Ok(DirectiveResult::Quit),
        }
    }

    /// Update the configuration from a key/value pair.
    pub fn set_option(&mut self, key: &str, value: &str) -> Result<DirectiveResult, SessionError> {
        self.config.set(key, value)?;
        let value = self.config.get(key).unwrap_or_else(|| value.to_string());
        debug!(key, value = %value, "setting updated");
        Ok(DirectiveResult::Set {
            key: key.to_string(),
            value,
        })
    }

    /// Clear the knowledge base. Returns how many clauses were removed.
    pub fn reset(&mut self) -> usize {
        let removed = self.knowledge_base.len();
        self.knowledge_base.clear();
        removed
    }

    /// Access the knowledge base.
    pub fn knowledge_base(&self) -> &[Clause] {
        &self.knowledge_base
    }

    /// Access the current configuration.
    pub fn config(&self) -> &ProverConfig {
        &self.config
    }
}

fn display_literals(literals: &[Literal]) -> String {
    literals
        .iter()
        .map(Literal::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
