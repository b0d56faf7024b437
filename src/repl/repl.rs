//! REPL implementation.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::parser::{parse_line, ParseError};
use crate::session::{DirectiveResult, ExecResult, Session, SessionError};
use crate::unify::UnifyResult;

const HELP: &str = "\
Statements, one per line:
  ~p ~q r              add a clause (disjunction of literals)
  ?- p q               prove that at least one of p, q follows
                       (each literal is negated separately)
  :unify (A x) (A B)   unify two terms
  :load \"file\"         load a knowledge-base file
  :set KEY VALUE       set max_rounds or max_clauses (a number or none)
  :clauses             list the knowledge base
  :reset               clear the knowledge base
  :help                show this message
  :quit                leave";

/// REPL error.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Interactive REPL for proplog.
pub struct Repl {
    session: Session,
    done: bool,
}

impl Repl {
    /// Create a new REPL.
    pub fn new() -> Self {
        Repl::with_session(Session::new())
    }

    /// Create a REPL over an existing session.
    pub fn with_session(session: Session) -> Self {
        Repl {
            session,
            done: false,
        }
    }

    /// Whether `:quit` has been processed.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Access the underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process a line of input, returning the text to show.
    pub fn process_line(&mut self, line: &str) -> Result<String, ReplError> {
        let stmt = match parse_line(line)? {
            Some(stmt) => stmt,
            None => return Ok(String::new()),
        };
        let output = match self.session.execute_statement(stmt)? {
            ExecResult::ClauseAdded => String::new(),
            ExecResult::QueryAnswer(answer) => answer.to_string(),
            ExecResult::Unified(UnifyResult::Success(subst)) => subst.to_string(),
            ExecResult::Unified(UnifyResult::Failure(reason)) => format!("no: {}", reason),
            ExecResult::DirectiveApplied(DirectiveResult::Quit) => {
                self.done = true;
                String::new()
            }
            ExecResult::DirectiveApplied(result) => render_directive(&result),
        };
        Ok(output)
    }

    /// Run the REPL interactively on stdin and stdout.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the REPL over arbitrary input and output streams.
    ///
    /// Errors from individual lines are reported and the loop continues;
    /// only I/O failures end it early.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ReplError> {
        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            match self.process_line(&line) {
                Ok(text) if text.is_empty() => {}
                Ok(text) => writeln!(output, "{}", text)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
            if self.done {
                break;
            }
            write!(output, "> ")?;
            output.flush()?;
        }
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

fn render_directive(result: &DirectiveResult) -> String {
    match result {
        DirectiveResult::Loaded { path, clauses } => {
            format!("loaded {} clause(s) from {}", clauses, path)
        }
        DirectiveResult::Set { key, value } => format!("{} = {}", key, value),
        DirectiveResult::Listed(clauses) if clauses.is_empty() => "(no clauses)".to_string(),
        DirectiveResult::Listed(clauses) => clauses
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        DirectiveResult::Reset { removed } => format!("removed {} clause(s)", removed),
        DirectiveResult::Help => HELP.to_string(),
        DirectiveResult::Quit => String::new(),
    }
}
