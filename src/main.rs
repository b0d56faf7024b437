//! proplog CLI - propositional resolution prover with a term unifier.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use proplog::config::ProverConfig;
use proplog::parser::parse_term;
use proplog::repl::Repl;
use proplog::session::{QueryAnswer, Session};
use proplog::syntax::Literal;
use proplog::unify::UnifyResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "proplog")]
#[command(about = "Resolution-refutation prover for propositional clauses")]
struct Args {
    /// Knowledge-base files to load before anything else
    files: Vec<PathBuf>,

    /// JSON file with prover limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prove these literals (space separated) and exit instead of starting the REPL
    #[arg(long, value_name = "LITERALS")]
    query: Option<String>,

    /// Unify two terms, print the result, and exit
    #[arg(long, num_args = 2, value_names = ["TERM", "TERM"])]
    unify: Option<Vec<String>>,
}

fn main() -> ExitCode {
    // Use RUST_LOG to control log levels, e.g. RUST_LOG=proplog=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ProverConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ProverConfig::default(),
    };

    let mut session = Session::with_config(config);
    for path in &args.files {
        if let Err(e) = session.load_file(path) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if let Some(terms) = &args.unify {
        return run_unify(&session, terms);
    }

    if let Some(query) = &args.query {
        let literals: Vec<Literal> = query.split_whitespace().map(Literal::parse).collect();
        let answer = session.execute_query(&literals);
        println!("{}", answer);
        return match answer {
            QueryAnswer::Unknown(_) => ExitCode::from(2),
            _ => ExitCode::SUCCESS,
        };
    }

    println!("proplog - resolution refutation over propositional clauses");
    println!("Type :help for help, :quit to exit.\n");

    let mut repl = Repl::with_session(session);
    if let Err(e) = repl.run() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_unify(session: &Session, terms: &[String]) -> ExitCode {
    let parsed: Result<Vec<_>, _> = terms.iter().map(|t| parse_term(t)).collect();
    match parsed.as_deref() {
        Ok([left, right]) => {
            match session.unify_terms(left, right) {
                UnifyResult::Success(subst) => println!("{}", subst),
                UnifyResult::Failure(reason) => println!("no: {}", reason),
            }
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("Error: --unify takes exactly two terms");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
