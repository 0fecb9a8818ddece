mod display;
#[cfg(feature = "line")]
mod line_mode;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::{Context, Result};
use display::format_number;
use mathsyn::{evaluate_with, EvalConfig, EvaluationTrace};
use std::io::{self, Write};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: mathsyn [EXPRESSION...]
       mathsyn --plain | --line | --help

With an expression, evaluate it once and exit (status 1 on error).
Without one, start the interactive calculator.

Environment:
  MATHSYN_MAX_DEPTH  deepest allowed nesting (default 256)
  RUST_LOG           log filter, e.g. debug";

fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

fn main() -> Result<ExitCode> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("--help") | Some("-h") => {
            println!("{USAGE}");
            Ok(ExitCode::SUCCESS)
        }
        Some("--plain") => {
            init_logger();
            run_plain(&EvalConfig::from_env())
        }
        Some("--line") => run_line(),
        Some(_) => {
            init_logger();
            Ok(run_once(&args.join(" "), &EvalConfig::from_env()))
        }
        None => run_interactive(),
    }
}

/// Evaluates one expression, printing the value or the error.
fn run_once(input: &str, config: &EvalConfig) -> ExitCode {
    let mut trace = EvaluationTrace::new(false);
    match evaluate_with(input, config, &mut trace) {
        Ok(value) => {
            println!("Result: {}", format_number(value));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_plain(config: &EvalConfig) -> Result<ExitCode> {
    println!("Enter a mathematical expression:");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read expression")?;
    Ok(run_once(input.trim_end(), config))
}

#[cfg(feature = "line")]
fn run_line() -> Result<ExitCode> {
    init_logger();
    line_mode::run_line(EvalConfig::from_env())?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(not(feature = "line"))]
fn run_line() -> Result<ExitCode> {
    eprintln!("line mode is not available; rebuild with --features line");
    Ok(ExitCode::FAILURE)
}

#[cfg(feature = "tui")]
fn run_interactive() -> Result<ExitCode> {
    // No stderr logger here; it would draw over the screen.
    tui_mode::run_tui(EvalConfig::from_env())?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(all(feature = "line", not(feature = "tui")))]
fn run_interactive() -> Result<ExitCode> {
    run_line()
}

#[cfg(not(any(feature = "tui", feature = "line")))]
fn run_interactive() -> Result<ExitCode> {
    init_logger();
    run_plain(&EvalConfig::from_env())
}
