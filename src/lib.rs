//! Arithmetic expression evaluation in a single pass.
//!
//! The input is tokenized up front and then walked by a recursive-descent
//! parser that computes the value as it goes. Supported syntax: numbers,
//! `+ - * / % ^`, parentheses and the unary functions `sin`, `cos`, `tan`.
//!
//! ```
//! assert_eq!(mathsyn::evaluate("2^3^2"), Ok(512.0));
//! assert_eq!(mathsyn::evaluate("5/0"), Err(mathsyn::CalcError::DivisionByZero));
//! ```
pub mod calc_engine;
pub mod config;
pub mod error;
pub mod functions;
pub mod lexer;
pub mod token;

pub use calc_engine::{EvaluationTrace, Parser, Step};
pub use config::EvalConfig;
pub use error::{CalcError, ErrorKind, Expected};
pub use functions::{is_function, lookup_function, Builtin, FUNCTIONS};
pub use lexer::tokenize;
pub use token::{Token, TokenKind};

use log::debug;

/// Evaluates `input` with the default configuration.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    evaluate_with(input, &EvalConfig::default(), &mut EvaluationTrace::default())
}

/// Evaluates `input`, recording steps into `trace` when it is in detailed mode.
pub fn evaluate_with(
    input: &str,
    config: &EvalConfig,
    trace: &mut EvaluationTrace,
) -> Result<f64, CalcError> {
    let result = tokenize(input).and_then(|tokens| Parser::new(tokens, config).parse(trace));
    match &result {
        Ok(value) => debug!("evaluated {input:?} = {value}"),
        Err(e) => debug!("failed to evaluate {input:?}: {e}"),
    }
    result
}
