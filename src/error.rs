//! Error type shared by the lexer and the parser/evaluator.
//!
//! Every failure aborts the evaluation at the first malformed construct, so a
//! [`CalcError`] always describes exactly one problem. The variants carry
//! enough context (offending character, token, operands) for a front end to
//! render a precise message.
use crate::token::{Token, TokenKind};
use std::fmt;
use thiserror::Error;

/// What the parser was looking for when it hit an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected {
    /// Any token of this kind.
    Kind(TokenKind),
    /// A specific operator character, such as `)`.
    Op(char),
    /// The start of a primary: a number, a function call or `(`.
    Operand,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{kind}"),
            Expected::Op(c) => write!(f, "'{c}'"),
            Expected::Operand => f.write_str("a number, function, or '('"),
        }
    }
}

/// Broad class of a [`CalcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A character outside every recognised token class.
    #[error("invalid character '{character}' at position {position}")]
    Lexical { character: char, position: usize },

    /// A run of digits and dots that does not decode as a number, e.g. `1.2.3`.
    #[error("invalid number literal '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("expected {expected}, but got {found}")]
    Syntax { expected: Expected, found: Token },

    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("modulus by zero")]
    ModulusByZero,

    /// The operation has no real-valued result, e.g. `(0-8) ^ 0.5`.
    #[error("math domain error in {operation}")]
    Domain { operation: String },

    #[error("numeric overflow in {operation}")]
    Overflow { operation: String },

    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lexical { .. } | CalcError::InvalidNumber { .. } => ErrorKind::Lexical,
            CalcError::Syntax { .. } | CalcError::NestingTooDeep { .. } => ErrorKind::Syntax,
            CalcError::UndefinedFunction { .. }
            | CalcError::DivisionByZero
            | CalcError::ModulusByZero
            | CalcError::Domain { .. }
            | CalcError::Overflow { .. } => ErrorKind::Semantic,
        }
    }

    pub(crate) fn syntax(expected: Expected, found: &Token) -> Self {
        CalcError::Syntax {
            expected,
            found: found.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        let err = CalcError::Lexical {
            character: '#',
            position: 1,
        };
        assert_eq!(err.to_string(), "invalid character '#' at position 1");

        let err = CalcError::syntax(Expected::Op(')'), &Token::Eof);
        assert_eq!(err.to_string(), "expected ')', but got <EOF>");

        let err = CalcError::syntax(Expected::Operand, &Token::Op('-'));
        assert_eq!(
            err.to_string(),
            "expected a number, function, or '(', but got <OPERATOR: ->"
        );

        let err = CalcError::syntax(Expected::Kind(TokenKind::EndOfInput), &Token::Number(3.0));
        assert_eq!(err.to_string(), "expected EOF, but got <NUMBER: 3>");
    }

    #[test]
    fn kinds_group_variants() {
        assert_eq!(CalcError::DivisionByZero.kind(), ErrorKind::Semantic);
        assert_eq!(
            CalcError::InvalidNumber {
                text: ".".into(),
                position: 0
            }
            .kind(),
            ErrorKind::Lexical
        );
        assert_eq!(CalcError::NestingTooDeep { limit: 4 }.kind(), ErrorKind::Syntax);
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}

    #[test]
    fn calc_error_is_send_sync_static() {
        _assert_send_sync_static::<CalcError>();
    }
}
