use crate::config::EvalConfig;
use crate::error::{CalcError, Expected};
use crate::functions::lookup_function;
use crate::token::{Token, TokenKind};
use log::trace;

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub operation: String,
    pub result: f64,
}

/// Record of the operations applied during one evaluation, in the order they
/// were performed. Steps are only kept when `detailed_mode` is on.
#[derive(Debug, Clone, Default)]
pub struct EvaluationTrace {
    pub steps: Vec<Step>,
    pub detailed_mode: bool,
}

impl EvaluationTrace {
    pub fn new(detailed_mode: bool) -> Self {
        EvaluationTrace {
            steps: Vec::new(),
            detailed_mode,
        }
    }

    pub fn add_step(&mut self, operation: String, result: f64) {
        trace!("step {operation} = {result}");
        if self.detailed_mode {
            self.steps.push(Step { operation, result });
        }
    }
}

/// Recursive-descent evaluator over a token sequence.
///
/// Each grammar rule returns the value of the text it consumed; no tree is
/// built. The token at `current` is the single lookahead.
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := factor (('*' | '/' | '%') factor)*
/// factor  := primary ('^' factor)?
/// primary := '(' expr ')' | NUMBER | IDENTIFIER '(' expr ')'
/// ```
///
/// There is no unary minus: `-5` is a syntax error.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>, config: &EvalConfig) -> Self {
        if tokens.last() != Some(&Token::Eof) {
            tokens.push(Token::Eof);
        }
        Parser {
            tokens,
            current: 0,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Evaluates the whole token sequence; anything left after a complete
    /// expression is an error.
    pub fn parse(&mut self, trace: &mut EvaluationTrace) -> Result<f64, CalcError> {
        let result = self.expr(trace)?;
        match self.peek() {
            Token::Eof => Ok(result),
            other => Err(CalcError::syntax(
                Expected::Kind(TokenKind::EndOfInput),
                other,
            )),
        }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        // Eof is never consumed past.
        if self.current + 1 < self.tokens.len() {
            self.current += 1;
        }
        token
    }

    fn expect_op(&mut self, op: char) -> Result<(), CalcError> {
        if self.peek().is_op(op) {
            self.advance();
            Ok(())
        } else {
            Err(CalcError::syntax(Expected::Op(op), self.peek()))
        }
    }

    fn enter(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(CalcError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expr(&mut self, trace: &mut EvaluationTrace) -> Result<f64, CalcError> {
        let mut left = self.term(trace)?;

        loop {
            let op = match self.peek() {
                Token::Op(c @ ('+' | '-')) => *c,
                _ => break,
            };
            self.advance();
            let right = self.term(trace)?;
            let result = binary(left, op, right)?;
            trace.add_step(describe(left, op, right), result);
            left = result;
        }
        Ok(left)
    }

    fn term(&mut self, trace: &mut EvaluationTrace) -> Result<f64, CalcError> {
        let mut left = self.factor(trace)?;

        loop {
            let op = match self.peek() {
                Token::Op(c @ ('*' | '/' | '%')) => *c,
                _ => break,
            };
            self.advance();
            let right = self.factor(trace)?;
            let result = binary(left, op, right)?;
            trace.add_step(describe(left, op, right), result);
            left = result;
        }
        Ok(left)
    }

    fn factor(&mut self, trace: &mut EvaluationTrace) -> Result<f64, CalcError> {
        let base = self.primary(trace)?;

        if self.peek().is_op('^') {
            self.advance();
            self.enter()?;
            let exponent = self.factor(trace)?;
            self.leave();
            let result = power(base, exponent)?;
            trace.add_step(describe(base, '^', exponent), result);
            Ok(result)
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self, trace: &mut EvaluationTrace) -> Result<f64, CalcError> {
        match self.peek() {
            Token::Op('(') => {
                self.advance();
                self.enter()?;
                let value = self.expr(trace)?;
                self.expect_op(')')?;
                self.leave();
                Ok(value)
            }
            Token::Number(n) => {
                let n = *n;
                self.advance();
                Ok(n)
            }
            Token::Ident(name) => {
                let Some(function) = lookup_function(name) else {
                    return Err(CalcError::UndefinedFunction { name: name.clone() });
                };
                self.advance();
                self.expect_op('(')?;
                self.enter()?;
                let arg = self.expr(trace)?;
                self.expect_op(')')?;
                self.leave();

                let result = (function.apply)(arg);
                let operation = format!("{}({})", function.name, operand(arg));
                if result.is_nan() && !arg.is_nan() {
                    return Err(CalcError::Domain { operation });
                }
                trace.add_step(operation, result);
                Ok(result)
            }
            other => Err(CalcError::syntax(Expected::Operand, other)),
        }
    }
}

/// Negative operands are parenthesized so `-8 ^ 0.5` cannot read as `-(8 ^ 0.5)`.
fn operand(x: f64) -> String {
    if x.is_sign_negative() && !x.is_nan() {
        format!("({})", x)
    } else {
        x.to_string()
    }
}

fn describe(left: f64, op: char, right: f64) -> String {
    format!("{} {} {}", operand(left), op, operand(right))
}

/// Applies one of `+ - * / %`. NaN out of non-NaN operands (`inf - inf`,
/// `inf * 0`) is a domain error, as for powers and function calls.
fn binary(left: f64, op: char, right: f64) -> Result<f64, CalcError> {
    let result = match op {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => {
            if right == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            left / right
        }
        _ => {
            if right == 0.0 {
                return Err(CalcError::ModulusByZero);
            }
            left % right
        }
    };
    if result.is_nan() && !left.is_nan() && !right.is_nan() {
        return Err(CalcError::Domain {
            operation: describe(left, op, right),
        });
    }
    Ok(result)
}

/// Real-valued `base ^ exponent`, rejecting results that are not real numbers.
fn power(base: f64, exponent: f64) -> Result<f64, CalcError> {
    let operation = || describe(base, '^', exponent);

    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::Domain {
            operation: operation(),
        });
    }
    let result = base.powf(exponent);
    if result.is_nan() && !base.is_nan() && !exponent.is_nan() {
        return Err(CalcError::Domain {
            operation: operation(),
        });
    }
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(CalcError::Overflow {
            operation: operation(),
        });
    }
    Ok(result)
}
