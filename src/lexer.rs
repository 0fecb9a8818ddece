use crate::error::CalcError;
use crate::token::Token;
use log::{debug, trace};

/// Splits `input` into tokens, terminated by a single [`Token::Eof`].
///
/// Number literals are scanned leniently as any run of digits and dots and
/// then decoded; a run that does not decode (`"."`, `"1.2.3"`) is reported as
/// [`CalcError::InvalidNumber`] rather than as a bad character. Positions in
/// errors are character offsets.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some(&(pos, c)) = chars.peek() {
        let emitted = tokens.len();
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '+' | '-' | '*' | '/' | '%' | '^' | '(' | ')' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            ',' => {
                tokens.push(Token::Comma);
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut num_str = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if ch.is_ascii_digit() || ch == '.' {
                        num_str.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }

                let value = num_str
                    .parse::<f64>()
                    .map_err(|_| CalcError::InvalidNumber {
                        text: num_str.clone(),
                        position: pos,
                    })?;
                tokens.push(Token::Number(value));
            }
            'a'..='z' | 'A'..='Z' => {
                let mut ident = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if ch.is_ascii_alphanumeric() {
                        ident.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(ident));
            }
            _ => {
                debug!("lexical error: {c:?} at position {pos}");
                return Err(CalcError::Lexical {
                    character: c,
                    position: pos,
                });
            }
        }

        if tokens.len() > emitted {
            trace!("token {} at {pos}", tokens[emitted]);
        }
    }

    tokens.push(Token::Eof);
    debug!("tokenized {} chars into {} tokens", input.chars().count(), tokens.len());
    Ok(tokens)
}
