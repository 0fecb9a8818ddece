use std::fmt;

/// Coarse classification of a [`Token`], used when reporting what the
/// parser expected to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Identifier,
    Operator,
    Comma,
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Comma => "COMMA",
            TokenKind::EndOfInput => "EOF",
        };
        f.write_str(name)
    }
}

/// A single lexical token. Parentheses are operators, as in `+ - * / % ^ ( )`.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Op(char),
    Comma,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Ident(_) => TokenKind::Identifier,
            Token::Op(_) => TokenKind::Operator,
            Token::Comma => TokenKind::Comma,
            Token::Eof => TokenKind::EndOfInput,
        }
    }

    pub fn is_op(&self, op: char) -> bool {
        matches!(self, Token::Op(c) if *c == op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "<{}: {}>", self.kind(), n),
            Token::Ident(name) => write!(f, "<{}: {}>", self.kind(), name),
            Token::Op(c) => write!(f, "<{}: {}>", self.kind(), c),
            Token::Comma => write!(f, "<{}: ,>", self.kind()),
            Token::Eof => write!(f, "<{}>", self.kind()),
        }
    }
}
