//! Lexical tokens of a plain PPM file.

use std::fmt;

/// A single token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The `P3` magic number.
    FormatMarker,
    /// A non-negative decimal integer.
    Number(u32),
}

impl Token {
    /// The numeric payload, if this is a number.
    pub fn as_number(self) -> Option<u32> {
        match self {
            Token::Number(n) => Some(n),
            Token::FormatMarker => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::FormatMarker => write!(f, "P3"),
            Token::Number(n) => write!(f, "{}", n),
        }
    }
}
