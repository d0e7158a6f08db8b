//! Byte-level lexer for plain PPM files.
//!
//! Scans the source one byte at a time, producing `P3` markers and decimal
//! numbers. Whitespace (space, tab, CR, LF) separates tokens and `#` starts a
//! comment that runs to the end of the line. Anything else is an error.

use log::{debug, trace};

use crate::error::{PpmError, Result};

use super::span::{Location, Spanned};
use super::token::Token;

/// The PPM lexer.
///
/// Yields tokens lazily; stops after the first error.
pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    location: Location,
    failed: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            pos: 0,
            location: Location::start(),
            failed: false,
        }
    }

    // === Byte navigation ===

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        self.location.advance(byte);
        Some(byte)
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r') => {
                    self.bump();
                }
                Some(b'#') => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skip to just past the next newline, or to end of input.
    fn skip_comment(&mut self) {
        while let Some(byte) = self.bump() {
            if byte == b'\n' {
                break;
            }
        }
    }

    // === Tokens ===

    fn lex_number(&mut self, start: Location) -> Result<Token> {
        let begin = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
        let digits = &self.source[begin..self.pos];

        digits
            .iter()
            .try_fold(0u32, |acc, &d| {
                acc.checked_mul(10)?.checked_add(u32::from(d - b'0'))
            })
            .map(Token::Number)
            .ok_or_else(|| PpmError::Lex {
                message: format!("number too large: {}", String::from_utf8_lossy(digits)),
                location: start,
                help: None,
            })
    }

    fn lex_marker(&mut self) -> Result<Token> {
        self.bump(); // 'P'
        let at = self.location;
        let found = match self.bump() {
            Some(b'3') => return Ok(Token::FormatMarker),
            Some(byte) => describe(byte),
            None => "end of input".to_string(),
        };
        Err(PpmError::Lex {
            message: format!("expected '3' after 'P', found {}", found),
            location: at,
            help: Some("Only the plain-text P3 variant is supported".to_string()),
        })
    }

    fn next_token(&mut self) -> Option<Result<Spanned<Token>>> {
        self.skip_trivia();
        let start = self.location;

        let token = match self.peek()? {
            b'0'..=b'9' => self.lex_number(start),
            b'P' => self.lex_marker(),
            other => Err(PpmError::Lex {
                message: format!("unexpected {}", describe(other)),
                location: start,
                help: None,
            }),
        };

        if let Ok(t) = &token {
            trace!("token {} at {}", t, start);
        }
        Some(token.map(|t| Spanned::new(t, start)))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned<Token>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token();
        if matches!(item, Some(Err(_))) {
            self.failed = true;
        }
        item
    }
}

/// Tokenize an entire source buffer.
pub fn tokenize(source: &[u8]) -> Result<Vec<Spanned<Token>>> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>>>()?;
    debug!("lexed {} tokens from {} bytes", tokens.len(), source.len());
    Ok(tokens)
}

/// Human-readable name for a byte in error messages.
fn describe(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("character '{}' (code {})", byte as char, byte)
    } else {
        format!("byte code {}", byte)
    }
}
