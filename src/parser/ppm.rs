//! Plain PPM (P3) parser.
//!
//! Walks the token stream in a fixed order: marker, width, height, max colour
//! value, then `width * height` red/green/blue triples in row-major order.
//! Fails on the first problem; never returns a partly filled image.

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::{PpmError, Result};
use crate::types::{Channel, Image, Pixel, MAX_COLOR_VALUE};

use super::lexer::tokenize;
use super::span::Spanned;
use super::token::Token;

/// Options controlling how strictly input is validated.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Reject tokens after the last pixel instead of ignoring them.
    pub strict: bool,
}

impl ParseOptions {
    /// Options that reject trailing data.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Read, lex and parse a PPM file.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Image> {
    let source = fs::read(path).map_err(|e| PpmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })?;
    debug!("read {} bytes from {}", source.len(), path.display());

    parse_ppm(&source, options)
}

/// Lex and parse an in-memory PPM source.
///
/// The whole source is lexed before parsing starts, so a lexical error is
/// reported even if a structural error appears earlier in the file.
pub fn parse_ppm(source: &[u8], options: &ParseOptions) -> Result<Image> {
    let tokens = tokenize(source)?;
    parse_tokens(tokens, options)
}

/// Parse a token sequence into an image.
pub fn parse_tokens<I>(tokens: I, options: &ParseOptions) -> Result<Image>
where
    I: IntoIterator<Item = Spanned<Token>>,
{
    let mut parser = PpmParser {
        tokens: tokens.into_iter(),
    };

    parser.expect_marker()?;
    let width = parser.expect_dimension("width")?;
    let height = parser.expect_dimension("height")?;
    let max_value = parser.expect_max_value()?;

    let image = parser.parse_pixels(width, height, max_value)?;
    parser.finish(options)?;

    debug!("parsed {}x{} image", image.width(), image.height());
    Ok(image)
}

struct PpmParser<I> {
    tokens: I,
}

impl<I: Iterator<Item = Spanned<Token>>> PpmParser<I> {
    fn next_number(&mut self) -> Option<u32> {
        self.tokens.next().and_then(|t| t.value.as_number())
    }

    fn expect_marker(&mut self) -> Result<()> {
        match self.tokens.next() {
            Some(Spanned {
                value: Token::FormatMarker,
                ..
            }) => Ok(()),
            _ => Err(PpmError::MissingMarker),
        }
    }

    fn expect_dimension(&mut self, field: &'static str) -> Result<u32> {
        let value = self.next_number().ok_or(PpmError::MissingField { field })?;
        if value == 0 {
            return Err(PpmError::InvalidDimension { field, value });
        }
        Ok(value)
    }

    fn expect_max_value(&mut self) -> Result<u8> {
        let value = self.next_number().ok_or(PpmError::MissingField {
            field: "max color value",
        })?;
        if value != u32::from(MAX_COLOR_VALUE) {
            return Err(PpmError::InvalidMaxValue {
                value,
                expected: MAX_COLOR_VALUE,
            });
        }
        Ok(MAX_COLOR_VALUE)
    }

    fn parse_pixels(&mut self, width: u32, height: u32, max_value: u8) -> Result<Image> {
        let too_large = || PpmError::TooLarge { width, height };
        let (w, h) = (width as usize, height as usize);
        let count = w.checked_mul(h).ok_or_else(too_large)?;

        // Header values are untrusted; size the buffer by what the tokens can fill.
        let mut pixels = Vec::with_capacity(count.min(self.tokens.size_hint().0 / 3));
        for row in 0..h {
            for column in 0..w {
                pixels.push(self.expect_pixel(row, column, max_value)?);
            }
        }

        Image::from_pixels(w, h, max_value, pixels).ok_or_else(too_large)
    }

    fn expect_pixel(&mut self, row: usize, column: usize, max: u8) -> Result<Pixel> {
        let mut channels = [0u8; 3];
        for channel in Channel::ALL {
            channels[channel.index()] = self.expect_channel(channel, row, column, max)?;
        }
        Ok(Pixel::from_channels(channels))
    }

    fn expect_channel(&mut self, channel: Channel, row: usize, column: usize, max: u8) -> Result<u8> {
        let value = self.next_number().ok_or(PpmError::MissingChannel {
            channel,
            row,
            column,
        })?;
        if value > u32::from(max) {
            return Err(PpmError::ChannelOutOfRange {
                channel,
                row,
                column,
                value,
                max,
            });
        }
        Ok(value as u8)
    }

    /// Handle whatever follows the last pixel.
    fn finish(&mut self, options: &ParseOptions) -> Result<()> {
        let Some(first) = self.tokens.next() else {
            return Ok(());
        };
        if options.strict {
            return Err(PpmError::TrailingData {
                location: first.location,
            });
        }
        let extra = 1 + self.tokens.by_ref().count();
        warn!(
            "ignoring {} trailing token(s) starting at {}",
            extra, first.location
        );
        Ok(())
    }
}
