//! ppmedit - Plain PPM image editor
//!
//! A library for reading plain-text PPM (P3) images, applying pixel edits
//! (invert, grayscale, emboss, motion blur) and writing them back out.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod transform;
pub mod types;

pub use error::{PpmError, Result};
pub use parser::{parse_file, parse_ppm, tokenize, Lexer, ParseOptions, Token};
pub use render::{encode_ppm, write_ppm, EncodeOptions};
pub use transform::{apply, Operation};
pub use types::{Channel, Image, Pixel, MAX_COLOR_VALUE};
