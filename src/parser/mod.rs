//! Parser modules for plain PPM (P3) files.
//!
//! Parsing happens in two passes: the lexer turns raw bytes into tokens,
//! then the PPM parser validates the header and fills the pixel grid.
//!
//! # File Structure
//!
//! - The `P3` format marker
//! - Optional `#` comments, running to the end of the line, anywhere
//! - Width and height
//! - Max colour value (must be 255)
//! - `width * height` red/green/blue triples in row-major order
//!
//! # Usage
//!
//! ```ignore
//! use ppmedit::parser::{parse_file, ParseOptions};
//!
//! let image = parse_file("photo.ppm".as_ref(), &ParseOptions::default())?;
//! println!("{}x{}", image.width(), image.height());
//! ```

mod lexer;
mod ppm;
pub mod span;
pub mod token;

// Re-export main entry points
pub use lexer::{tokenize, Lexer};
pub use ppm::{parse_file, parse_ppm, parse_tokens, ParseOptions};
pub use span::{Location, Spanned};
pub use token::Token;
