//! Core domain types for ppmedit.
//!
//! - `Pixel` - RGB pixel values
//! - `Channel` - one colour component of a pixel
//! - `Image` - dimensions plus a row-major pixel grid

mod image;
mod pixel;

pub use image::{Image, MAX_COLOR_VALUE};
pub use pixel::{Channel, Pixel};
