//! Per-pixel operations that only look at the pixel itself.

use crate::types::Pixel;

/// Replace every channel `c` with `max - c`.
pub fn invert(pixel: Pixel, max: u8) -> Pixel {
    Pixel::from_channels(pixel.channels().map(|c| max.saturating_sub(c)))
}

/// Set every channel to the truncated mean of the three channels.
pub fn grayscale(pixel: Pixel) -> Pixel {
    let sum: u16 = pixel.channels().iter().map(|&c| u16::from(c)).sum();
    Pixel::gray((sum / 3) as u8)
}
