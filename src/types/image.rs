//! The decoded image grid.

use super::Pixel;

/// The only max colour value accepted in headers.
pub const MAX_COLOR_VALUE: u8 = 255;

/// A decoded image: dimensions, colour ceiling, and a row-major pixel grid.
///
/// The grid is always fully populated. Pixel `(row, col)` lives at
/// `pixels[row * width + col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    max_value: u8,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Create an image from a complete row-major pixel buffer.
    ///
    /// Returns `None` unless both dimensions are positive, the buffer holds
    /// exactly `width * height` pixels, and `max_value` is `MAX_COLOR_VALUE`.
    /// With the ceiling at `u8::MAX`, every channel is in range by type.
    pub fn from_pixels(width: usize, height: usize, max_value: u8, pixels: Vec<Pixel>) -> Option<Self> {
        if width == 0 || height == 0 || max_value != MAX_COLOR_VALUE {
            return None;
        }
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self {
            width,
            height,
            max_value,
            pixels,
        })
    }

    /// Create an image from rows of pixels (`rows[y][x]`).
    ///
    /// Returns `None` for ragged rows or anything `from_pixels` rejects.
    pub fn from_rows(rows: Vec<Vec<Pixel>>, max_value: u8) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let pixels = rows.into_iter().flatten().collect();
        Self::from_pixels(width, height, max_value, pixels)
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Declared colour ceiling.
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Get a pixel at the given position.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        self.index(row, col).map(|i| self.pixels[i])
    }

    /// A single row of pixels.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks(self.width)
    }

    /// Iterate mutably over rows top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        self.pixels.chunks_mut(self.width)
    }

    /// The whole grid in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }
}
