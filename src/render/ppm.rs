//! Plain PPM (P3) output.
//!
//! Writes the header on separate lines followed by one channel value per
//! line, red, green and blue for each pixel in row-major order.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{PpmError, Result};
use crate::types::Image;

/// Header comment written when none is configured.
pub const DEFAULT_COMMENT: &str = "Created by ppmedit";

/// Output settings for PPM encoding.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Comment line after the marker; `None` omits it.
    pub comment: Option<String>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            comment: Some(DEFAULT_COMMENT.to_string()),
        }
    }
}

/// Render an image as plain PPM text.
pub fn encode_ppm(image: &Image, options: &EncodeOptions) -> String {
    // Header is short; each channel needs at most "255\n".
    let mut out = String::with_capacity(64 + image.pixels().len() * 12);

    out.push_str("P3\n");
    if let Some(comment) = &options.comment {
        // A newline would end the comment early and corrupt the header
        let comment = comment.replace(['\n', '\r'], " ");
        let _ = writeln!(out, "# {}", comment);
    }
    let _ = writeln!(out, "{} {}", image.width(), image.height());
    let _ = writeln!(out, "{}", image.max_value());

    for row in image.rows() {
        for pixel in row {
            for c in pixel.channels() {
                let _ = writeln!(out, "{}", c);
            }
        }
    }

    out
}

/// Encode an image and write it to `path`.
///
/// The file is written in a single call once encoding is complete.
pub fn write_ppm(image: &Image, path: &Path, options: &EncodeOptions) -> Result<()> {
    let text = encode_ppm(image, options);

    fs::write(path, &text).map_err(|e| PpmError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PPM: {}", e),
    })?;

    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
