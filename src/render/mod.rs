//! Rendering module for ppmedit.
//!
//! Turns an in-memory image back into plain PPM text.

mod ppm;

pub use ppm::{encode_ppm, write_ppm, EncodeOptions, DEFAULT_COMMENT};
