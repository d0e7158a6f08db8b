use miette::Diagnostic;
use thiserror::Error;

use crate::parser::Location;
use crate::types::Channel;

/// Main error type for ppmedit operations
#[derive(Error, Diagnostic, Debug)]
pub enum PpmError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ppm::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Usage error: {message}")]
    #[diagnostic(code(ppm::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid token at {location}: {message}")]
    #[diagnostic(code(ppm::lex))]
    Lex {
        message: String,
        location: Location,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid file format (missing format marker 'P3')")]
    #[diagnostic(
        code(ppm::parse::marker),
        help("Plain PPM files must start with the P3 marker")
    )]
    MissingMarker,

    #[error("Invalid file format (missing {field})")]
    #[diagnostic(code(ppm::parse::header))]
    MissingField { field: &'static str },

    #[error("Invalid file format (invalid {field}: {value})")]
    #[diagnostic(code(ppm::parse::header))]
    InvalidDimension { field: &'static str, value: u32 },

    #[error("Invalid file format (image of {width}x{height} pixels is too large)")]
    #[diagnostic(code(ppm::parse::header))]
    TooLarge { width: u32, height: u32 },

    #[error("Invalid file format (invalid max color value {value}, expected {expected})")]
    #[diagnostic(code(ppm::parse::max_value))]
    InvalidMaxValue { value: u32, expected: u8 },

    #[error("Invalid file format (missing pixel color value - {channel} at ({row},{column}))")]
    #[diagnostic(code(ppm::parse::pixel))]
    MissingChannel {
        channel: Channel,
        row: usize,
        column: usize,
    },

    #[error("Invalid file format (({row},{column}) {channel} value {value} exceeds {max})")]
    #[diagnostic(code(ppm::parse::pixel))]
    ChannelOutOfRange {
        channel: Channel,
        row: usize,
        column: usize,
        value: u32,
        max: u8,
    },

    #[error("Invalid file format (unexpected data after the last pixel at {location})")]
    #[diagnostic(
        code(ppm::parse::trailing),
        help("Remove the extra values or run without --strict")
    )]
    TrailingData { location: Location },
}

pub type Result<T> = std::result::Result<T, PpmError>;
