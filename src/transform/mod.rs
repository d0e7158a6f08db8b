//! Pixel transformation engine.
//!
//! Applies one [`Operation`] to every pixel of an image in place. Operations
//! that read neighbours either use a snapshot of the grid taken before the
//! edit (emboss) or only read pixels that have not been written yet (motion
//! blur walks each row left to right).
//!
//! With the `parallel` feature, rows are processed concurrently. Each row is
//! still handled by a single worker in left-to-right order, so the result is
//! identical to the sequential path.

mod point;
mod stencil;

use std::fmt;

use log::debug;

use crate::types::{Image, Pixel};

pub use point::{grayscale, invert};
pub use stencil::{emboss, emboss_row, motion_blur_row, EMBOSS_BASE};

/// An edit to apply to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Invert,
    Grayscale,
    Emboss,
    /// Forward horizontal blur over `length` pixels.
    MotionBlur { length: u32 },
}

impl Operation {
    /// Command-line name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Invert => "invert",
            Operation::Grayscale => "grayscale",
            Operation::Emboss => "emboss",
            Operation::MotionBlur { .. } => "motionblur",
        }
    }

    /// Past-tense verb for status output.
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Invert => "Inverted",
            Operation::Grayscale => "Grayscaled",
            Operation::Emboss => "Embossed",
            Operation::MotionBlur { .. } => "Blurred",
        }
    }

    fn needs_snapshot(&self) -> bool {
        matches!(self, Operation::Emboss)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::MotionBlur { length } => write!(f, "{} ({})", self.name(), length),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Apply an operation to every pixel of the image.
pub fn apply(image: &mut Image, op: &Operation) {
    debug!(
        "applying {} to {}x{} image",
        op,
        image.width(),
        image.height()
    );

    #[cfg(feature = "parallel")]
    apply_parallel(image, op);

    #[cfg(not(feature = "parallel"))]
    apply_sequential(image, op);
}

/// Apply an operation one row at a time on the current thread.
pub fn apply_sequential(image: &mut Image, op: &Operation) {
    let snapshot = op.needs_snapshot().then(|| image.clone());
    let max = image.max_value();

    for (r, row) in image.rows_mut().enumerate() {
        process_row(op, row, above(snapshot.as_ref(), r), max);
    }
}

/// Apply an operation with rows spread over the rayon thread pool.
#[cfg(feature = "parallel")]
pub fn apply_parallel(image: &mut Image, op: &Operation) {
    use rayon::prelude::*;

    let snapshot = op.needs_snapshot().then(|| image.clone());
    let max = image.max_value();
    let width = image.width();

    image
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(r, row)| process_row(op, row, above(snapshot.as_ref(), r), max));
}

/// Snapshot of the row above `r`, if there is one.
fn above(snapshot: Option<&Image>, r: usize) -> Option<&[Pixel]> {
    r.checked_sub(1).and_then(|prev| snapshot?.row(prev))
}

fn process_row(op: &Operation, row: &mut [Pixel], above: Option<&[Pixel]>, max: u8) {
    match *op {
        Operation::Invert => row.iter_mut().for_each(|p| *p = invert(*p, max)),
        Operation::Grayscale => row.iter_mut().for_each(|p| *p = grayscale(*p)),
        Operation::Emboss => emboss_row(row, above, max),
        Operation::MotionBlur { length } => motion_blur_row(row, length),
    }
}
