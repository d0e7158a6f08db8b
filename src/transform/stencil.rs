//! Row operations whose output depends on neighbouring pixels.

use crate::types::Pixel;

/// Grey level of an embossed pixel with no difference to its neighbour.
pub const EMBOSS_BASE: i32 = 128;

/// Emboss one pixel against its up-left neighbour from the snapshot.
///
/// Picks the channel difference with the largest magnitude. A later channel
/// only replaces an earlier one when strictly larger, so ties resolve in
/// red, green, blue order.
pub fn emboss(current: Pixel, reference: Pixel, max: u8) -> Pixel {
    let mut greatest = 0i32;
    for (cur, old) in current.channels().into_iter().zip(reference.channels()) {
        let diff = i32::from(cur) - i32::from(old);
        if diff.abs() > greatest.abs() {
            greatest = diff;
        }
    }
    let v = (greatest + EMBOSS_BASE).clamp(0, i32::from(max));
    Pixel::gray(v as u8)
}

/// Emboss a row in place.
///
/// `above` is the snapshot of the previous row, or `None` for the first row.
/// Pixels without an up-left neighbour become `EMBOSS_BASE`.
pub fn emboss_row(row: &mut [Pixel], above: Option<&[Pixel]>, max: u8) {
    for (col, pixel) in row.iter_mut().enumerate() {
        let reference = match above {
            Some(above) if col > 0 => above.get(col - 1).copied(),
            _ => None,
        };
        *pixel = match reference {
            Some(reference) => emboss(*pixel, reference, max),
            None => Pixel::gray(EMBOSS_BASE as u8),
        };
    }
}

/// Horizontal forward blur of a row, in place.
///
/// Each pixel becomes the per-channel truncated mean of itself and up to
/// `length - 1` pixels to its right. The row is walked left to right, so every
/// read sees values that have not been blurred yet. A length of zero averages
/// nothing and yields black.
pub fn motion_blur_row(row: &mut [Pixel], length: u32) {
    let width = row.len();
    for col in 0..width {
        let end = col.saturating_add(length as usize).min(width);
        let window = &row[col..end];
        row[col] = average(window);
    }
}

fn average(window: &[Pixel]) -> Pixel {
    if window.is_empty() {
        return Pixel::BLACK;
    }
    let mut sums = [0u64; 3];
    for pixel in window {
        for (sum, c) in sums.iter_mut().zip(pixel.channels()) {
            *sum += u64::from(c);
        }
    }
    let count = window.len() as u64;
    Pixel::from_channels(sums.map(|s| (s / count) as u8))
}
