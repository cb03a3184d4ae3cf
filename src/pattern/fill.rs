//! Symmetric pattern fill strategies
//!
//! Both strategies draw exactly one uniform value per cell in the independent
//! half of the grid and none in the mirrored half, so the sequence of draws
//! and therefore the pattern is fully determined by the generator state.

use image::{Rgba, RgbaImage};
use rand::{Rng, RngCore};

use crate::io::configuration::FILL_THRESHOLD;

const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Background for cells that lose their draw
pub const fn background_color(dark_mode: bool) -> Rgba<u8> {
    if dark_mode { OPAQUE_BLACK } else { OPAQUE_WHITE }
}

fn square_side(image: &RgbaImage) -> u32 {
    debug_assert_eq!(image.width(), image.height(), "pattern image must be square");
    image.width().min(image.height())
}

fn draw_cell(rng: &mut dyn RngCore, fill: Rgba<u8>, background: Rgba<u8>) -> Rgba<u8> {
    if rng.random::<f64>() < FILL_THRESHOLD {
        fill
    } else {
        background
    }
}

/// Randomize the top rows and mirror them downward
///
/// Rows `0..=size/2` are drawn row by row, left to right. Every lower row `y`
/// copies row `size - 1 - y`, giving symmetry about the horizontal center line.
///
/// The image must be square. Release builds fill only the top-left square of
/// a rectangular image.
///
/// # Panics
///
/// Panics in debug builds if `image` is not square.
pub fn descend_mirror(
    image: &mut RgbaImage,
    fill: Rgba<u8>,
    dark_mode: bool,
    rng: &mut dyn RngCore,
) {
    let size = square_side(image);
    let half = size / 2;
    let background = background_color(dark_mode);

    for y in 0..size {
        for x in 0..size {
            let pixel = if y <= half {
                draw_cell(rng, fill, background)
            } else {
                *image.get_pixel(x, size - y - 1)
            };
            image.put_pixel(x, y, pixel);
        }
    }
}

/// Randomize the left columns and mirror them rightward, bottom row first
///
/// Columns `0..=size/2` are drawn, every column `x` past the center copies
/// column `size - 1 - x` of the same row, giving symmetry about the vertical
/// center line. Rows are visited from `size - 1` down to `0`.
///
/// The image must be square, as for [`descend_mirror`].
///
/// # Panics
///
/// Panics in debug builds if `image` is not square.
pub fn ascend_mirror(
    image: &mut RgbaImage,
    fill: Rgba<u8>,
    dark_mode: bool,
    rng: &mut dyn RngCore,
) {
    let size = square_side(image);
    let half = size / 2;
    let background = background_color(dark_mode);

    for y in (0..size).rev() {
        for x in 0..size {
            let pixel = if x <= half {
                draw_cell(rng, fill, background)
            } else {
                *image.get_pixel(size - x - 1, y)
            };
            image.put_pixel(x, y, pixel);
        }
    }
}

/// Number of random draws a fill of the given side length consumes
pub const fn draws_per_fill(size: u32) -> u64 {
    let independent = (size / 2 + 1) as u64;
    independent * size as u64
}
