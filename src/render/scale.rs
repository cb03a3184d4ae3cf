//! Nearest-neighbor resampling of base patterns

use image::RgbaImage;

use crate::io::error::{Result, invalid_configuration};

// Integer form of sampling at the destination pixel center: floor((2d + 1) * src / (2 * dst))
const fn nearest_source(dest: u32, dest_len: u32, src_len: u32) -> u32 {
    let numerator = (2 * dest as u64 + 1) * src_len as u64;
    let source = numerator / (2 * dest_len as u64);
    source as u32
}

/// Resample `base` to a `dimension` x `dimension` image without blending
///
/// Every output pixel takes the value of the source pixel under its center,
/// so hard cell edges survive any ratio, including downscaling.
///
/// # Errors
///
/// Returns an error if `dimension` is zero or `base` has no pixels
pub fn scale_nearest(base: &RgbaImage, dimension: u32) -> Result<RgbaImage> {
    if dimension == 0 {
        return Err(invalid_configuration(
            "dimension",
            &dimension,
            &"output dimension must be positive",
        ));
    }
    let (src_width, src_height) = base.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(invalid_configuration(
            "pattern_size",
            &format!("{src_width}x{src_height}"),
            &"base pattern has no pixels",
        ));
    }

    Ok(RgbaImage::from_fn(dimension, dimension, |x, y| {
        let sx = nearest_source(x, dimension, src_width);
        let sy = nearest_source(y, dimension, src_height);
        *base.get_pixel(sx, sy)
    }))
}
