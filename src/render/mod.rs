//! Scaling and encoding of base patterns into final images

/// PNG encoding
pub mod encode;
/// Nearest-neighbor upscaling and downscaling
pub mod scale;

pub use encode::encode_png;
pub use scale::scale_nearest;
