//! Generation defaults and validation limits

/// Smallest preset base pattern (5x5 cells)
pub const PATTERN_SIZE_5: u32 = 5;
/// Medium preset base pattern (7x7 cells)
pub const PATTERN_SIZE_7: u32 = 7;
/// Largest preset base pattern (9x9 cells)
pub const PATTERN_SIZE_9: u32 = 9;

/// Base pattern side length used when none is configured
pub const DEFAULT_PATTERN_SIZE: u32 = PATTERN_SIZE_5;

/// Output side length in pixels used when none is configured
pub const DEFAULT_DIMENSION: u32 = 100;

// Keeps a typo from requesting a multi-gigabyte buffer
/// Maximum allowed output side length in pixels
pub const MAX_DIMENSION: u32 = 4096;

/// Maximum allowed base pattern side length (must be odd)
pub const MAX_PATTERN_SIZE: u32 = 63;

/// A cell takes the fill color when its uniform draw falls below this value
pub const FILL_THRESHOLD: f64 = 0.5;

// Output settings
/// File name written in File mode unless another naming is chosen
pub const DEFAULT_FILE_NAME: &str = "avatar.png";
/// Directory written to in File mode unless another is configured
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Prefix for file names derived from the input digest
pub const DIGEST_NAME_PREFIX: &str = "avatar-";
/// Number of hex characters of the digest used in derived file names
pub const DIGEST_NAME_HEX_LEN: usize = 16;
/// Extension appended to every written file
pub const OUTPUT_EXTENSION: &str = "png";

// Progress display settings
/// Smallest batch that gets a progress bar
pub const MIN_VALUES_FOR_PROGRESS: usize = 2;
