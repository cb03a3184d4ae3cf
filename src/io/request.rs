//! Validated generation requests and their builder
//!
//! A [`GenerationRequest`] can only be obtained through
//! [`GenerationRequestBuilder::build`], so every request reaching the
//! generator already satisfies the size and naming constraints. Building a
//! request never touches the filesystem.

use std::path::{Path, PathBuf};

use crate::io::configuration::{
    DEFAULT_DIMENSION, DEFAULT_OUTPUT_DIR, DEFAULT_PATTERN_SIZE, MAX_DIMENSION, MAX_PATTERN_SIZE,
};
use crate::io::error::{Result, invalid_configuration};
use crate::io::output::{FileName, OutputMode};
use crate::pattern::Algorithm;

/// Everything needed to produce one identicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    value: String,
    pattern_size: u32,
    algorithm: Algorithm,
    dark_mode: bool,
    dimension: u32,
    output_mode: OutputMode,
    output_dir: PathBuf,
    file_name: FileName,
}

impl GenerationRequest {
    /// Start a request for `value` with default settings
    pub fn builder(value: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(value)
    }

    /// Input string the identicon is derived from
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Side length of the base pattern in cells
    pub const fn pattern_size(&self) -> u32 {
        self.pattern_size
    }

    /// Fill algorithm
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Whether the background is black instead of white
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Side length of the output image in pixels
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Destination of the encoded image
    pub const fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Directory written to in File mode
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File naming used in File mode
    pub const fn file_name(&self) -> &FileName {
        &self.file_name
    }
}

/// Option-style builder for [`GenerationRequest`]
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    value: String,
    pattern_size: u32,
    algorithm: Algorithm,
    dark_mode: bool,
    dimension: u32,
    output_mode: OutputMode,
    output_dir: PathBuf,
    file_name: FileName,
}

impl GenerationRequestBuilder {
    /// Defaults: 5x5 pattern, descend-mirror, light background, 100px, File mode in the working directory
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            pattern_size: DEFAULT_PATTERN_SIZE,
            algorithm: Algorithm::default(),
            dark_mode: false,
            dimension: DEFAULT_DIMENSION,
            output_mode: OutputMode::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: FileName::default(),
        }
    }

    /// Set the base pattern side length (odd)
    #[must_use]
    pub const fn pattern_size(mut self, pattern_size: u32) -> Self {
        self.pattern_size = pattern_size;
        self
    }

    /// Set the fill algorithm
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Use a black background instead of white
    #[must_use]
    pub const fn dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Set the output side length in pixels
    #[must_use]
    pub const fn dimension(mut self, dimension: u32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Choose between writing a file and returning bytes
    #[must_use]
    pub const fn output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    /// Directory for File mode; created during generation if absent
    #[must_use]
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// File naming for File mode
    #[must_use]
    pub fn file_name(mut self, file_name: FileName) -> Self {
        self.file_name = file_name;
        self
    }

    /// Validate the settings and produce a request
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The value is empty
    /// - The pattern size is zero, even, or above the maximum
    /// - The dimension is zero or above the maximum
    /// - File mode is selected with an empty output directory
    pub fn build(self) -> Result<GenerationRequest> {
        if self.value.is_empty() {
            return Err(invalid_configuration(
                "value",
                &self.value,
                &"input value must not be empty",
            ));
        }

        if self.pattern_size == 0 || self.pattern_size % 2 == 0 {
            return Err(invalid_configuration(
                "pattern_size",
                &self.pattern_size,
                &"pattern size must be a positive odd number",
            ));
        }
        if self.pattern_size > MAX_PATTERN_SIZE {
            return Err(invalid_configuration(
                "pattern_size",
                &self.pattern_size,
                &format!("pattern size must not exceed {MAX_PATTERN_SIZE}"),
            ));
        }

        if self.dimension == 0 {
            return Err(invalid_configuration(
                "dimension",
                &self.dimension,
                &"output dimension must be positive",
            ));
        }
        if self.dimension > MAX_DIMENSION {
            return Err(invalid_configuration(
                "dimension",
                &self.dimension,
                &format!("output dimension must not exceed {MAX_DIMENSION}"),
            ));
        }

        if self.output_mode == OutputMode::File && self.output_dir.as_os_str().is_empty() {
            return Err(invalid_configuration(
                "output_dir",
                &"",
                &"File mode requires an output directory",
            ));
        }

        Ok(GenerationRequest {
            value: self.value,
            pattern_size: self.pattern_size,
            algorithm: self.algorithm,
            dark_mode: self.dark_mode,
            dimension: self.dimension,
            output_mode: self.output_mode,
            output_dir: self.output_dir,
            file_name: self.file_name,
        })
    }
}
