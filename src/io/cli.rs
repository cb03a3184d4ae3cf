//! Command-line interface for generating identicons from one or more values

use crate::io::configuration::{DEFAULT_DIMENSION, DEFAULT_OUTPUT_DIR, DEFAULT_PATTERN_SIZE};
use crate::io::error::{Result, invalid_configuration};
use crate::io::output::{FileName, GenerationResult, OutputMode};
use crate::io::progress::ProgressManager;
use crate::io::request::GenerationRequest;
use crate::pattern::Algorithm;
use crate::pipeline::generate;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(
    author,
    version,
    about = "Generate symmetric pixel-art avatars from arbitrary strings"
)]
/// Command-line arguments for the identicon generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Values to derive identicons from, such as usernames
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Side length of the base pattern in cells (odd)
    #[arg(short, long, default_value_t = DEFAULT_PATTERN_SIZE)]
    pub pattern_size: u32,

    /// Fill algorithm: 1/descend-mirror or 2/ascend-mirror
    #[arg(short, long, default_value_t = Algorithm::DescendMirror)]
    pub algorithm: Algorithm,

    /// Output width and height in pixels
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: u32,

    /// Use a black background instead of white
    #[arg(long)]
    pub dark: bool,

    /// Directory for generated files (created if absent)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Custom output file name (single value only)
    #[arg(short = 'n', long, conflicts_with = "hashed_name")]
    pub file_name: Option<String>,

    /// Name files after the digest of each value instead of avatar.png
    #[arg(long)]
    pub hashed_name: bool,

    /// Write the PNG to standard output instead of a file
    #[arg(long, conflicts_with_all = ["file_name", "hashed_name"])]
    pub stdout: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log derivation details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output mode implied by the flags
    pub const fn output_mode(&self) -> OutputMode {
        if self.stdout {
            OutputMode::Buffer
        } else {
            OutputMode::File
        }
    }

    /// File naming implied by the flags
    ///
    /// Several values sharing one directory always get digest names so they
    /// cannot overwrite each other.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom name is invalid or combined with several values
    pub fn file_naming(&self) -> Result<FileName> {
        match &self.file_name {
            Some(name) if self.values.len() > 1 => Err(invalid_configuration(
                "file_name",
                name,
                &"a custom file name can only be used with a single value",
            )),
            Some(name) => FileName::custom(name.clone()),
            None if self.hashed_name || self.values.len() > 1 => Ok(FileName::Digest),
            None => Ok(FileName::Default),
        }
    }

    /// Build the request for one value
    ///
    /// # Errors
    ///
    /// Returns an error if any setting fails validation
    pub fn request_for(&self, value: &str) -> Result<GenerationRequest> {
        GenerationRequest::builder(value)
            .pattern_size(self.pattern_size)
            .algorithm(self.algorithm)
            .dark_mode(self.dark)
            .dimension(self.dimension)
            .output_mode(self.output_mode())
            .output_dir(self.output_dir.clone())
            .file_name(self.file_naming()?)
            .build()
    }
}

/// Generates every value from the command line, one synchronous call at a time
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl BatchProcessor {
    /// Create a new batch processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::new(cli.values.len(), cli.should_show_progress());
        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate all values according to CLI arguments
    ///
    /// Every request is validated before the first image is generated, so a
    /// bad setting never leaves a partial batch on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, generation, or writing fails
    pub fn process(&self) -> Result<Vec<GenerationResult>> {
        if self.cli.stdout && self.cli.values.len() > 1 {
            return Err(invalid_configuration(
                "stdout",
                &self.cli.values.len(),
                &"standard output accepts a single value",
            ));
        }

        let requests = self
            .cli
            .values
            .iter()
            .map(|value| self.cli.request_for(value))
            .collect::<Result<Vec<_>>>()?;

        let mut results = Vec::with_capacity(requests.len());
        for request in &requests {
            self.progress_manager.start_value(request.value());
            let result = generate(request)?;
            debug!(value = request.value(), "generated");
            results.push(result);
            self.progress_manager.complete_value();
        }

        debug!(
            completed = self.progress_manager.completed(),
            progress_shown = self.progress_manager.is_visible(),
            "batch finished"
        );
        self.progress_manager.finish();
        Ok(results)
    }
}
