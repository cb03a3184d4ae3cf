//! Routing of encoded images to disk or back to the caller

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::derivation::DerivedIdentity;
use crate::io::configuration::{DEFAULT_FILE_NAME, DIGEST_NAME_PREFIX, OUTPUT_EXTENSION};
use crate::io::error::{IdenticonError, Result, invalid_configuration};

/// Where a finished image goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Write a PNG file into the output directory
    #[default]
    File,
    /// Return the encoded PNG bytes without touching the filesystem
    Buffer,
}

impl FromStr for OutputMode {
    type Err = IdenticonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "buffer" => Ok(Self::Buffer),
            _ => Err(invalid_configuration(
                "output_mode",
                &s,
                &"expected 'file' or 'buffer'",
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Buffer => f.write_str("buffer"),
        }
    }
}

/// How the output file is named in File mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileName {
    /// Fixed `avatar.png`; concurrent writers sharing a directory overwrite each other
    #[default]
    Default,
    /// `avatar-<digest prefix>.png`, unique per input value
    Digest,
    /// Caller-chosen bare file name
    Custom(String),
}

impl FileName {
    /// Validate a caller-supplied name
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains directory components
    pub fn custom(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let is_bare = Path::new(&name).file_name().and_then(|n| n.to_str()) == Some(name.as_str());
        if name.trim().is_empty() || !is_bare {
            return Err(invalid_configuration(
                "file_name",
                &name,
                &"must be a bare file name without directory components",
            ));
        }
        Ok(Self::Custom(name))
    }

    /// Resolve to a concrete file name for the given identity
    pub fn resolve(&self, identity: &DerivedIdentity) -> String {
        match self {
            Self::Default => DEFAULT_FILE_NAME.to_string(),
            Self::Digest => format!(
                "{DIGEST_NAME_PREFIX}{}.{OUTPUT_EXTENSION}",
                identity.fingerprint()
            ),
            Self::Custom(name) => {
                let has_extension = Path::new(name)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));
                if has_extension {
                    name.clone()
                } else {
                    format!("{name}.{OUTPUT_EXTENSION}")
                }
            }
        }
    }
}

/// Outcome of one generation: a written file or the encoded bytes, never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// Path of the PNG written in File mode
    File(PathBuf),
    /// Encoded PNG returned in Buffer mode
    Buffer(Vec<u8>),
}

impl GenerationResult {
    /// Written file path, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Buffer(_) => None,
        }
    }

    /// Encoded bytes, if any
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::File(_) => None,
            Self::Buffer(bytes) => Some(bytes),
        }
    }

    /// Take ownership of the encoded bytes, if any
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::File(_) => None,
            Self::Buffer(bytes) => Some(bytes),
        }
    }
}

/// Hand encoded bytes to their destination
///
/// In File mode the directory (including parents) is created when absent and
/// the file is overwritten if it already exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written
pub fn route(
    bytes: Vec<u8>,
    mode: OutputMode,
    output_dir: &Path,
    file_name: &str,
) -> Result<GenerationResult> {
    match mode {
        OutputMode::Buffer => {
            debug!(len = bytes.len(), "returning encoded buffer");
            Ok(GenerationResult::Buffer(bytes))
        }
        OutputMode::File => {
            std::fs::create_dir_all(output_dir).map_err(|e| IdenticonError::FileSystem {
                path: output_dir.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;

            let path = output_dir.join(file_name);
            std::fs::write(&path, &bytes).map_err(|e| IdenticonError::FileSystem {
                path: path.clone(),
                operation: "write file",
                source: e,
            })?;

            info!(path = %path.display(), len = bytes.len(), "identicon written");
            Ok(GenerationResult::File(path))
        }
    }
}
