//! Configuration, output routing, and command-line plumbing

/// Command-line parsing and batch generation
pub mod cli;
/// Defaults and validation limits
pub mod configuration;
/// Error taxonomy shared by the whole crate
pub mod error;
/// Tracing subscriber setup for the binary
pub mod logging;
/// Output modes, file naming, and the file/buffer sink
pub mod output;
/// Progress display for multi-value runs
pub mod progress;
/// Validated generation requests
pub mod request;
