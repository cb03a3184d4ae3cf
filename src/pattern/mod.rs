//! Symmetric base pattern generation

/// Fill strategies and background selection
pub mod fill;
/// Algorithm identifiers and strategy lookup
pub mod registry;

pub use registry::Algorithm;
