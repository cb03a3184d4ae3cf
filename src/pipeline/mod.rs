//! End-to-end identicon generation

/// Single-call generation pipeline
pub mod generator;

pub use generator::{generate, generate_base_pattern};
