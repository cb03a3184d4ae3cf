//! Deterministic identicon generation
//!
//! An input string is hashed once; the digest seeds a per-call random
//! generator and supplies the fill color. A symmetric base pattern is drawn,
//! upscaled with nearest-neighbor sampling, and encoded as PNG, either
//! written to disk or returned as bytes. The same input always yields the
//! same image.

#![forbid(unsafe_code)]

/// Seed and color derivation from the input digest
pub mod derivation;
/// Configuration, output routing, errors, and CLI plumbing
pub mod io;
/// Pattern fill algorithms and their registry
pub mod pattern;
/// End-to-end generation entry point
pub mod pipeline;
/// Scaling and PNG encoding
pub mod render;

pub use io::error::{IdenticonError, Result};
pub use io::output::{FileName, GenerationResult, OutputMode};
pub use io::request::{GenerationRequest, GenerationRequestBuilder};
pub use pattern::Algorithm;
pub use pipeline::generate;
