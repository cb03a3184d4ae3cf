//! Closed set of pattern fill algorithms and their identifiers

use std::fmt;
use std::str::FromStr;

use image::{Rgba, RgbaImage};
use rand::RngCore;

use crate::io::error::{IdenticonError, invalid_configuration};
use crate::pattern::fill::{ascend_mirror, descend_mirror};

/// Signature shared by every fill strategy
pub type FillFn = fn(&mut RgbaImage, Rgba<u8>, bool, &mut dyn RngCore);

/// Pattern fill algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Random top half mirrored vertically (identifier 1)
    #[default]
    DescendMirror,
    /// Random left half mirrored horizontally, rows visited bottom-up (identifier 2)
    AscendMirror,
}

impl Algorithm {
    /// Every registered algorithm in identifier order
    pub const ALL: [Self; 2] = [Self::DescendMirror, Self::AscendMirror];

    /// Numeric identifier accepted on the command line
    pub const fn id(self) -> u8 {
        match self {
            Self::DescendMirror => 1,
            Self::AscendMirror => 2,
        }
    }

    /// Human-readable name accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::DescendMirror => "descend-mirror",
            Self::AscendMirror => "ascend-mirror",
        }
    }

    /// Fill function implementing this algorithm
    pub const fn select(self) -> FillFn {
        match self {
            Self::DescendMirror => descend_mirror,
            Self::AscendMirror => ascend_mirror,
        }
    }

    /// Fill `image` in place using this algorithm
    pub fn fill(
        self,
        image: &mut RgbaImage,
        color: Rgba<u8>,
        dark_mode: bool,
        rng: &mut dyn RngCore,
    ) {
        (self.select())(image, color, dark_mode, rng);
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = IdenticonError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.id() == id)
            .ok_or_else(|| {
                invalid_configuration("algorithm", &id, &"unknown algorithm identifier")
            })
    }
}

impl FromStr for Algorithm {
    type Err = IdenticonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::try_from(id);
        }
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| invalid_configuration("algorithm", &s, &"unknown algorithm name"))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
