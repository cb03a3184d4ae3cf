//! PNG serialization of finished identicons

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::io::error::{IdenticonError, Result};

/// Encode `image` as a standalone PNG byte stream
///
/// # Errors
///
/// Returns an error if the PNG encoder rejects the image
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| IdenticonError::Encoding { source })?;
    Ok(bytes)
}
