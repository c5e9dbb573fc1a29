use std::sync::Arc;

use crate::foundation::error::{CarrosselError, CarrosselResult};

#[derive(Clone, Debug)]
/// Decoded raster image in straight-alpha RGBA8 form.
///
/// Straight alpha is kept so the brightness analyzer reads true channel
/// values; premultiplication happens when a background paint is built.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight-alpha RGBA8.
    pub rgba8: Arc<Vec<u8>>,
}

/// Decode encoded image bytes (PNG, JPEG, ...) into [`PreparedImage`].
pub fn decode_image(bytes: &[u8]) -> CarrosselResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CarrosselError::image_load(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreparedImage {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
