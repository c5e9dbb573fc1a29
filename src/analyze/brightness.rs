use std::path::Path;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    assets::source::load_image_bytes,
    foundation::error::CarrosselResult,
};

/// Mean perceptual brightness of a decoded image, in `0.0..=255.0`.
///
/// Uses the HSP-style weighted quadratic per pixel,
/// `sqrt(0.299 R² + 0.587 G² + 0.114 B²)`, averaged over every pixel.
/// Side-effect free; alpha is ignored.
pub fn measure_brightness(img: &PreparedImage) -> f32 {
    let pixel_count = (img.width as usize) * (img.height as usize);
    if pixel_count == 0 {
        return 0.0;
    }

    let mut sum = 0.0f64;
    for px in img.rgba8.chunks_exact(4) {
        let r = f64::from(px[0]);
        let g = f64::from(px[1]);
        let b = f64::from(px[2]);
        sum += (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt();
    }

    (sum / pixel_count as f64) as f32
}

/// Load, decode and measure the image behind `url`.
///
/// Fails with [`crate::CarrosselError::ImageLoad`] when the reference cannot
/// be fetched or decoded.
pub fn measure_brightness_url(url: &str, root: Option<&Path>) -> CarrosselResult<f32> {
    let bytes = load_image_bytes(url, root)?;
    let img = decode_image(&bytes)?;
    Ok(measure_brightness(&img))
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/brightness.rs"]
mod tests;
