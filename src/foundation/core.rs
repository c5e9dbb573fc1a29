/// Edge length in logical units of the square export surface.
///
/// Every composite targets this fixed size regardless of the source image
/// aspect ratio; it matches common square social-post dimensions and is a
/// hard external contract.
pub const SURFACE_SIZE: u32 = 1080;

/// Scale-factor base unit for deriving pixel font sizes (2.5% of the surface).
pub fn base_font_unit() -> f32 {
    SURFACE_SIZE as f32 * 0.025
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A fully rendered surface readback in straight-alpha RGBA8.
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, straight (non-premultiplied) alpha.
    pub data: Vec<u8>,
}

impl FrameRgba {
    /// Pixel RGBA at `(x, y)`; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(idx..idx + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Horizontal anchoring of slide text blocks.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Anchor to the left padding inset.
    Left,
    /// Anchor to the surface midpoint.
    #[default]
    Center,
    /// Anchor to the right padding inset.
    Right,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
