use std::sync::Arc;

use crate::foundation::error::{CarrosselError, CarrosselResult};

/// Build a vello pixmap from premultiplied RGBA8 bytes.
pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CarrosselResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CarrosselError::surface_unavailable("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CarrosselError::surface_unavailable("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CarrosselError::surface_unavailable("pixmap byte len mismatch"));
    }

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

/// Wrap premultiplied RGBA8 bytes as an image paint.
pub(crate) fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> CarrosselResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// `dst = src OVER dst` for equal-length premultiplied RGBA8 buffers.
pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> CarrosselResult<()> {
    if dst.len() != src.len() {
        return Err(CarrosselError::surface_unavailable(
            "compose buffer size mismatch",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        if sa == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - sa;
        for c in 0..4 {
            let out = u16::from(s[c]) + crate::foundation::math::mul_div255_u16(u16::from(d[c]), inv);
            d[c] = out.min(255) as u8;
        }
    }
    Ok(())
}

pub(crate) fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/surface.rs"]
mod tests;
