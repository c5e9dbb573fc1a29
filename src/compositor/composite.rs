use std::{collections::HashMap, io::Cursor, path::PathBuf, sync::Arc};

use crate::{
    analyze::brightness::measure_brightness,
    assets::decode::decode_image,
    assets::source::load_image_bytes,
    compositor::blur::{
        BACKGROUND_BLUR_RADIUS, BACKGROUND_BLUR_SIGMA, blur_rgba8_premul_q16, gaussian_kernel_q16,
    },
    compositor::surface::{clear_pixmap_to_transparent, premul_over_in_place, rgba_premul_to_image},
    foundation::core::{FrameRgba, SURFACE_SIZE, TextAlign},
    foundation::error::{CarrosselError, CarrosselResult},
    foundation::math::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    slide::model::Slide,
    text::fonts::{FontCatalog, FontSpec, TextEngine},
    text::wrap::wrap_lines,
};

/// Background image overfill margin on every side, in logical units.
const BLEED: f64 = 20.0;

/// Horizontal padding fraction reserving the central 80% as wrap boundary.
const PADDING_FRAC: f32 = 0.1;

/// Vertical gap between the title and body blocks (fraction of the surface).
const SPACING_FRAC: f32 = 0.05;

/// Maximum wrapped title lines.
const TITLE_MAX_LINES: usize = 2;

/// Maximum wrapped body lines.
const BODY_MAX_LINES: usize = 4;

const TITLE_LINE_ADVANCE: f32 = 1.1;
const BODY_LINE_ADVANCE: f32 = 1.3;
const AUTHOR_LINE_ADVANCE: f32 = 0.9;
const AUTHOR_PADDING_FRAC: f32 = 0.04;

// Stroke widths are 10 and 6 units on the 1080 reference surface.
const TEXT_STROKE_FRAC: f64 = 10.0 / 1080.0;
const AUTHOR_STROKE_FRAC: f64 = 6.0 / 1080.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// How the contrast overlay between background and text is chosen.
pub enum OverlayPolicy {
    /// Black overlay at a fixed alpha regardless of background content.
    Fixed(f32),
    /// Alpha derived from the measured background brightness: brighter
    /// backgrounds get a stronger overlay to keep white text legible.
    Adaptive,
}

impl Default for OverlayPolicy {
    fn default() -> Self {
        Self::Fixed(0.5)
    }
}

impl OverlayPolicy {
    fn alpha_for(self, background: &crate::assets::decode::PreparedImage) -> f32 {
        match self {
            Self::Fixed(a) => a.clamp(0.0, 1.0),
            Self::Adaptive => {
                let b = measure_brightness(background);
                (0.35 + 0.3 * (b / 255.0)).clamp(0.35, 0.65)
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Compositor configuration.
pub struct CompositorOpts {
    /// Directory probed for `<Family>.ttf`/`.otf` files.
    pub fonts_dir: Option<PathBuf>,
    /// Root for resolving relative `image_url` paths.
    pub assets_root: Option<PathBuf>,
    /// Contrast overlay policy (defaults to the fixed 50% black overlay).
    pub overlay: OverlayPolicy,
}

impl CompositorOpts {
    fn build_catalog(&self) -> Arc<FontCatalog> {
        match &self.fonts_dir {
            Some(dir) => Arc::new(FontCatalog::with_fonts_dir(dir)),
            None => Arc::new(FontCatalog::new()),
        }
    }
}

/// Rasterizes one [`Slide`] at a time onto the fixed 1080x1080 surface.
///
/// Each compositor owns its text contexts and render context, so multiple
/// instances may run fully in parallel with no locking; the only shared
/// resource is the [`FontCatalog`], which is safe to race.
pub struct Compositor {
    opts: CompositorOpts,
    text: TextEngine,
    ctx: Option<vello_cpu::RenderContext>,
    // (blob id, face index) -> vello font, bridged from parley run fonts
    vello_fonts: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl Compositor {
    /// Compositor with its own catalog built from `opts`.
    pub fn new(opts: CompositorOpts) -> Self {
        let catalog = opts.build_catalog();
        Self::with_catalog(opts, catalog)
    }

    /// Compositor sharing an existing catalog (the bulk-export path hands
    /// one catalog to every worker).
    pub fn with_catalog(opts: CompositorOpts, catalog: Arc<FontCatalog>) -> Self {
        Self {
            opts,
            text: TextEngine::new(catalog),
            ctx: None,
            vello_fonts: HashMap::new(),
        }
    }

    /// Render `slide` and encode the surface as PNG bytes.
    #[tracing::instrument(skip_all, fields(title = %slide.title))]
    pub fn composite(&mut self, slide: &Slide) -> CarrosselResult<Vec<u8>> {
        let frame = self.composite_frame(slide)?;
        encode_png(&frame)
    }

    /// Render `slide` to the raw straight-alpha RGBA surface.
    ///
    /// Deterministic for identical slide fields and font availability.
    pub fn composite_frame(&mut self, slide: &Slide) -> CarrosselResult<FrameRgba> {
        // Load gate: every distinct font spec of this render must be
        // available before any measurement happens.
        let title_spec = FontSpec::title_of(slide);
        let body_spec = FontSpec::body_of(slide);
        self.text.ensure_loaded(&title_spec);
        self.text.ensure_loaded(&body_spec);
        let author_specs = slide
            .has_author()
            .then(|| (FontSpec::author_name(), FontSpec::author_handle()));
        if let Some((name_spec, handle_spec)) = &author_specs {
            self.text.ensure_loaded(name_spec);
            self.text.ensure_loaded(handle_spec);
        }

        // Background: decode, draw stretched past the edges, blur, darken.
        let bytes = load_image_bytes(&slide.image_url, self.opts.assets_root.as_deref())?;
        let background = decode_image(&bytes)?;
        let overlay_alpha = self.opts.overlay.alpha_for(&background);

        let mut base = self.draw_background(&background)?;
        blur_in_place(&mut base, SURFACE_SIZE)?;

        // Overlay + text render into their own surface, then composite over
        // the blurred background.
        let fg = self.draw_foreground(slide, &title_spec, &body_spec, author_specs.as_ref(), overlay_alpha)?;
        premul_over_in_place(&mut base, fg.data_as_u8_slice())?;

        unpremultiply_rgba8_in_place(&mut base);
        Ok(FrameRgba {
            width: SURFACE_SIZE,
            height: SURFACE_SIZE,
            data: base,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> CarrosselResult<R>,
    ) -> CarrosselResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Rasterize the background image stretched to overfill the surface by
    /// [`BLEED`] units per side; returns premultiplied RGBA8 bytes.
    fn draw_background(
        &mut self,
        background: &crate::assets::decode::PreparedImage,
    ) -> CarrosselResult<Vec<u8>> {
        let (w, h) = surface_extent()?;
        let mut premul = background.rgba8.to_vec();
        premultiply_rgba8_in_place(&mut premul);
        let paint = rgba_premul_to_image(&premul, background.width, background.height)?;

        let size = f64::from(SURFACE_SIZE);
        let sx = (size + 2.0 * BLEED) / f64::from(background.width.max(1));
        let sy = (size + 2.0 * BLEED) / f64::from(background.height.max(1));
        let transform = vello_cpu::kurbo::Affine::translate((-BLEED, -BLEED))
            * vello_cpu::kurbo::Affine::scale_non_uniform(sx, sy);

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        self.with_ctx_mut(w, h, |_, ctx| {
            ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_transform(transform);
            ctx.set_paint(paint);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(background.width),
                f64::from(background.height),
            ));
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;
        Ok(pixmap.data_as_u8_slice().to_vec())
    }

    /// Rasterize the contrast overlay, title/body blocks and author block.
    fn draw_foreground(
        &mut self,
        slide: &Slide,
        title_spec: &FontSpec,
        body_spec: &FontSpec,
        author_specs: Option<&(FontSpec, FontSpec)>,
        overlay_alpha: f32,
    ) -> CarrosselResult<vello_cpu::Pixmap> {
        let (w, h) = surface_extent()?;
        let size = SURFACE_SIZE as f32;
        let padding = size * PADDING_FRAC;
        let max_width = size - padding * 2.0;

        let title_lines = {
            let text = &mut self.text;
            wrap_lines(&slide.title, max_width, Some(TITLE_MAX_LINES), |s| {
                text.measure(s, title_spec)
            })
        };
        let body_lines = {
            let text = &mut self.text;
            wrap_lines(&slide.body, max_width, Some(BODY_MAX_LINES), |s| {
                text.measure(s, body_spec)
            })
        };
        let body_has_content = body_lines.iter().any(|l| !l.is_empty());

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        clear_pixmap_to_transparent(&mut pixmap);
        self.with_ctx_mut(w, h, |this, ctx| {
            ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

            // Contrast overlay across the full surface.
            let alpha8 = (overlay_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, alpha8));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(SURFACE_SIZE),
                f64::from(SURFACE_SIZE),
            ));

            let stroke = f64::from(SURFACE_SIZE) * TEXT_STROKE_FRAC;
            let mut y = size * PADDING_FRAC;
            for line in &title_lines {
                this.draw_outlined_line(ctx, line, title_spec, slide.text_align, y, stroke)?;
                y += title_spec.size_px * TITLE_LINE_ADVANCE;
            }

            if body_has_content {
                y += size * SPACING_FRAC;
                for line in &body_lines {
                    this.draw_outlined_line(ctx, line, body_spec, slide.text_align, y, stroke)?;
                    y += body_spec.size_px * BODY_LINE_ADVANCE;
                }
            }

            if let Some((name_spec, handle_spec)) = author_specs {
                this.draw_author_block(ctx, slide, name_spec, handle_spec)?;
            }

            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;
        Ok(pixmap)
    }

    /// Draw one line twice at identical coordinates: black round-join stroke
    /// first, then white fill.
    fn draw_outlined_line(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        line: &str,
        spec: &FontSpec,
        align: TextAlign,
        y_top: f32,
        stroke_width: f64,
    ) -> CarrosselResult<()> {
        if line.is_empty() {
            return Ok(());
        }
        let layout = self.text.layout_line(line, spec);
        let size = SURFACE_SIZE as f32;
        let padding = size * PADDING_FRAC;
        let x = match align {
            TextAlign::Left => padding,
            TextAlign::Center => (size - layout.width()) / 2.0,
            TextAlign::Right => size - padding - layout.width(),
        };
        self.draw_layout(ctx, &layout, x, y_top, stroke_width)
    }

    /// Bottom-left anchored author block: handle on the bottom line, name
    /// stacked above it, independent of slide typography.
    fn draw_author_block(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        slide: &Slide,
        name_spec: &FontSpec,
        handle_spec: &FontSpec,
    ) -> CarrosselResult<()> {
        let size = SURFACE_SIZE as f32;
        let padding = size * AUTHOR_PADDING_FRAC;
        let stroke = f64::from(SURFACE_SIZE) * AUTHOR_STROKE_FRAC;
        let mut bottom = size - padding;

        if let Some(handle) = slide.author_handle.as_deref().filter(|s| !s.trim().is_empty()) {
            let layout = self.text.layout_line(handle, handle_spec);
            let y_top = bottom - layout.height();
            self.draw_layout(ctx, &layout, padding, y_top, stroke)?;
            bottom -= name_spec.size_px * AUTHOR_LINE_ADVANCE;
        }

        if let Some(name) = slide.author_name.as_deref().filter(|s| !s.trim().is_empty()) {
            let layout = self.text.layout_line(name, name_spec);
            let y_top = bottom - layout.height();
            self.draw_layout(ctx, &layout, padding, y_top, stroke)?;
        }

        Ok(())
    }

    fn draw_layout(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        layout: &parley::Layout<crate::text::fonts::TextBrushRgba8>,
        x: f32,
        y_top: f32,
        stroke_width: f64,
    ) -> CarrosselResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(x),
            f64::from(y_top),
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let font = self.font_for_run(run.run());
                let font_size = run.run().font_size();
                let glyphs: Vec<vello_cpu::Glyph> = run
                    .glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                    .collect();

                let mut stroke = vello_cpu::kurbo::Stroke::new(stroke_width);
                stroke.join = vello_cpu::kurbo::Join::Round;
                ctx.set_stroke(stroke);
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
                ctx.glyph_run(&font)
                    .font_size(font_size)
                    .stroke_glyphs(glyphs.iter().copied());

                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
                ctx.glyph_run(&font)
                    .font_size(font_size)
                    .fill_glyphs(glyphs.into_iter());
            }
        }
        Ok(())
    }

    /// Bridge a parley run font into a (cached) vello font handle.
    fn font_for_run(
        &mut self,
        run: &parley::layout::Run<'_, crate::text::fonts::TextBrushRgba8>,
    ) -> vello_cpu::peniko::FontData {
        let font = run.font();
        let key = (font.data.id(), font.index);
        self.vello_fonts
            .entry(key)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(font.data.as_ref().to_vec()),
                    font.index,
                )
            })
            .clone()
    }
}

fn surface_extent() -> CarrosselResult<(u16, u16)> {
    let side: u16 = SURFACE_SIZE
        .try_into()
        .map_err(|_| CarrosselError::surface_unavailable("surface exceeds pixmap coordinate space"))?;
    Ok((side, side))
}

fn blur_in_place(premul: &mut Vec<u8>, size: u32) -> CarrosselResult<()> {
    let kernel = gaussian_kernel_q16(BACKGROUND_BLUR_RADIUS, BACKGROUND_BLUR_SIGMA)?;
    let mut tmp = vec![0u8; premul.len()];
    let mut out = vec![0u8; premul.len()];
    blur_rgba8_premul_q16(premul, &mut out, &mut tmp, size, size, &kernel);
    *premul = out;
    Ok(())
}

fn encode_png(frame: &FrameRgba) -> CarrosselResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.data.clone())
        .ok_or_else(|| CarrosselError::surface_unavailable("frame buffer size mismatch"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .map_err(|e| CarrosselError::Other(anyhow::anyhow!("encode png: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compositor/composite.rs"]
mod tests;
