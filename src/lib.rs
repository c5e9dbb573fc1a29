//! Carrossel is a slide-to-raster compositing engine for social-media
//! carousels.
//!
//! It turns a self-describing [`Slide`] into a finished 1080x1080 PNG: the
//! background image is stretched past the surface edges, Gaussian-blurred
//! and darkened for contrast, then the title, body and author blocks are
//! wrapped, measured and drawn as outlined text on top.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `image_url` (data URL or local path) -> decoded RGBA8
//! 2. **Prepare**: stretch-draw with bleed, separable Gaussian blur,
//!    contrast overlay
//! 3. **Type**: greedy wrap against the 80% content width, cap and
//!    ellipsize, lay out each line with Parley
//! 4. **Draw**: black round-join stroke pass then white fill pass per line
//! 5. **Export**: PNG encode; bulk export bundles `slide-<n>.png` entries
//!    into one zip archive
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: identical slide fields and font
//!   availability produce identical pixels.
//! - **No network IO**: remote content arrives as data URLs; the
//!   [`ContentGenerator`] seam keeps providers outside the engine.
//! - **Premultiplied RGBA8** internally; exported frames are straight-alpha.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod analyze;
mod assets;
mod compositor;
mod export;
mod foundation;
mod generate;
mod slide;
mod text;

pub use analyze::brightness::{measure_brightness, measure_brightness_url};
pub use assets::decode::{PreparedImage, decode_image};
pub use assets::source::load_image_bytes;
pub use compositor::blur::{
    BACKGROUND_BLUR_RADIUS, BACKGROUND_BLUR_SIGMA, blur_rgba8_premul_q16, gaussian_kernel_q16,
};
pub use compositor::composite::{Compositor, CompositorOpts, OverlayPolicy};
pub use export::packager::{
    CAROUSEL_ARCHIVE_NAME, ExportFile, ExportThreading, archive_entry_name, export_carousel,
    export_single, single_export_name,
};
pub use foundation::core::{FrameRgba, SURFACE_SIZE, TextAlign, base_font_unit};
pub use foundation::error::{CarrosselError, CarrosselResult};
pub use generate::catalog::{COLOR_PALETTES, ColorPalette, TONES, Tone, VISUAL_STYLES, VisualStyle};
pub use generate::provider::{
    ContentGenerator, MAX_SLIDES, MIN_SLIDES, SlideContent, SlidePlan, parse_carousel_response,
};
pub use slide::model::Slide;
pub use text::fonts::{
    AUTHOR_FONT_FAMILY, DEFAULT_BODY_FAMILY, DEFAULT_BODY_SCALE, DEFAULT_FONT_FAMILY,
    DEFAULT_TITLE_FAMILY, DEFAULT_TITLE_SCALE, FONT_FAMILIES, FontCatalog, FontSpec,
    TextBrushRgba8, TextEngine, resolve_family,
};
pub use text::wrap::{ELLIPSIS, wrap_lines};
