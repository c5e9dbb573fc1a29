use std::{
    borrow::Cow,
    collections::HashMap,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use crate::{
    foundation::core::{SURFACE_SIZE, base_font_unit},
    slide::model::Slide,
};

/// Registry of logical font identifiers selectable per slide text block.
///
/// Maps a user-facing identifier to the concrete family string requested from
/// the font collection. Unknown identifiers resolve to the default family
/// instead of failing.
pub const FONT_FAMILIES: &[(&str, &str)] = &[
    ("Poppins", "Poppins"),
    ("Anton", "Anton"),
    ("Montserrat", "Montserrat"),
    ("Oswald", "Oswald"),
    ("Roboto Slab", "Roboto Slab"),
    ("Lobster", "Lobster"),
];

/// Fallback family for unknown identifiers (also the body/author default).
pub const DEFAULT_FONT_FAMILY: &str = "Poppins";

/// Default title family when a slide does not configure one.
pub const DEFAULT_TITLE_FAMILY: &str = "Anton";

/// Default body family when a slide does not configure one.
pub const DEFAULT_BODY_FAMILY: &str = "Poppins";

/// Fixed family used by the author block, independent of slide typography.
pub const AUTHOR_FONT_FAMILY: &str = "Poppins";

/// Default title font scale factor (multiplied by the base font unit).
pub const DEFAULT_TITLE_SCALE: f32 = 3.5;

/// Default body font scale factor.
pub const DEFAULT_BODY_SCALE: f32 = 1.5;

/// Resolve a logical font identifier to its concrete family string.
pub fn resolve_family(identifier: &str) -> &'static str {
    FONT_FAMILIES
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(identifier))
        .map(|(_, family)| *family)
        .unwrap_or(DEFAULT_FONT_FAMILY)
}

#[derive(Clone, Debug, PartialEq)]
/// Concrete font request for one text block: resolved family, weight,
/// style and pixel size.
pub struct FontSpec {
    /// Concrete family string (already passed through [`resolve_family`]).
    pub family: String,
    /// CSS-style weight (400 regular, 600 semibold, 700 bold).
    pub weight: u16,
    /// Italic flag.
    pub italic: bool,
    /// Pixel size on the render surface.
    pub size_px: f32,
}

impl FontSpec {
    /// Title font spec for `slide`, applying defaults for absent attributes.
    pub fn title_of(slide: &Slide) -> Self {
        Self {
            family: resolve_family(
                slide.title_font_family.as_deref().unwrap_or(DEFAULT_TITLE_FAMILY),
            )
            .to_string(),
            weight: if slide.is_title_bold { 700 } else { 400 },
            italic: slide.is_title_italic,
            size_px: base_font_unit() * slide.title_font_size.unwrap_or(DEFAULT_TITLE_SCALE),
        }
    }

    /// Body font spec for `slide`.
    pub fn body_of(slide: &Slide) -> Self {
        Self {
            family: resolve_family(
                slide.body_font_family.as_deref().unwrap_or(DEFAULT_BODY_FAMILY),
            )
            .to_string(),
            weight: if slide.is_body_bold { 700 } else { 400 },
            italic: slide.is_body_italic,
            size_px: base_font_unit() * slide.body_font_size.unwrap_or(DEFAULT_BODY_SCALE),
        }
    }

    /// Fixed semibold spec for the author name line (2.2% of the surface).
    pub fn author_name() -> Self {
        Self {
            family: AUTHOR_FONT_FAMILY.to_string(),
            weight: 600,
            italic: false,
            size_px: SURFACE_SIZE as f32 * 0.022,
        }
    }

    /// Fixed regular spec for the author handle line (2% of the surface).
    pub fn author_handle() -> Self {
        Self {
            family: AUTHOR_FONT_FAMILY.to_string(),
            weight: 400,
            italic: false,
            size_px: SURFACE_SIZE as f32 * 0.02,
        }
    }
}

#[derive(Debug, Default)]
/// Shared, thread-safe store of font bytes keyed by family.
///
/// An optional fonts directory is probed for `<Family>.ttf`/`.otf` files
/// (spaces stripped or dashed); reads are memoized, so concurrent composites
/// racing on the same family perform the IO once and the repeat requests
/// return immediately.
pub struct FontCatalog {
    fonts_dir: Option<PathBuf>,
    cache: Mutex<HashMap<String, Option<Arc<Vec<u8>>>>>,
}

impl FontCatalog {
    /// Catalog without a fonts directory; families resolve against system
    /// fonts only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that probes `dir` for font files before system fallback.
    pub fn with_fonts_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: Some(dir.into()),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch (memoized) font bytes for `family`, if the catalog has them.
    pub fn font_bytes(&self, family: &str) -> Option<Arc<Vec<u8>>> {
        let mut cache = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(entry) = cache.get(family) {
            return entry.clone();
        }
        let loaded = self.read_family_file(family);
        cache.insert(family.to_string(), loaded.clone());
        loaded
    }

    fn read_family_file(&self, family: &str) -> Option<Arc<Vec<u8>>> {
        let dir = self.fonts_dir.as_ref()?;
        let compact: String = family.split_whitespace().collect();
        let dashed = family.to_lowercase().replace(' ', "-");
        for stem in [family, compact.as_str(), dashed.as_str()] {
            for ext in ["ttf", "otf"] {
                let path = dir.join(format!("{stem}.{ext}"));
                if let Ok(bytes) = std::fs::read(&path) {
                    tracing::debug!(family, path = %path.display(), "loaded font file");
                    return Some(Arc::new(bytes));
                }
            }
        }
        None
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    /// Opaque white, the fill color for slide text.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
}

/// Per-worker text engine: Parley contexts plus the font load gate.
///
/// [`TextEngine::ensure_loaded`] must complete for every distinct
/// [`FontSpec`] of a render before any measurement or drawing, otherwise
/// Parley silently falls back to default metrics and corrupts wrap widths.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    catalog: Arc<FontCatalog>,
    // family -> family name actually registered (None = degraded fallback)
    loaded: HashMap<String, Option<String>>,
}

impl TextEngine {
    /// Engine backed by `catalog`, with fresh Parley contexts.
    pub fn new(catalog: Arc<FontCatalog>) -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            catalog,
            loaded: HashMap::new(),
        }
    }

    /// Block until the spec's family is available to this engine.
    ///
    /// Catalog bytes are registered into the Parley collection on first use;
    /// a family the catalog cannot provide degrades to the system/default
    /// fallback stack with a warning rather than failing the composite.
    /// Idempotent per family.
    pub fn ensure_loaded(&mut self, spec: &FontSpec) {
        if self.loaded.contains_key(&spec.family) {
            return;
        }

        let registered = match self.catalog.font_bytes(&spec.family) {
            Some(bytes) => {
                let families = self
                    .font_ctx
                    .collection
                    .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
                families
                    .first()
                    .and_then(|(id, _)| self.font_ctx.collection.family_name(*id))
                    .map(str::to_string)
            }
            None => None,
        };

        if registered.is_none() {
            tracing::warn!(
                family = %spec.family,
                "font not in catalog; measurement and drawing fall back to system fonts"
            );
        }
        self.loaded.insert(spec.family.clone(), registered);
    }

    /// Shape a single pre-wrapped line into a Parley layout.
    pub fn layout_line(&mut self, text: &str, spec: &FontSpec) -> parley::Layout<TextBrushRgba8> {
        let stack = match self.loaded.get(&spec.family).and_then(|n| n.clone()) {
            Some(registered) => format!("{registered}, {DEFAULT_FONT_FAMILY}, sans-serif"),
            None => format!("{}, sans-serif", spec.family),
        };

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(stack)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(spec.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(spec.weight)),
        ));
        if spec.italic {
            builder.push_default(parley::style::StyleProperty::FontStyle(
                parley::style::FontStyle::Italic,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::WHITE));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Measured pixel width of `text` in the spec's font.
    pub fn measure(&mut self, text: &str, spec: &FontSpec) -> f32 {
        self.layout_line(text, spec).width()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
