use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{CarrosselError, CarrosselResult},
    generate::catalog::{ColorPalette, Tone, VisualStyle},
    slide::model::Slide,
};

/// Smallest carousel a provider may return.
pub const MIN_SLIDES: usize = 3;

/// Largest carousel a provider may return.
pub const MAX_SLIDES: usize = 7;

/// One slide's worth of finished generated content.
///
/// `image_url` is whatever the provider produced, typically a base64 data
/// URL; the compositor resolves it through the asset loader unchanged.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideContent {
    /// Slide headline.
    pub title: String,
    /// Slide body copy.
    pub body: String,
    /// Background image location.
    pub image_url: String,
}

/// One planned slide from the text-generation step, before any image exists.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePlan {
    /// Slide headline.
    pub title: String,
    /// Slide body copy.
    pub body: String,
    /// Prompt the image provider should render for this slide.
    pub image_prompt: String,
}

#[derive(Deserialize)]
struct CarouselResponse {
    slides: Vec<SlidePlan>,
}

/// Seam for whatever service produces carousel content.
///
/// The engine never talks to a network itself; callers plug a provider in
/// and feed the resulting [`SlideContent`] back through [`Slide::from_content`].
pub trait ContentGenerator {
    /// Produce a full carousel (3 to 7 slides) about `theme`.
    fn generate_carousel_content(
        &self,
        theme: &str,
        tone: Tone,
        palette: &ColorPalette,
        style: &VisualStyle,
    ) -> CarrosselResult<Vec<SlideContent>>;

    /// Produce a replacement image URL for an existing slide's content.
    fn regenerate_slide_image(
        &self,
        content: &SlideContent,
        palette: &ColorPalette,
        style: &VisualStyle,
    ) -> CarrosselResult<String>;
}

/// Parse and validate a provider's `{"slides": [...]}` payload.
///
/// Enforces the carousel size contract and rejects plans with an empty
/// image prompt, since those would produce an unusable blank background.
pub fn parse_carousel_response(json: &str) -> CarrosselResult<Vec<SlidePlan>> {
    let response: CarouselResponse = serde_json::from_str(json.trim())
        .map_err(|e| CarrosselError::generation(format!("malformed carousel payload: {e}")))?;
    let slides = response.slides;

    if slides.len() < MIN_SLIDES || slides.len() > MAX_SLIDES {
        return Err(CarrosselError::generation(format!(
            "carousel must have {MIN_SLIDES} to {MAX_SLIDES} slides, got {}",
            slides.len()
        )));
    }
    for plan in &slides {
        if plan.image_prompt.trim().is_empty() {
            return Err(CarrosselError::generation(format!(
                "empty image prompt for slide \"{}\"",
                plan.title
            )));
        }
    }
    Ok(slides)
}

impl Slide {
    /// Default-styled slide carrying generated content.
    pub fn from_content(content: SlideContent) -> Self {
        Self {
            title: content.title,
            body: content.body,
            image_url: content.image_url,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/provider.rs"]
mod tests;
