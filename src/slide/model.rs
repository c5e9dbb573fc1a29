use crate::foundation::core::TextAlign;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One content+style unit of a carousel, rendered independently to a bitmap.
///
/// A slide is self-describing: compositing never consults state outside of
/// it beyond resolving font identifiers to loadable font resources. The
/// editing caller mutates fields directly; the engine only ever reads.
pub struct Slide {
    /// Slide title, generated or user-edited.
    pub title: String,
    /// Slide body text.
    pub body: String,
    /// Background image reference: data URL or local path. Regenerating the
    /// image replaces this field wholesale.
    pub image_url: String,

    /// Logical title font identifier; `None` uses the Anton default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_family: Option<String>,
    /// Logical body font identifier; `None` uses the Poppins default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font_family: Option<String>,
    /// Bold title text.
    #[serde(default)]
    pub is_title_bold: bool,
    /// Italic title text.
    #[serde(default)]
    pub is_title_italic: bool,
    /// Bold body text.
    #[serde(default)]
    pub is_body_bold: bool,
    /// Italic body text.
    #[serde(default)]
    pub is_body_italic: bool,
    /// Title size as a scale factor over the base font unit (default 3.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<f32>,
    /// Body size as a scale factor over the base font unit (default 1.5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<f32>,
    /// Horizontal anchoring of the title/body blocks.
    #[serde(default)]
    pub text_align: TextAlign,

    /// Author display name; rendering the author block requires this or
    /// `author_handle`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Author social handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_handle: Option<String>,

    /// Transient UI flag set while a replacement image is being generated.
    /// Tolerated on the wire and ignored by the compositor.
    #[serde(default)]
    pub is_image_loading: bool,
}

impl Slide {
    /// True when either author field is present and non-empty.
    pub fn has_author(&self) -> bool {
        let filled = |o: &Option<String>| o.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.author_name) || filled(&self.author_handle)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/slide/model.rs"]
mod tests;
