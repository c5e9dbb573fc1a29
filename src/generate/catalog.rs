use std::fmt;

use serde::{Deserialize, Serialize};

/// Voice used by the content provider when writing slide copy.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Tone {
    /// "Profissional"
    Professional,
    /// "Amigável"
    Friendly,
    /// "Inspirador"
    Inspirational,
    /// "Bem-humorado"
    Humorous,
    /// "Educacional"
    Educational,
    /// "Sarcástico"
    Sarcastic,
    /// "Empático"
    Empathetic,
    /// "Urgente"
    Urgent,
    /// "Poético"
    Poetic,
    /// "Misterioso"
    Mysterious,
}

impl Tone {
    /// The user-facing Portuguese label, which is also what providers are
    /// prompted with.
    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Profissional",
            Self::Friendly => "Amigável",
            Self::Inspirational => "Inspirador",
            Self::Humorous => "Bem-humorado",
            Self::Educational => "Educacional",
            Self::Sarcastic => "Sarcástico",
            Self::Empathetic => "Empático",
            Self::Urgent => "Urgente",
            Self::Poetic => "Poético",
            Self::Mysterious => "Misterioso",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tones offered by default.
pub const TONES: &[Tone] = &[
    Tone::Professional,
    Tone::Friendly,
    Tone::Inspirational,
    Tone::Humorous,
    Tone::Educational,
];

/// A named color direction handed to image providers as prompt keywords.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ColorPalette {
    /// Display name.
    pub name: &'static str,
    /// Comma-separated prompt keywords.
    pub keywords: &'static str,
}

/// Built-in palettes.
pub const COLOR_PALETTES: &[ColorPalette] = &[
    ColorPalette {
        name: "Cyber Glow",
        keywords: "neon, futuristic, dark, vibrant, synthwave",
    },
    ColorPalette {
        name: "Nature Bliss",
        keywords: "earthy, natural, calming, green, brown",
    },
    ColorPalette {
        name: "Oceanic",
        keywords: "ocean, blue, deep sea, calm, water",
    },
    ColorPalette {
        name: "Sunset",
        keywords: "warm, sunset, orange, red, vibrant",
    },
    ColorPalette {
        name: "Minimalist",
        keywords: "minimalist, clean, modern, black and white",
    },
];

/// A named rendering style handed to image providers as prompt keywords.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VisualStyle {
    /// Display name.
    pub name: &'static str,
    /// Comma-separated prompt keywords.
    pub keywords: &'static str,
}

/// Built-in visual styles.
pub const VISUAL_STYLES: &[VisualStyle] = &[
    VisualStyle {
        name: "Fotografia",
        keywords: "fotorealista, fotografia profissional, foco nítido, 8k",
    },
    VisualStyle {
        name: "Ilustração",
        keywords: "ilustração digital, arte vetorial, cores vibrantes, linhas limpas",
    },
    VisualStyle {
        name: "Fantasia",
        keywords: "arte de fantasia, épico, detalhado, iluminação cinematográfica, matte painting",
    },
    VisualStyle {
        name: "Vintage",
        keywords: "foto vintage, retrô, estilo anos 70, grão de filme, cores suaves, tom sépia",
    },
    VisualStyle {
        name: "Minimalista",
        keywords: "minimalista, fundo limpo, simples, elegante, iluminação de estúdio",
    },
    VisualStyle {
        name: "Cyberpunk",
        keywords: "cyberpunk, luzes de neon, cidade futurista, distópico, alta tecnologia, vibrante",
    },
    VisualStyle {
        name: "Aquarela",
        keywords: "pintura em aquarela, lavagem suave, cores vibrantes, artístico, pintado à mão",
    },
    VisualStyle {
        name: "3D Render",
        keywords: "renderização 3D, CGI, cinemático, renderização octane, hiper-realista, arte digital",
    },
];

#[cfg(test)]
#[path = "../../tests/unit/generate/catalog.rs"]
mod tests;
