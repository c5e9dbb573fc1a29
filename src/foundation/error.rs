/// Convenience result type used across the crate.
pub type CarrosselResult<T> = Result<T, CarrosselError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CarrosselError {
    /// A background or analyzed image failed to load or decode.
    #[error("image load error: {0}")]
    ImageLoad(String),

    /// The rendering surface could not be acquired.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A required font failed to become available.
    ///
    /// Composite paths treat this as non-fatal degradation and log it; the
    /// variant exists for callers that probe font availability directly.
    #[error("font load error: {0}")]
    FontLoad(String),

    /// The external content/image provider returned an unusable response.
    #[error("generation error: {0}")]
    Generation(String),

    /// Invalid user-provided slide or export data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CarrosselError {
    /// Build a [`CarrosselError::ImageLoad`] value.
    pub fn image_load(msg: impl Into<String>) -> Self {
        Self::ImageLoad(msg.into())
    }

    /// Build a [`CarrosselError::SurfaceUnavailable`] value.
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`CarrosselError::FontLoad`] value.
    pub fn font_load(msg: impl Into<String>) -> Self {
        Self::FontLoad(msg.into())
    }

    /// Build a [`CarrosselError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`CarrosselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
