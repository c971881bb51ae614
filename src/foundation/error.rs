/// Convenience result type used across the engine.
pub type FrameResult<T> = Result<T, FrameError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Missing decorative assets are never reported here: asset lookups return `Option` and
/// renderers omit the affected element.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    /// The photo set length does not match the template's declared photo count.
    #[error("invalid photo count: template expects {expected}, got {actual}")]
    InvalidPhotoCount {
        /// Photo count declared by the template.
        expected: usize,
        /// Length of the supplied photo set.
        actual: usize,
    },

    /// No template is registered for the requested theme and photo count.
    #[error("template not found: theme '{theme}' with {photo_count} photo(s)")]
    TemplateNotFound {
        /// Requested theme identifier.
        theme: String,
        /// Requested photo count.
        photo_count: usize,
    },

    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Encoded image, svg or font bytes that could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failure while encoding a composed frame.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameError {
    /// Build a [`FrameError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrameError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FrameError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`FrameError::TemplateNotFound`] value.
    pub fn template_not_found(theme: impl Into<String>, photo_count: usize) -> Self {
        Self::TemplateNotFound {
            theme: theme.into(),
            photo_count,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
