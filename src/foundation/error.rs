/// Convenience result type used across pixmap2d.
pub type PixmapResult<T> = Result<T, PixmapError>;

/// Top-level error taxonomy used by the engine APIs.
///
/// Out-of-bounds drawing is never an error; primitives clip silently. Errors are reserved for
/// invalid construction data, unknown format codes, codec failures and configuration parsing.
#[derive(thiserror::Error, Debug)]
pub enum PixmapError {
    /// Invalid user-provided dimensions or buffers.
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown or unsupported pixel format.
    #[error("format error: {0}")]
    Format(String),

    /// Failures reported by the image codec adapter.
    #[error("codec error: {0}")]
    Codec(String),

    /// Errors while reading draw-mode configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixmapError {
    /// Build a [`PixmapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixmapError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`PixmapError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Build a [`PixmapError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Human-readable failure reason including every wrapped context layer.
    pub fn failure_reason(&self) -> String {
        match self {
            Self::Other(e) => format!("{e:#}"),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
