/// Convenience result type used across subpress.
pub type SubpressResult<T> = Result<T, SubpressError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum SubpressError {
    /// Missing keys, type mismatches, or malformed configuration text.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid enumerated values such as alignment modes or color channels.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while producing or compositing layers.
    #[error("paint error: {0}")]
    Paint(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SubpressError {
    /// Build a [`SubpressError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SubpressError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SubpressError::Paint`] value.
    pub fn paint(msg: impl Into<String>) -> Self {
        Self::Paint(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
