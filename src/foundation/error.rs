/// Convenience result type used across scorereel.
pub type ScoreReelResult<T> = Result<T, ScoreReelError>;

/// Top-level error taxonomy used by library APIs.
///
/// Steady-state frame evaluation never returns these. They surface while building a scheduler
/// (bad configuration), while loading a dataset strictly, or from the preview surface.
#[derive(thiserror::Error, Debug)]
pub enum ScoreReelError {
    /// Invalid timeline configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Player dataset failed schema validation.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Invalid caller-provided argument (frame ranges, thread counts, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScoreReelError {
    /// Build a [`ScoreReelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScoreReelError::Dataset`] value.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Build a [`ScoreReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScoreReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
