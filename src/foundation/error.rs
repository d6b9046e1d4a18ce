/// Convenience result type used across Beatpath.
pub type BeatpathResult<T> = Result<T, BeatpathError>;

/// Top-level error taxonomy used by crate APIs.
///
/// The sampling/animation core itself never fails: numeric edge cases degrade
/// to defined fallbacks. Errors exist only at the data boundaries — parsing
/// vector assets, validating configuration, serializing models.
#[derive(thiserror::Error, Debug)]
pub enum BeatpathError {
    /// Invalid user-provided data (config fields, shape keys, path strings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while extracting usable geometry from a vector asset.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BeatpathError {
    /// Build a [`BeatpathError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BeatpathError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`BeatpathError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
