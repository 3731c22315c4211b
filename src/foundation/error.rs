/// Result alias used across the crate.
pub type VmlResult<T> = Result<T, VmlError>;

/// Errors surfaced by the structural (non-render) API.
///
/// The render and tick paths never produce these: malformed props, missing tokens and missing
/// presentation roots all degrade to defaults instead.
#[derive(thiserror::Error, Debug)]
pub enum VmlError {
    /// Invalid input such as a bad tag name, scene file or scheme name.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid document tree operation.
    #[error("dom error: {0}")]
    Dom(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VmlError {
    /// Build a [`VmlError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`VmlError::Dom`].
    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    /// Build a [`VmlError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for VmlError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}
