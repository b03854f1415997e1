/// Convenience result type used across callout.
pub type CalloutResult<T> = Result<T, CalloutError>;

/// Top-level error taxonomy used by bubble APIs.
#[derive(thiserror::Error, Debug)]
pub enum CalloutError {
    /// Invalid user-provided configuration or appearance data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures reported by a text measurement or shaping service.
    #[error("measurement error: {0}")]
    Measurement(String),

    /// Errors while painting into a surface.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalloutError {
    /// Build a [`CalloutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CalloutError::Measurement`] value.
    pub fn measurement(msg: impl Into<String>) -> Self {
        Self::Measurement(msg.into())
    }

    /// Build a [`CalloutError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`CalloutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
