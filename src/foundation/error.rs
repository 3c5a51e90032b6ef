/// Convenience result type used across the crate.
pub type RevealResult<T> = Result<T, RevealError>;

/// Error taxonomy for API misuse.
///
/// Runtime degradations (a detached handle, a late progress sample, a timer that fires after
/// teardown) are never reported through this type; they are absorbed and logged.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed handle path strings.
    #[error("registry error: {0}")]
    Registry(String),

    /// Stage lifecycle violations, such as dispatching an entrance twice.
    #[error("stage error: {0}")]
    Stage(String),

    /// Inconsistent reveal configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`RevealError::Stage`] value.
    pub fn stage(msg: impl Into<String>) -> Self {
        Self::Stage(msg.into())
    }

    /// Build a [`RevealError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
