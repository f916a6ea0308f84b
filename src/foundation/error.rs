/// Convenience result type used across ffgraph.
pub type FfgraphResult<T> = Result<T, FfgraphError>;

/// Top-level error taxonomy used by builder and execution APIs.
#[derive(thiserror::Error, Debug)]
pub enum FfgraphError {
    /// A caller broke an input contract (empty key, malformed range).
    #[error("contract violation: {0}")]
    Contract(String),

    /// Invalid user-provided configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external tool could not be run or reported failure.
    #[error("execution error: {0}")]
    Execution(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FfgraphError {
    /// Build a [`FfgraphError::Contract`] value.
    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    /// Build a [`FfgraphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FfgraphError::Execution`] value.
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }

    /// Build a [`FfgraphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
