use thiserror::Error;

/// Errors returned by the goal and todo stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to parse response: {0}")]
    Parsing(String),
}

/// Errors returned by a text generation provider.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("text generation request failed: {0}")]
    Request(String),
    #[error("text generation returned no text")]
    EmptyResponse,
    #[error("text generation is disabled")]
    Disabled,
}

/// Errors surfaced by [`FocusWorkspace`](crate::FocusWorkspace) operations.
///
/// The user only ever sees the generic notice pushed alongside the error;
/// the error itself is for callers and logs.
#[derive(Debug, Error)]
pub enum FocusError {
    #[error("not signed in")]
    NotSignedIn,
    #[error("invalid input: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl FocusError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
