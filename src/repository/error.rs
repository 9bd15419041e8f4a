use thiserror::Error;

/// Errors reported by repository collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepoError {
    /// Transport-level failure (no connectivity, timeout, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The remote answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("{what} not found")]
    NotFound { what: String },

    /// Local persistence failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RepoError {
    /// Whether the failure is a remote hiccup worth papering over with local data.
    pub fn is_transient(&self) -> bool {
        match self {
            RepoError::Network(_) => true,
            RepoError::Http { status, .. } => *status >= 500 || *status == 429,
            RepoError::NotFound { .. } | RepoError::Storage(_) => false,
        }
    }
}
