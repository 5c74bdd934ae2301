//! Error types for policy checks.

/// Tag retrieval errors, owned by the tag-listing capability.
///
/// These cover the ways a registry can fail to produce a tag list. A check
/// never maps or retries them; they surface to the caller verbatim, and the
/// caller decides retry/report policy via [`TagListError::is_retryable`].
#[derive(Debug, thiserror::Error)]
pub enum TagListError {
    /// The repository does not exist or exposes no tag list.
    #[error("repository not found: {image}")]
    NotFound { image: String },

    /// Authentication failed or the credentials lack pull access.
    #[error("unauthorized for {image}: {message}")]
    Unauthorized { image: String, message: String },

    /// Transport-level failure reaching the registry.
    #[error("network error: {message}")]
    Network { message: String },

    /// The registry answered with something the lister could not parse.
    #[error("invalid response from registry: {message}")]
    InvalidResponse { message: String },
}

impl TagListError {
    /// Whether the caller may reasonably retry the listing.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

/// Errors surfaced by [`Check::validate`](crate::Check::validate).
///
/// Policy failures are not errors; a check that ran to completion returns
/// `Ok(false)`. The only error today is the capability failing to produce a
/// tag list, passed through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The tag-listing capability could not produce a tag list.
    #[error(transparent)]
    TagList(#[from] TagListError),
}

/// Result type for check operations.
pub type CheckResult<T> = Result<T, CheckError>;
