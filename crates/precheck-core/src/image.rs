//! Image reference handed to checks by the owning framework.

use serde::{Deserialize, Serialize};

/// Identifies the container image a check runs against.
///
/// Registry and repository are required and assumed non-empty; the framework
/// that constructs references is responsible for validating user input before
/// handing them to checks. Tag and digest ride along for checks that need
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Registry host (e.g., "registry.example.com").
    pub registry: String,

    /// Repository path within the registry (e.g., "org/app").
    pub repository: String,

    /// Tag the caller pulled, if known.
    #[serde(default)]
    pub tag: Option<String>,

    /// Manifest digest, if known (sha256:...).
    #[serde(default)]
    pub digest: Option<String>,
}

impl ImageReference {
    pub fn new(registry: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            registry: registry.into(),
            repository: repository.into(),
            tag: None,
            digest: None,
        }
    }

    /// Set the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the digest.
    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest = Some(digest.into());
        self
    }

    /// The "registry/repository" coordinate tags are listed under.
    ///
    /// Performs no validation; empty components produce a degenerate
    /// coordinate.
    pub fn coordinate(&self) -> String {
        format!("{}/{}", self.registry, self.repository)
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coordinate())
    }
}
