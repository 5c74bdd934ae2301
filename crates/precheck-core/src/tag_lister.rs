//! Tag-listing capability consumed by checks.

use async_trait::async_trait;

use crate::error::TagListError;

/// Lists the registry tags of an image coordinate.
///
/// `image` is the "registry/repository" coordinate produced by
/// [`ImageReference::coordinate`](crate::ImageReference::coordinate). The
/// returned order is whatever the registry reports; consumers must not rely
/// on it. Timeouts and cancellation are the implementation's concern.
///
/// Checks take this as an injected `Arc<dyn TagLister>`, so tests can
/// substitute a stub returning canned tag lists or errors.
#[async_trait]
pub trait TagLister: Send + Sync {
    async fn list_tags(&self, image: &str) -> Result<Vec<String>, TagListError>;
}
