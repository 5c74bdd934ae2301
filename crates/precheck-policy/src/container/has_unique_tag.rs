//! Unique-tag policy check.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use precheck_core::{Check, CheckResult, HelpText, ImageReference, Metadata, TagLister};

use super::CERT_DOCUMENTATION_URL;

/// Evaluates the image to ensure that it has a tag other than the `latest`
/// tag, which is considered to be a "floating" tag and may not accurately
/// represent the same image over time.
pub struct HasUniqueTagCheck {
    tag_lister: Arc<dyn TagLister>,
}

impl HasUniqueTagCheck {
    pub fn new(tag_lister: Arc<dyn TagLister>) -> Self {
        Self { tag_lister }
    }

    /// An image passes the check if:
    /// 1) it has more than one tag (`latest` is acceptable)
    /// OR
    /// 2) it has only one tag, and it is not `latest`
    fn has_unique_tag(tags: &[String]) -> bool {
        tags.len() > 1 || tags.len() == 1 && !tags[0].eq_ignore_ascii_case("latest")
    }
}

#[async_trait]
impl Check for HasUniqueTagCheck {
    async fn validate(&self, image: &ImageReference) -> CheckResult<bool> {
        let coordinate = image.coordinate();
        debug!(image = %coordinate, "listing registry tags");

        let tags = self.tag_lister.list_tags(&coordinate).await?;

        let passed = Self::has_unique_tag(&tags);
        debug!(image = %coordinate, tag_count = tags.len(), passed, "unique-tag verdict");
        Ok(passed)
    }

    fn name(&self) -> &'static str {
        "HasUniqueTag"
    }

    fn metadata(&self) -> Metadata {
        Metadata {
            description:
                "Checking if container has a tag other than 'latest', so that the image can be uniquely identified."
                    .to_string(),
            level: "best".to_string(),
            knowledge_base_url: CERT_DOCUMENTATION_URL.to_string(),
            check_url: CERT_DOCUMENTATION_URL.to_string(),
        }
    }

    fn help(&self) -> HelpText {
        HelpText {
            message: "Check HasUniqueTag encountered an error. Please review the precheck.log file for more information."
                .to_string(),
            suggestion: "Add a tag to your image. Consider using Semantic Versioning. https://semver.org/"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use precheck_core::{CheckError, TagListError};

    /// Stub lister returning a canned tag list.
    struct CannedTags(Vec<String>);

    #[async_trait]
    impl TagLister for CannedTags {
        async fn list_tags(&self, _image: &str) -> Result<Vec<String>, TagListError> {
            Ok(self.0.clone())
        }
    }

    /// Stub lister that always fails with a network error.
    struct FailingLister;

    #[async_trait]
    impl TagLister for FailingLister {
        async fn list_tags(&self, _image: &str) -> Result<Vec<String>, TagListError> {
            Err(TagListError::Network {
                message: "connection refused".into(),
            })
        }
    }

    fn check_with_tags(tags: &[&str]) -> HasUniqueTagCheck {
        let tags = tags.iter().map(|t| t.to_string()).collect();
        HasUniqueTagCheck::new(Arc::new(CannedTags(tags)))
    }

    fn image() -> ImageReference {
        ImageReference::new("registry.example.com", "org/app")
    }

    #[tokio::test]
    async fn passes_with_two_tags() {
        let check = check_with_tags(&["v1.0.0", "v1.0.1"]);
        assert!(check.validate(&image()).await.unwrap());
    }

    #[tokio::test]
    async fn passes_with_latest_alongside_another_tag() {
        let check = check_with_tags(&["latest", "v1.0.0"]);
        assert!(check.validate(&image()).await.unwrap());
    }

    #[tokio::test]
    async fn passes_with_a_single_non_latest_tag() {
        let check = check_with_tags(&["v1.0"]);
        assert!(check.validate(&image()).await.unwrap());
    }

    #[tokio::test]
    async fn fails_with_only_the_latest_tag() {
        let check = check_with_tags(&["latest"]);
        assert!(!check.validate(&image()).await.unwrap());
    }

    #[tokio::test]
    async fn latest_comparison_is_case_insensitive() {
        for tag in ["LATEST", "Latest", "LaTeSt"] {
            let check = check_with_tags(&[tag]);
            assert!(
                !check.validate(&image()).await.unwrap(),
                "single tag {tag:?} should fail"
            );
        }
    }

    #[tokio::test]
    async fn fails_with_no_tags() {
        let check = check_with_tags(&[]);
        assert!(!check.validate(&image()).await.unwrap());
    }

    #[tokio::test]
    async fn propagates_listing_errors_unchanged() {
        let check = HasUniqueTagCheck::new(Arc::new(FailingLister));

        let err = check.validate(&image()).await.unwrap_err();
        assert!(matches!(
            err,
            CheckError::TagList(TagListError::Network { .. })
        ));
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[tokio::test]
    async fn lists_tags_for_the_registry_repository_coordinate() {
        struct CaptureCoordinate;

        #[async_trait]
        impl TagLister for CaptureCoordinate {
            async fn list_tags(&self, image: &str) -> Result<Vec<String>, TagListError> {
                assert_eq!(image, "registry.example.com/org/app");
                Ok(vec!["v1.0.0".into()])
            }
        }

        let check = HasUniqueTagCheck::new(Arc::new(CaptureCoordinate));
        assert!(check.validate(&image()).await.unwrap());
    }

    #[test]
    fn name_is_the_stable_identifier() {
        let check = check_with_tags(&[]);
        assert_eq!(check.name(), "HasUniqueTag");
    }

    #[test]
    fn metadata_is_static() {
        let check = check_with_tags(&[]);
        let meta = check.metadata();
        assert_eq!(meta.level, "best");
        assert!(meta.description.contains("'latest'"));
        assert_eq!(meta.knowledge_base_url, meta.check_url);
    }

    #[test]
    fn help_suggests_semantic_versioning() {
        let check = check_with_tags(&[]);
        let help = check.help();
        assert!(help.message.contains("HasUniqueTag"));
        assert!(help.suggestion.contains("https://semver.org/"));
    }
}
