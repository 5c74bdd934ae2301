//! The check interface exposed to the owning framework.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CheckResult;
use crate::image::ImageReference;

/// A single certification policy check.
///
/// Checks are stateless predicates: `validate` issues at most one call to an
/// injected capability and then computes a verdict. `Ok(false)` is a policy
/// failure ("checked and failed"); `Err(..)` means the check could not run.
/// The remaining operations are pure accessors over static content, used by
/// the framework for registration and report generation.
#[async_trait]
pub trait Check: Send + Sync {
    /// Evaluate the image against this check's policy.
    async fn validate(&self, image: &ImageReference) -> CheckResult<bool>;

    /// Stable identifier used for registration and reporting.
    fn name(&self) -> &'static str;

    /// Descriptive metadata for report generation.
    fn metadata(&self) -> Metadata;

    /// Guidance shown when the check errors or fails.
    fn help(&self) -> HelpText;
}

/// Static descriptive record for a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// What the check verifies, in one sentence.
    pub description: String,

    /// Severity level (e.g., "best" for best-practice checks).
    pub level: String,

    /// Knowledge-base article covering the policy.
    pub knowledge_base_url: String,

    /// Documentation for this specific check.
    pub check_url: String,
}

/// Static failure guidance for a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpText {
    /// Shown when the check encounters an error.
    pub message: String,

    /// Remediation suggestion shown when the check fails.
    pub suggestion: String,
}
