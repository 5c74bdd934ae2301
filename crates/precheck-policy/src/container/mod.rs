//! Checks that inspect container images.

mod has_unique_tag;

pub use has_unique_tag::HasUniqueTagCheck;

/// Certification workflow documentation, referenced by container check
/// metadata.
pub(crate) const CERT_DOCUMENTATION_URL: &str =
    "https://access.redhat.com/documentation/en-us/red_hat_software_certification/8.51/html-single/red_hat_software_certification_workflow_guide/index#assembly-certifying-containers_openshift-sw-cert-workflow-working-with-containers";
