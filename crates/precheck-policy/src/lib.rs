//! Certification policy checks.
//!
//! Each check implements [`precheck_core::Check`] and is grouped by the kind
//! of artifact it inspects. Container checks live under [`container`].

pub mod container;

pub use container::HasUniqueTagCheck;
