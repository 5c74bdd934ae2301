//! Shared certification types for precheck policy checks.
//!
//! This crate defines the two seams every policy check is built around:
//!
//! - [`Check`] — the interface a check exposes to the owning framework
//!   (evaluate an image, report its name, metadata, and help text)
//! - [`TagLister`] — the capability a check consumes to enumerate the
//!   registry tags of an image coordinate
//!
//! Checks produce a verdict, not an error, when an image fails policy:
//! `Ok(false)` means "checked and failed", `Err(..)` means "could not check".
//! The only error source is the injected capability; see [`TagListError`].
//!
//! # Quick Start
//!
//! ```no_run
//! use precheck_core::{Check, ImageReference};
//!
//! # async fn example(check: &dyn Check) -> precheck_core::CheckResult<()> {
//! let image = ImageReference::new("registry.example.com", "org/app");
//! let passed = check.validate(&image).await?;
//! println!("{}: {}", check.name(), passed);
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod error;
pub mod image;
pub mod tag_lister;

// Re-export main types
pub use check::{Check, HelpText, Metadata};
pub use error::{CheckError, CheckResult, TagListError};
pub use image::ImageReference;
pub use tag_lister::TagLister;
