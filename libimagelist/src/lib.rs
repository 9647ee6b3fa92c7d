//! image-list - Container image reference discovery
//!
//! `libimagelist` walks directory trees, decodes every YAML and JSON
//! document it finds, and collects the values of `image` keys at any depth.
//! References can optionally be classified against registry allow and
//! ignore lists.
//!
//! # Quick Start
//!
//! ```no_run
//! use libimagelist::{ImageScanner, Report};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scanner = ImageScanner::builder().validation(true).build();
//!     let outcome = scanner.scan(&["."])?;
//!
//!     let report = Report::new(outcome.images, true);
//!     for image in report.invalid.unwrap_or_default() {
//!         println!("{}", image);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`ImageScanner`] - Main entry point for scanning directories
//! - [`ImageScannerBuilder`] - Builder for validation, policy and seed images
//! - [`Policy`] - Registry allow/ignore lists
//! - [`Report`] - Sorted scan results
//! - [`Config`] - Configuration loaded from YAML
//! - [`Document`] - Canonical decoded document tree

#![warn(clippy::all)]

/// Returns the libimagelist crate version.
///
/// # Examples
///
/// ```
/// let version = libimagelist::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

mod scanner;
pub use scanner::{ImageScanner, ImageScannerBuilder, ScanOutcome};

pub use config::Config;
pub use document::Document;
pub use error::{ImageListError, Result};
pub use extract::{Extractor, ImageSets};
pub use loader::{FileFormat, ScanStats};
pub use policy::{Classification, Policy, Violation};
pub use reference::ImageRef;
pub use report::Report;

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod loader;
pub mod policy;
pub mod reference;
pub mod report;
