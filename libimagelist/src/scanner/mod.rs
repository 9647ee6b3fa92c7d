//! High-level API for the image-list library.
//!
//! This module ties the loader, extractor and policy together. It's the
//! recommended entry point for most users.
//!
//! # Examples
//!
//! ```no_run
//! use libimagelist::{ImageScanner, Report};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scanner = ImageScanner::builder().validation(true).build();
//!     let outcome = scanner.scan(&["charts", "examples"])?;
//!
//!     let report = Report::new(outcome.images, scanner.is_validating());
//!     for image in &report.valid {
//!         println!("{}", image);
//!     }
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::extract::{Extractor, ImageSets};
use crate::loader::{ScanStats, scan_directory};
use crate::policy::Policy;
use std::path::Path;


/// Result of scanning one or more roots.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub images: ImageSets,
    pub stats: ScanStats,
}

/// Scans directory trees for image references.
///
/// # Examples
///
/// ```no_run
/// use libimagelist::ImageScanner;
///
/// let outcome = ImageScanner::builder().build().scan(&["."]).unwrap();
/// println!("found {} images", outcome.images.len());
/// ```
#[derive(Debug, Clone)]
pub struct ImageScanner {
    extractor: Extractor,
    seed_images: Vec<String>,
}

impl ImageScanner {
    /// Create a builder with default settings: no validation, the default
    /// policy and no seed images.
    pub fn builder() -> ImageScannerBuilder {
        ImageScannerBuilder::new()
    }

    pub fn is_validating(&self) -> bool {
        self.extractor.is_validating()
    }

    /// Scans every root in order.
    ///
    /// The valid set starts out with the seed images. The first directory walk
    /// error aborts the scan; unreadable or undecodable files are skipped.
    pub fn scan<P: AsRef<Path>>(&self, roots: &[P]) -> Result<ScanOutcome> {
        let mut outcome = ScanOutcome {
            images: ImageSets::with_seed(self.seed_images.iter().cloned()),
            stats: ScanStats::default(),
        };

        for root in roots {
            let root = root.as_ref();
            tracing::info!("Scanning directory {}", root.display());
            let stats = scan_directory(root, &self.extractor, &mut outcome.images)?;
            outcome.stats.merge(stats);
        }

        tracing::info!(
            "Scanned {} files ({} documents, {} failed), found {} images",
            outcome.stats.files_scanned,
            outcome.stats.documents,
            outcome.stats.files_failed,
            outcome.images.len()
        );

        Ok(outcome)
    }
}

/// Builder for configuring an [`ImageScanner`].
#[derive(Debug, Clone, Default)]
pub struct ImageScannerBuilder {
    validation: bool,
    policy: Policy,
    seed_images: Vec<String>,
}

impl ImageScannerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the policy and seed images from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.policy = Policy::from(&config.registries);
        self.seed_images = config.seed_images.clone();
        self
    }

    /// Enable classification into valid and invalid sets.
    pub fn validation(mut self, enabled: bool) -> Self {
        self.validation = enabled;
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Images always reported as valid.
    pub fn seed_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_images = images.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> ImageScanner {
        let extractor = if self.validation {
            Extractor::validate(self.policy)
        } else {
            Extractor::collect()
        };

        ImageScanner {
            extractor,
            seed_images: self.seed_images,
        }
    }
}
