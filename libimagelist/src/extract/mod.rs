//! Recursive extraction of `image` values from document trees.

use crate::document::Document;
use crate::policy::{Classification, Policy};
use std::collections::BTreeSet;


/// The mapping key whose string values are image references.
pub const IMAGE_KEY: &str = "image";

/// Accumulated image references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSets {
    /// Valid references, or every reference when validation is off.
    pub valid: BTreeSet<String>,
    pub invalid: BTreeSet<String>,
}

impl ImageSets {
    /// Creates result sets with `seed` already in the valid set.
    pub fn with_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: seed.into_iter().map(Into::into).collect(),
            invalid: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }

    /// Number of distinct references across both sets.
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }
}

/// How found references are sorted into [`ImageSets`].
#[derive(Debug, Clone)]
pub enum Mode {
    /// Every reference goes into the valid set.
    Collect,
    /// References are classified with the policy.
    Validate(Policy),
}

/// Walks document trees and records image references.
#[derive(Debug, Clone)]
pub struct Extractor {
    mode: Mode,
}

impl Extractor {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Extractor that records every reference as valid.
    pub fn collect() -> Self {
        Self::new(Mode::Collect)
    }

    /// Extractor that classifies references with `policy`.
    pub fn validate(policy: Policy) -> Self {
        Self::new(Mode::Validate(policy))
    }

    pub fn is_validating(&self) -> bool {
        matches!(self.mode, Mode::Validate(_))
    }

    /// Visits every node of `document`, recording each string value of an
    /// `image` key at any depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::document::Document;
    /// use libimagelist::extract::{Extractor, ImageSets};
    ///
    /// let value: serde_json::Value =
    ///     serde_json::from_str(r#"{"spec": {"image": "quay.io/app:v1"}}"#).unwrap();
    /// let mut images = ImageSets::default();
    /// Extractor::collect().visit(&Document::from(value), &mut images);
    /// assert!(images.valid.contains("quay.io/app:v1"));
    /// ```
    pub fn visit(&self, document: &Document, images: &mut ImageSets) {
        match document {
            Document::Mapping(entries) => {
                for (key, value) in entries {
                    if key.as_str() == Some(IMAGE_KEY) {
                        match value.as_str() {
                            Some(image) => self.record(image, images),
                            None => tracing::debug!("Skipping non-string image value: {:?}", value),
                        }
                    }
                    self.visit(value, images);
                }
            }
            Document::Sequence(items) => {
                for item in items {
                    self.visit(item, images);
                }
            }
            _ => {}
        }
    }

    /// Records a single reference according to the extractor's mode.
    pub fn record(&self, image: &str, images: &mut ImageSets) {
        let policy = match &self.mode {
            Mode::Collect => {
                images.valid.insert(image.to_string());
                return;
            }
            Mode::Validate(policy) => policy,
        };

        match policy.classify(image) {
            Classification::Valid => {
                images.valid.insert(image.to_string());
            }
            Classification::Invalid(violation) => {
                tracing::debug!("Invalid image {}: {}", image, violation);
                images.invalid.insert(image.to_string());
            }
            Classification::Ignored => {
                tracing::debug!("Ignoring image {}", image);
            }
        }
    }
}
