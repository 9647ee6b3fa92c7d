//! Sorted, de-duplicated scan results.

use crate::extract::ImageSets;
use serde::Serialize;

#[cfg(test)]
mod tests;

/// Final report of a scan.
///
/// Lists are sorted lexicographically and contain no duplicates. `invalid`
/// is only present when the scan ran in validation mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid: Option<Vec<String>>,
}

impl Report {
    /// Builds a report from accumulated result sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::extract::ImageSets;
    /// use libimagelist::report::Report;
    ///
    /// let images = ImageSets::with_seed(["quay.io/b:v1", "gcr.io/a:v1"]);
    /// let report = Report::new(images, false);
    /// assert_eq!(report.valid, vec!["gcr.io/a:v1", "quay.io/b:v1"]);
    /// assert!(report.invalid.is_none());
    /// ```
    pub fn new(images: ImageSets, validation: bool) -> Self {
        Self {
            valid: images.valid.into_iter().collect(),
            invalid: validation.then(|| images.invalid.into_iter().collect()),
        }
    }

    pub fn is_validation(&self) -> bool {
        self.invalid.is_some()
    }

    /// Total number of reported images.
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.as_ref().map_or(0, Vec::len)
    }
}
