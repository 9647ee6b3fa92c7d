//! Registry classification policy.
//!
//! A [`Policy`] decides whether a discovered image reference is valid,
//! invalid, or ignored. It is built once from configuration and passed
//! into the extractor by value.

use crate::config::Registries;
use crate::reference::ImageRef;
use std::collections::HashSet;
use std::fmt;


/// Result of classifying one image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Valid,
    Invalid(Violation),
    /// Neither valid nor invalid; left out of both result sets.
    Ignored,
}

/// Reason an image reference was classified invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The reference uses the floating `latest` tag.
    LatestTag,
    /// The registry prefix is not in the valid set.
    UnknownRegistry(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LatestTag => write!(f, "uses the \"latest\" tag"),
            Violation::UnknownRegistry(prefix) => write!(f, "unknown registry \"{}\"", prefix),
        }
    }
}

/// Allow/ignore lists of registry prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    valid_prefixes: HashSet<String>,
    ignore_prefixes: HashSet<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self::from(&Registries::default())
    }
}

impl From<&Registries> for Policy {
    fn from(registries: &Registries) -> Self {
        Self::new(registries.valid.iter().cloned(), registries.ignored.iter().cloned())
    }
}

impl Policy {
    /// Creates a policy from explicit prefix lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::policy::{Classification, Policy};
    ///
    /// let policy = Policy::new(["ghcr.io".to_string()], Vec::<String>::new());
    /// assert_eq!(policy.classify("ghcr.io/org/app:v1"), Classification::Valid);
    /// ```
    pub fn new<V, I>(valid_prefixes: V, ignore_prefixes: I) -> Self
    where
        V: IntoIterator<Item = String>,
        I: IntoIterator<Item = String>,
    {
        Self {
            valid_prefixes: valid_prefixes.into_iter().collect(),
            ignore_prefixes: ignore_prefixes.into_iter().collect(),
        }
    }

    /// Classifies an image reference.
    ///
    /// The `latest` check runs before any prefix lookup, so a floating tag is
    /// invalid even on an ignored registry.
    pub fn classify(&self, image: &str) -> Classification {
        let image = ImageRef::new(image);
        if image.is_latest() {
            return Classification::Invalid(Violation::LatestTag);
        }

        let prefix = image.registry_prefix();
        if self.ignore_prefixes.contains(prefix) {
            Classification::Ignored
        } else if self.valid_prefixes.contains(prefix) {
            Classification::Valid
        } else {
            Classification::Invalid(Violation::UnknownRegistry(prefix.to_string()))
        }
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> bool {
        self.valid_prefixes.contains(prefix)
    }

    pub fn is_ignored_prefix(&self, prefix: &str) -> bool {
        self.ignore_prefixes.contains(prefix)
    }
}
