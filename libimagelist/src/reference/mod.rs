//! Image reference views.
//!
//! References are not parsed into full OCI components. Classification only
//! needs the first `/` segment (registry prefix) and the last `:` segment
//! (tag).

use std::fmt;


/// Borrowed view over an image reference such as `quay.io/cilium/cilium:v1.15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a>(&'a str);

impl<'a> ImageRef<'a> {
    pub fn new(image: &'a str) -> Self {
        ImageRef(image)
    }

    /// Returns the first `/`-delimited segment, or the whole string if it
    /// has no slash.
    pub fn registry_prefix(&self) -> &'a str {
        self.0.split_once('/').map_or(self.0, |(head, _)| head)
    }

    /// Returns the last `:`-delimited segment, or the whole string if it
    /// has no colon.
    pub fn tag_segment(&self) -> &'a str {
        self.0.rsplit_once(':').map_or(self.0, |(_, tail)| tail)
    }

    /// Returns true if the reference floats on the `latest` tag.
    pub fn is_latest(&self) -> bool {
        self.tag_segment() == LATEST_TAG
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for ImageRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const LATEST_TAG: &str = "latest";
