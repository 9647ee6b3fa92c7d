//! Scanner configuration.
//!
//! Defaults are compiled in through serde. A YAML file can override any
//! field; missing fields keep their defaults and a list in the file replaces
//! the default list.

use crate::error::{ImageListError, Result};
use config::{Config as ConfigRs, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;


/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub registries: Registries,

    /// Image names reported as valid regardless of what the files contain.
    #[serde(default)]
    pub seed_images: Vec<String>,
}

impl Config {
    /// Parses a `Config` from a YAML string.
    ///
    /// This function is primarily used for testing.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let builder = ConfigRs::builder().add_source(File::from_str(s, FileFormat::Yaml));

        Self::from_builder(builder, None)
    }

    /// Loads a `Config` from an optional file path.
    ///
    /// With `None` the defaults are returned. A given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ConfigRs::builder();

        if let Some(p) = path {
            builder = builder.add_source(File::from(p).format(FileFormat::Yaml).required(true));
        }

        Self::from_builder(builder, path)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: Option<&Path>,
    ) -> Result<Self> {
        builder
            .build()
            .and_then(|cfg| cfg.try_deserialize())
            .map_err(|e| {
                ImageListError::config_with_source(
                    "Failed to deserialize configuration".to_string(),
                    path.map(|p| p.display().to_string()),
                    e,
                )
            })
    }
}

/// Registry prefix lists used by the classification policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Registries {
    /// Registry hosts whose images are valid.
    #[serde(default = "default_valid_registries")]
    pub valid: Vec<String>,

    /// Registry hosts whose images are left out of the report.
    #[serde(default = "default_ignored_registries")]
    pub ignored: Vec<String>,
}

impl Default for Registries {
    fn default() -> Self {
        Self {
            valid: default_valid_registries(),
            ignored: default_ignored_registries(),
        }
    }
}

fn default_valid_registries() -> Vec<String> {
    ["docker.io", "gcr.io", "k8s.gcr.io", "quay.io"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_ignored_registries() -> Vec<String> {
    // local test registry
    vec!["k8s1:5000".to_string()]
}
