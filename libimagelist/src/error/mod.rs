//! Error types for image-list
//!
//! Per-file failures (`Read`, `Decode`) are reported and the file is skipped.
//! Walk and configuration failures end the run.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Main error type for image-list operations
#[derive(Error, Debug)]
pub enum ImageListError {
    /// A file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file's content could not be decoded as its format
    #[error("Failed to decode {format} in {}: {message}", .path.display())]
    Decode {
        path: PathBuf,
        format: &'static str,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Directory traversal failed
    #[error("Error reading files from directory {}: {message}", .root.display())]
    Walk {
        root: PathBuf,
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Configuration errors (invalid config file, missing settings)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for image-list operations
pub type Result<T> = std::result::Result<T, ImageListError>;

impl ImageListError {
    /// Creates a new read error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::error::ImageListError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    /// let err = ImageListError::read("deploy.yaml", io_err);
    /// assert!(matches!(err, ImageListError::Read { .. }));
    /// ```
    pub fn read<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new decode error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::error::ImageListError;
    ///
    /// let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    /// let err = ImageListError::decode("pod.json", "json", json_err);
    /// assert!(matches!(err, ImageListError::Decode { .. }));
    /// ```
    pub fn decode<P, E>(path: P, format: &'static str, source: E) -> Self
    where
        P: AsRef<Path>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            format,
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new walk error.
    pub fn walk<P: AsRef<Path>>(root: P, source: walkdir::Error) -> Self {
        let message = match source.path() {
            Some(path) => format!("{} ({})", source, path.display()),
            None => source.to_string(),
        };
        Self::Walk {
            root: root.as_ref().to_path_buf(),
            message,
            source,
        }
    }

    /// Creates a new configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::error::ImageListError;
    ///
    /// let err = ImageListError::config("invalid config file", Some("/path/to/config.yaml"));
    /// assert!(matches!(err, ImageListError::Config { .. }));
    /// ```
    pub fn config<S: Into<String>>(message: S, path: Option<S>) -> Self {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: None,
        }
    }

    /// Creates a new configuration error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::error::ImageListError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = ImageListError::config_with_source("failed to read config", Some("/path/to/config.yaml"), io_err);
    /// assert!(matches!(err, ImageListError::Config { .. }));
    /// ```
    pub fn config_with_source<S, E>(message: S, path: Option<S>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            path: path.map(|p| p.into()),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true when the error should end the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Walk { .. } | Self::Config { .. })
    }
}
