//! Directory walking and document decoding.
//!
//! Every file under a root whose extension is `.yaml`, `.yml` or `.json` is
//! read in full and decoded as a stream of documents. Per-file failures are
//! logged and the file is skipped. A failure of the walk itself is returned.

use crate::document::Document;
use crate::error::{ImageListError, Result};
use crate::extract::{Extractor, ImageSets};
use serde::Deserialize;
use std::path::Path;
use walkdir::WalkDir;


/// Input formats recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Determines the format from the file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use libimagelist::loader::FileFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileFormat::from_path(Path::new("deploy.yml")), Some(FileFormat::Yaml));
    /// assert_eq!(FileFormat::from_path(Path::new("pod.json")), Some(FileFormat::Json));
    /// assert_eq!(FileFormat::from_path(Path::new("README.md")), None);
    /// ```
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Some(FileFormat::Yaml),
            Some("json") => Some(FileFormat::Json),
            _ => None,
        }
    }

    /// Short tag used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Yaml => "yaml",
            FileFormat::Json => "json",
        }
    }
}

/// Counters collected while scanning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Files with a recognised extension that were opened.
    pub files_scanned: u64,
    /// Documents decoded and visited.
    pub documents: u64,
    /// Files skipped because of a read or decode error.
    pub files_failed: u64,
}

impl ScanStats {
    pub fn merge(&mut self, other: ScanStats) {
        self.files_scanned += other.files_scanned;
        self.documents += other.documents;
        self.files_failed += other.files_failed;
    }
}

/// Error raised by a format decoder, before the file path is attached.
#[derive(Debug)]
pub enum DecodeError {
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
}

impl DecodeError {
    fn into_error(self, path: &Path, format: FileFormat) -> ImageListError {
        match self {
            DecodeError::Yaml(e) => ImageListError::decode(path, format.as_str(), e),
            DecodeError::Json(e) => ImageListError::decode(path, format.as_str(), e),
        }
    }
}

/// Decodes every document in `text`, handing each one to `visit` as soon as
/// it is decoded.
///
/// Decoding stops at the first error. Documents decoded before the error have
/// already been visited. Returns the number of documents visited.
pub fn decode_documents<F>(
    format: FileFormat,
    text: &str,
    mut visit: F,
) -> std::result::Result<usize, DecodeError>
where
    F: FnMut(Document),
{
    let mut count = 0;
    match format {
        FileFormat::Yaml => {
            for doc in serde_yaml::Deserializer::from_str(text) {
                let value = serde_yaml::Value::deserialize(doc).map_err(DecodeError::Yaml)?;
                visit(Document::from(value));
                count += 1;
            }
        }
        FileFormat::Json => {
            let stream =
                serde_json::Deserializer::from_str(text).into_iter::<serde_json::Value>();
            for value in stream {
                visit(Document::from(value.map_err(DecodeError::Json)?));
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Reads `path` and decodes it as `format`.
pub fn load_file<F>(path: &Path, format: FileFormat, visit: F) -> Result<usize>
where
    F: FnMut(Document),
{
    let text = std::fs::read_to_string(path).map_err(|e| ImageListError::read(path, e))?;
    decode_documents(format, &text, visit).map_err(|e| e.into_error(path, format))
}

/// Walks `root` and records every image reference found into `images`.
///
/// Read and decode failures are logged as warnings and counted. A directory
/// walk failure aborts the scan.
pub fn scan_directory(
    root: &Path,
    extractor: &Extractor,
    images: &mut ImageSets,
) -> Result<ScanStats> {
    let mut stats = ScanStats::default();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| ImageListError::walk(root, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(format) = FileFormat::from_path(path) else {
            continue;
        };

        stats.files_scanned += 1;
        tracing::debug!("Scanning {} as {}", path.display(), format.as_str());

        let mut documents = 0u64;
        let loaded = load_file(path, format, |doc| {
            documents += 1;
            extractor.visit(&doc, images);
        });
        stats.documents += documents;

        if let Err(e) = loaded {
            tracing::warn!("{}", e);
            stats.files_failed += 1;
        }
    }

    Ok(stats)
}
