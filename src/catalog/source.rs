use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use super::types::{Lesson, Scale};

pub const SCALES_FILE: &str = "scales.json";
pub const LESSONS_FILE: &str = "lessons.json";

/// Errors that can occur while reading a catalog.
/// The loader absorbs all of them; none reach the navigation state.
#[derive(Debug)]
pub enum CatalogError {
    /// The record could not be read (missing file, permissions).
    Io { path: PathBuf, source: std::io::Error },
    /// The record was read but is not a valid sequence of records.
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "could not read {}: {source}", path.display())
            }
            CatalogError::Parse { path, source } => {
                write!(f, "could not parse {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Parse { source, .. } => Some(source),
        }
    }
}

/// A pre-populated store holding the "scales" and "lessons" records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    async fn load_scales(&self) -> Result<Vec<Scale>, CatalogError>;

    async fn load_lessons(&self) -> Result<Vec<Lesson>, CatalogError>;
}

/// Reads `scales.json` and `lessons.json` from a data directory.
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-files"
    }

    async fn load_scales(&self) -> Result<Vec<Scale>, CatalogError> {
        read_records(&self.data_dir.join(SCALES_FILE)).await
    }

    async fn load_lessons(&self) -> Result<Vec<Lesson>, CatalogError> {
        read_records(&self.data_dir.join(LESSONS_FILE)).await
    }
}

async fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    debug!("Reading catalog records from {}", path.display());
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    serde_json::from_str(&json).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
