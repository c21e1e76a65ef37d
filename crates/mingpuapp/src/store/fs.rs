use super::CatalogSource;
use crate::error::{MingpuError, Result};
use crate::model::{CatalogDocument, CatalogEntry};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog document from a JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<Vec<CatalogEntry>> {
        let content = fs::read_to_string(&self.path).map_err(MingpuError::Io)?;
        let doc: CatalogDocument =
            serde_json::from_str(&content).map_err(MingpuError::Serialization)?;
        Ok(doc.names)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
