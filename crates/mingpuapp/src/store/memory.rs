use super::CatalogSource;
use crate::error::{MingpuError, Result};
use crate::model::CatalogEntry;

/// In-memory source for tests and embedding callers that already hold parsed data.
#[derive(Default)]
pub struct MemorySource {
    entries: Vec<CatalogEntry>,
    failure: Option<String>,
}

impl MemorySource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            failure: None,
        }
    }

    /// A source whose fetch always fails, for exercising the fallback path.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            failure: Some(reason.into()),
        }
    }
}

impl CatalogSource for MemorySource {
    fn fetch(&self) -> Result<Vec<CatalogEntry>> {
        match &self.failure {
            Some(reason) => Err(MingpuError::Io(std::io::Error::other(reason.clone()))),
            None => Ok(self.entries.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("memory ({} entries)", self.entries.len())
    }
}
