//! # Configuration
//!
//! Settings are loaded with [`confique`] in three layers, highest priority first:
//!
//! 1. **Environment variables**: `MINGPU_PAGE_SIZE`, `MINGPU_DEBOUNCE_MS`,
//!    `MINGPU_CATALOG`, `MINGPU_HANDOFF_DIR`.
//! 2. **Config file**: `mingpu.toml` in the home directory resolved by [`crate::init`].
//! 3. **Compiled defaults** from `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `9` | Entries per "show more" page. Must be at least 1. |
//! | `debounce_ms` | `300` | Quiet period before search text is applied. |
//! | `catalog_path` | `<home>/names.json` | The catalog document to load. |
//! | `handoff_dir` | `<home>/handoff` | Where detail and comparison records are written. |

use crate::error::{MingpuError, Result};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE: &str = "mingpu.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MingpuConfig {
    /// Entries per page.
    #[config(default = 9, env = "MINGPU_PAGE_SIZE")]
    pub page_size: usize,

    /// Search debounce quiet period in milliseconds.
    #[config(default = 300, env = "MINGPU_DEBOUNCE_MS")]
    pub debounce_ms: u64,

    /// Catalog document path. When absent, `names.json` in the home directory.
    #[config(env = "MINGPU_CATALOG")]
    pub catalog_path: Option<PathBuf>,

    /// Hand-off directory. When absent, `handoff/` in the home directory.
    #[config(env = "MINGPU_HANDOFF_DIR")]
    pub handoff_dir: Option<PathBuf>,
}

impl Default for MingpuConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            debounce_ms: 300,
            catalog_path: None,
            handoff_dir: None,
        }
    }
}

impl MingpuConfig {
    /// Load from the environment over `<home>/mingpu.toml` over defaults.
    /// A missing file is not an error.
    pub fn load(home: &Path) -> Result<Self> {
        let config = MingpuConfig::builder()
            .env()
            .file(home.join(CONFIG_FILE))
            .load()
            .map_err(|e| MingpuError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(MingpuError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn catalog_path(&self, home: &Path) -> PathBuf {
        self.catalog_path
            .clone()
            .unwrap_or_else(|| home.join("names.json"))
    }

    pub fn handoff_dir(&self, home: &Path) -> PathBuf {
        self.handoff_dir
            .clone()
            .unwrap_or_else(|| home.join("handoff"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_match_browser_behavior() {
        let config = MingpuConfig::default();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn paths_default_under_home() {
        let config = MingpuConfig::default();
        let home = Path::new("/tmp/mingpu-home");
        assert_eq!(config.catalog_path(home), home.join("names.json"));
        assert_eq!(config.handoff_dir(home), home.join("handoff"));
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "page_size = 4\ncatalog_path = \"/data/names.json\"\n",
        )
        .unwrap();

        let config = MingpuConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/names.json")));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "page_size = 0\n").unwrap();

        let err = MingpuConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, MingpuError::Config(_)));
    }
}
