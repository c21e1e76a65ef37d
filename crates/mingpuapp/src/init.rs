//! # Session Setup
//!
//! [`initialize`] wires a ready-to-use [`MingpuApi`] from the outside world:
//!
//! 1. Resolve the home directory: `MINGPU_HOME` if set, otherwise the OS config
//!    directory for `mingpu` (via the `directories` crate).
//! 2. Load [`MingpuConfig`] from the environment and `<home>/mingpu.toml`.
//! 3. Pick the catalog path: the explicit override (the CLI's `--catalog`), then the
//!    config, then `<home>/names.json`.
//! 4. Load the catalog with the fallback policy of [`crate::catalog::load`].
//! 5. Build the API with a [`FileHandoff`] in the configured hand-off directory.
//!
//! A missing or unreadable catalog does not fail initialization; the context records
//! that the fallback record was used instead.

use crate::api::MingpuApi;
use crate::catalog;
use crate::config::MingpuConfig;
use crate::error::{MingpuError, Result};
use crate::handoff::FileHandoff;
use crate::store::fs::FileSource;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub struct MingpuContext {
    pub api: MingpuApi<FileHandoff>,
    pub config: MingpuConfig,
    pub home: PathBuf,
    pub catalog_path: PathBuf,
    pub fallback_used: bool,
}

/// `MINGPU_HOME`, or the platform config directory.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("MINGPU_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "mingpu", "mingpu")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MingpuError::Config("Could not determine config dir".to_string()))
}

pub fn initialize(catalog_override: Option<PathBuf>) -> Result<MingpuContext> {
    let home = home_dir()?;
    initialize_in(&home, catalog_override)
}

/// Same as [`initialize`] with an explicit home directory.
pub fn initialize_in(home: &Path, catalog_override: Option<PathBuf>) -> Result<MingpuContext> {
    let config = MingpuConfig::load(home)?;
    let catalog_path = catalog_override.unwrap_or_else(|| config.catalog_path(home));

    let outcome = catalog::load(&FileSource::new(&catalog_path))?;
    let handoff = FileHandoff::new(config.handoff_dir(home));
    let api = MingpuApi::new(
        outcome.catalog,
        config.page_size,
        config.debounce(),
        handoff,
    );

    Ok(MingpuContext {
        api,
        config,
        home: home.to_path_buf(),
        catalog_path,
        fallback_used: outcome.fallback_used,
    })
}
