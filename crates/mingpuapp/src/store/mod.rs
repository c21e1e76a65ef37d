//! # Catalog Sources
//!
//! The catalog is read once at startup from a [`CatalogSource`]. Sources are
//! abstracted behind a trait so the query core can be exercised without touching
//! the filesystem:
//!
//! - [`fs::FileSource`]: Reads a `{ "names": [...] }` JSON document from disk.
//! - [`memory::MemorySource`]: Hands back an already-parsed list of entries.
//!
//! A source only fetches and parses. Validation and the fallback policy live in
//! [`crate::catalog::load`], so every source gets identical recovery behavior.

use crate::error::Result;
use crate::model::CatalogEntry;

pub mod fs;
pub mod memory;

/// Abstract interface for wherever the catalog comes from.
pub trait CatalogSource {
    /// Fetch and parse the raw entries. Errors here are load failures.
    fn fetch(&self) -> Result<Vec<CatalogEntry>>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
