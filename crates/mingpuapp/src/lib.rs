//! # Mingpu Architecture
//!
//! Mingpu browses a fixed catalog of generated personal names, each annotated with
//! pronunciation, five-element, numerology and hexagram metadata. This crate is the
//! UI-agnostic core; the `mingpu` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (mingpu crate)                                         │
//! │  - Parses arguments, renders pages and charts, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Facade over commands, owns the search debounce           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) over BrowseState (state.rs)       │
//! │  - One reducer, structured CmdResult, no I/O                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query core                                                 │
//! │  - filter.rs → query.rs → pagination.rs, stats.rs           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs) loaded from a CatalogSource (store/)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: catalog, then predicate, then query result, then the visible
//! window. Statistics read the catalog directly and ignore the current filters.
//!
//! ## No I/O in Core
//!
//! Apart from reading the catalog and writing hand-off records through their traits,
//! nothing here touches the filesystem, and nothing writes to stdout or stderr. Logging
//! goes through `tracing`; the binary decides where it ends up.
//!
//! ## Module Overview
//!
//! - [`model`]: Catalog entry types and the luck / element vocabularies
//! - [`catalog`]: Validated catalog, load policy and fallback record
//! - [`store`]: Catalog sources (file, memory)
//! - [`filter`]: Filter selections and predicate builder
//! - [`query`]: Filter + sort pipeline
//! - [`pagination`]: "Show more" cursor
//! - [`stats`]: Catalog-wide grouped counts
//! - [`selection`]: Compare list
//! - [`debounce`]: Quiet-period coalescing
//! - [`state`]: The browse session state
//! - [`commands`]: User actions and the reducer
//! - [`handoff`]: Detail / comparison records for the next screen
//! - [`api`]: The facade
//! - [`config`], [`init`]: Configuration and wiring
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod handoff;
pub mod init;
pub mod model;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod state;
pub mod stats;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
