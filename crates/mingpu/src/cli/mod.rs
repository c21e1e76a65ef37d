//! # CLI Behavior
//!
//! This is **one possible UI client** for mingpu. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `mingpu` with no subcommand is `mingpu list`: the first page of the catalog.
//!
//! ## Output Modes
//!
//! Every subcommand renders colored text by default. `--json` prints the structured
//! result instead (the page view, the statistics, the entries), so other tools can
//! consume it.
//!
//! ## Catalog Fallback
//!
//! If the catalog cannot be read, the built-in sample record is shown and a warning
//! says so. A catalog that parses but breaks its contract (duplicate ids, an unknown
//! luck value) is an error.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Per-command handlers that call the API and render the result
//! - `render`: Pages, detail cards, comparison tables and charts
//! - `session`: The interactive `browse` loop

mod commands;
mod render;
mod session;
pub mod setup;

pub use commands::run;
