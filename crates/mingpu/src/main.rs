//! # Mingpu CLI
//!
//! The binary is thin: everything lives in `cli/`, and this file only
//! runs it and turns an error into a message and exit status 1.
//!
//! ## Workspace Structure
//!
//! - `crates/mingpuapp/`: UI-agnostic core: catalog, query engine, commands, API
//! - `crates/mingpu/`: this CLI, one client of `mingpuapp`
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/mingpu/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Handlers + context wiring (commands.rs)                  │
//! │  - Terminal and JSON rendering (render.rs)                  │
//! │  - Interactive browse loop (session.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/mingpuapp/src/api.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Log output goes to stderr through `tracing-subscriber`. The filter comes from
//! `MINGPU_LOG`, then `RUST_LOG`, then `-v` (info) or the default (warn).

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
