//! # Staffdb CLI
//!
//! The binary is intentionally thin: the menu lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/staffdb/cli/)                               │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Config, store selection, menu loop (commands.rs, menu.rs)│
//! │  - Listing and message output (render.rs)                   │
//! │  - tracing subscriber (logging.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (src/staffdb/api.rs) and everything below it     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prompts, messages and logs go to stderr. Only the database listing goes to
//! stdout, so `staffdb db.txt > listing.txt` captures just the records.
//!
//! A database file that cannot be opened or fails to parse is fatal: the
//! error is printed and the process exits with status 1 before the menu
//! starts.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
