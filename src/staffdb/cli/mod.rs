//! # CLI Behavior
//!
//! This is **one possible UI client** for staffdb. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Session
//!
//! `staffdb [DATABASE]` optionally bulk-loads a database file, then runs a menu:
//!
//! ```text
//! 0: Add new employee to database
//! 1: Delete employee from database
//! 2: Print database to screen
//! 3: Exit database program
//! ```
//!
//! Field prompts repeat until the input is valid. Deleting an unknown name or
//! adding to a full store is reported and the menu carries on. End of input
//! on stdin ends the session as if `3` had been chosen.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring (config, store backend, bulk load)
//! - `menu`: The interactive loop
//! - `render`: Listing and message output
//! - `setup`: Argument parsing via clap
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
