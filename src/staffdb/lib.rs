//! # Staffdb Architecture
//!
//! Staffdb is a small employee database: a set of records (name, sex, age, job)
//! kept in name order, loaded from a flat text file and edited through a menu.
//! The menu is one client of the library, not the library itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, argument parsing, logging setup      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the store                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, delete, list, load, save                            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (validate.rs, store/, codec.rs)                       │
//! │  - Field rules, the ordered record store, the file format   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. Failures come back as [`error::StaffError`] and the
//! CLI decides whether they are fatal (bulk load) or just reported (delete of
//! an unknown name).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: The [`store::RecordStore`] trait with sorted and array backends
//! - [`validate`]: Field validation and normalization
//! - [`codec`]: Parser and renderer for the `Name:/Sex:/Age:/Job:` file format
//! - [`input`]: Bounded line reading shared by the menu and the codec
//! - [`model`]: Core data types (`Record`, `Sex`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
pub mod validate;
