//! # Tankobon Architecture
//!
//! Tankobon organizes a comic or manga series stored as directories: one directory per
//! volume, holding one directory per chapter. It reads the volume and chapter numbers
//! out of messy, inconsistent directory names and renames everything from a template.
//!
//! It is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, layers the config file, sets up logs   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, dispatch on the work mode     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - plan: build the tree and the rename plan                 │
//! │  - report / apply: show it, dry-run it or execute it        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (number.rs, tree/, transform.rs)                    │
//! │  - Number parsing, inference, templates, rename plans       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DirStore trait                                  │
//! │  - FsStore (production), InMemoryStore (testing)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## How numbers are found
//!
//! Siblings are expected to form a contiguous run: the `k`-th of `n` volumes should be
//! numbered somewhere in `first..first + n`. Every name is searched for numbers; values
//! explained by the ancestors (the series name, the volume number) are discarded, and
//! the candidate that fits a free slot of the run wins. Chapters without any usable
//! number become bonus chapters, chapters with a decimal part are sub-releases.
//!
//! Nothing in the core writes to stdout or exits the process. Logging goes through
//! `tracing`; the CLI decides where it ends up.
//!
//! ## Module Overview
//!
//! - [`api`]: facade, entry point for UIs
//! - [`commands`]: plan, report, apply
//! - [`config`]: options, defaults and the JSON settings file
//! - [`error`]: error type
//! - [`number`]: the [`number::Ordinal`] value, arabic and roman
//! - [`store`]: directory access
//! - [`transform`]: rename plans and their execution
//! - [`tree`]: the series tree and number inference

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod number;
pub mod store;
pub mod transform;
pub mod tree;
