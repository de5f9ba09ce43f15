//! # Roster Architecture
//!
//! Roster is a small student-record library with a command-line client. The
//! records live in one plain text file, one student per line.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, renders tables/JSON, sets exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns roster outcomes into results and messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (roster.rs)                                         │
//! │  - Owns the ordered records; CRUD, search, sort             │
//! │  - Rewrites the whole store after every mutation            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through `tracing`; the binary decides where
//! they end up (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user operation
//! - [`roster`]: The record collection and its operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Student`, `Scope`, `SortOrder`
//! - [`codec`]: Line format (delimiter splitting and quoting)
//! - [`config`]: Per-scope configuration
//! - [`error`]: Error types
//! - [`logging`]: Subscriber setup for binaries

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod roster;
pub mod store;
