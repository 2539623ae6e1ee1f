//! # Watchlog Architecture
//!
//! Watchlog is a **UI-agnostic media-tracking library** with a CLI client.
//! The user records movies and TV shows, tags the platform they stream on,
//! rates them 1-10, and marks what they have watched and when. Everything is
//! persisted to a single flat JSON file.
//!
//! ## Layers
//!
//! ```text
//! CLI (cli wiring in main.rs + args.rs)
//!   - parses arguments, colors output, owns stdout/stderr and exit codes
//! API (api.rs)
//!   - thin facade, validates required fields, returns Result<CmdResult>
//! Commands (commands/*.rs)
//!   - pure business logic per operation, no I/O assumptions
//! Storage (store/)
//!   - DataStore trait; FileStore (production), InMemoryStore (testing)
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal. The same core could
//! sit behind a TUI or a web front end.
//!
//! ## Titles as keys
//!
//! Records have no generated id: the title is the lookup key for rate,
//! watch, and search. Titles are not unique, and lookups always resolve to
//! the first insertion; later duplicates are unreachable by those
//! operations. This matches the on-disk format, which predates this crate.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`MediaRecord`, `MediaType`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
