//! # Defs Architecture
//!
//! Defs is a personal glossary: short terms (usually acronyms) with their
//! expansion and optional notes, kept in one JSON file. The library does the
//! work; the `defs` binary only parses flags and prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses flags, prints entries and messages, exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade over commands, generic over the store        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - add: ask for fields, normalize, append                   │
//! │  - lookup: match terms, sort, offer to create on a miss     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DataStore trait; FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! User interaction goes through [`prompt::Prompt`] and styling through
//! [`render::Emphasis`], so everything below the CLI runs in tests without
//! a terminal.
//!
//! ## Matching
//!
//! A query matches an entry when its lowercase form equals either the
//! lowercased term or the lowercased term with everything outside `a-z`
//! removed. `abc` finds `A-BC` and `ABC`, never `abcd`.
//!
//! ## Module Overview
//!
//! - [`api`]: facade, entry point for all operations
//! - [`commands`]: add and lookup logic
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the [`model::Entry`] record
//! - [`render`]: entry layout and word wrapping
//! - [`prompt`]: line-oriented user input
//! - [`config`]: store location
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod render;
pub mod store;
