//! # Lendz Architecture
//!
//! Lendz is a **UI-agnostic lending library**. This is not a CLI application that
//! happens to have some library code; it's a library that happens to have a CLI
//! client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + cli/, wired by main.rs)               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the in-memory Library for the session               │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves selectors (member name, item id) to entities    │
//! │  - Maps model outcomes to user-facing messages              │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (model.rs, library.rs)                         │
//! │  - Item, Member, and the borrow/return rules                │
//! │  - Total operations: outcomes and Options, never panics     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, model), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a TUI, or any other UI.
//!
//! ## Result Strings Are the Contract
//!
//! The messages produced by the command layer (borrow confirmations, cap and
//! return rejections) and the catalog block rendered by the CLI are fixed,
//! user-visible strings. Tests assert them verbatim; changing one is a
//! behavior change, not a cosmetic one.
//!
//! ## Testing Strategy
//!
//! 1. **Model** (`model.rs`, `library.rs`): unit tests for the borrow cap,
//!    return matching, and lookup rules. The lion's share of testing lives
//!    here and in the command modules.
//!
//! 2. **Commands** (`commands/*.rs`): message content and selector errors.
//!
//! 3. **API** (`api.rs`): session-level scenarios through the facade.
//!
//! 4. **CLI** (`tests/demo_e2e.rs`): the binary's full demo transcript.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, the entry point for all operations
//! - [`commands`]: One module per operation, plus the shared result types
//! - [`library`]: The catalog and member roster
//! - [`model`]: Core data types (`Item`, `ItemKind`, `Member`)
//! - [`demo`]: Canned data for the demo session
//! - [`error`]: Error types
//! - `args`/`cli`: Argument parsing and printing for the binary (not part of
//!   the lib API)

pub mod api;
pub mod commands;
pub mod demo;
pub mod error;
pub mod library;
pub mod model;
