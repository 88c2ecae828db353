//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all lendz operations, regardless of the UI being used.
//!
//! The facade:
//! - **Owns** the [`Library`] state for the session
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It explicitly avoids:
//! - **Business logic**: that belongs in `commands/*.rs` and `model.rs`
//! - **I/O operations**: no stdout, stderr, or formatting
//! - **Presentation concerns**: returns data structures, not rendered text
//!
//! Catalog mutations (`add_item`, `register_member`) are append-only and
//! infallible, so they pass straight through to the library instead of going
//! through a command.

use crate::commands;
use crate::error::Result;
use crate::library::Library;
use crate::model::{Item, Member};

/// The main API facade for lendz operations.
///
/// All UI clients (CLI, tests, etc.) should interact through this API.
#[derive(Debug, Default)]
pub struct LendzApi {
    library: Library,
}

impl LendzApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-populated library, e.g. the demo data set.
    pub fn with_library(library: Library) -> Self {
        Self { library }
    }

    pub fn add_item(&mut self, item: Item) {
        self.library.add_item(item);
    }

    pub fn register_member(&mut self, member: Member) {
        self.library.register_member(member);
    }

    pub fn borrow_item(&mut self, member_name: &str, item_id: i32) -> Result<commands::CmdResult> {
        commands::borrow::run(&mut self.library, member_name, item_id)
    }

    pub fn return_item(&mut self, member_name: &str, item_id: i32) -> Result<commands::CmdResult> {
        commands::return_item::run(&mut self.library, member_name, item_id)
    }

    pub fn show_catalog(&self) -> Result<commands::CmdResult> {
        commands::catalog::run(&self.library)
    }

    pub fn library(&self) -> &Library {
        &self.library
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
