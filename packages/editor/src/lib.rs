//! # Inkbridge Editor
//!
//! Rich-text engine that lives inside the embedded editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ html: markup → Document → canonical markup  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ commands: marks + list structure            │
//! │  - toggle bold / italic / strike            │
//! │  - wrap, sink, lift list items              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ StarterEditor: selection, stored marks,     │
//! │ focus, event queue (RichTextEngine)         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **HTML is the interchange format**: the document model is private
//!    to the engine, hosts only ever see serialized markup
//! 2. **Illegal commands are no-ops**: `run` returns `false` and leaves
//!    the document, focus and event queue untouched
//! 3. **Events are pulled**: whoever drives the engine drains
//!    [`RichTextEngine::take_events`] after each call
//!
//! ## Usage
//!
//! ```rust
//! use inkbridge_editor::{EngineCommand, Formatting, RichTextEngine, StarterEditor};
//!
//! let mut editor = StarterEditor::with_content("<p>Hello</p>");
//! editor.select_all();
//! assert!(editor.run(EngineCommand::ToggleBold));
//! assert!(editor.is_active(Formatting::Bold));
//! assert_eq!(editor.html(), "<p><strong>Hello</strong></p>");
//! ```

pub mod commands;
mod document;
mod engine;
mod errors;
pub mod html;
mod selection;
mod starter;

pub use document::{
    Block, Document, ListItem, Mark, Marks, Paragraph, TextRun, TextblockPath, MAX_LIST_DEPTH,
};
pub use engine::{EngineCommand, EngineEvent, Formatting, RichTextEngine};
pub use errors::{CommandError, CommandResult};
pub use selection::{Position, Selection};
pub use starter::StarterEditor;
