//! # inkbridge host
//!
//! Host-side controller for an embedded rich-text editor. It keeps the
//! desired document content and the last [`EditorState`] reported by the
//! editor, turns button presses into commands, and derives the toolbar.
//!
//! The host never waits for the editor. Commands go out immediately and
//! the toolbar reflects whatever report arrived last.
//!
//! [`EditorState`]: inkbridge_protocol::EditorState

mod controller;
mod toolbar;

pub use controller::HostController;
pub use toolbar::{toolbar, ToolbarControl, ToolbarItem};
