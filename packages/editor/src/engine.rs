//! The rich-text engine seam.
//!
//! An adapter only talks to the engine through [`RichTextEngine`], so a
//! different engine (or a test double) can be dropped in without touching
//! the protocol code.

use std::fmt;

/// Operations the engine can be asked to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineCommand {
    ToggleBold,
    ToggleItalic,
    ToggleStrike,
    ToggleBulletList,
    SinkListItem,
    LiftListItem,
}

/// Named mark or node types that can be active at the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatting {
    Bold,
    Italic,
    Strike,
    BulletList,
}

impl Formatting {
    pub fn name(&self) -> &'static str {
        match self {
            Formatting::Bold => "bold",
            Formatting::Italic => "italic",
            Formatting::Strike => "strike",
            Formatting::BulletList => "bulletList",
        }
    }
}

impl fmt::Display for Formatting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle and change notifications, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// Construction finished. Emitted exactly once, before anything else.
    Created,
    /// Selection or stored marks moved without touching the document.
    SelectionUpdated,
    /// The document changed.
    ContentUpdated,
}

pub trait RichTextEngine {
    /// Current document as canonical HTML.
    fn html(&self) -> String;

    /// Whether `command` would do something at the current selection.
    fn can(&self, command: EngineCommand) -> bool;

    fn is_active(&self, formatting: Formatting) -> bool;

    /// Run `command` if it is legal, otherwise do nothing. Returns whether it ran.
    fn run(&mut self, command: EngineCommand) -> bool;

    /// Replace the whole document. Malformed input is coerced, never rejected.
    fn set_content(&mut self, html: &str);

    fn focus(&mut self);

    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// Events raised since the last call, oldest first.
    fn take_events(&mut self) -> Vec<EngineEvent>;
}
