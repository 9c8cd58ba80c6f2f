//! Reference engine over the starter-kit schema.

use crate::commands;
use crate::document::{Document, Mark, Marks};
use crate::engine::{EngineCommand, EngineEvent, Formatting, RichTextEngine};
use crate::html;
use crate::selection::{Position, Selection};
use std::collections::VecDeque;

/// In-memory rich-text editor: a document, a selection, stored marks for
/// the caret, and a queue of events for whoever hosts it.
#[derive(Debug, Clone)]
pub struct StarterEditor {
    doc: Document,
    selection: Selection,
    /// Marks the next typed text gets when the caret was toggled without
    /// a range. Cleared whenever the selection moves.
    stored_marks: Option<Marks>,
    focused: bool,
    events: VecDeque<EngineEvent>,
}

impl Default for StarterEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl StarterEditor {
    /// Editor over the empty document.
    pub fn new() -> Self {
        Self::with_content("")
    }

    pub fn with_content(content: &str) -> Self {
        let doc = html::parse(content);
        tracing::debug!(textblocks = doc.textblock_count(), "starter editor created");
        Self {
            doc,
            selection: Selection::default(),
            stored_marks: None,
            focused: false,
            events: VecDeque::from([EngineEvent::Created]),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn stored_marks(&self) -> Option<Marks> {
        self.stored_marks
    }

    /// Move the selection. Positions are clamped into the document.
    pub fn set_selection(&mut self, anchor: Position, head: Position) {
        let next = Selection::range(anchor, head).clamp(&self.doc);
        let changed = next != self.selection || self.stored_marks.is_some();
        self.selection = next;
        self.stored_marks = None;
        if changed {
            self.events.push_back(EngineEvent::SelectionUpdated);
        }
    }

    pub fn set_cursor(&mut self, at: Position) {
        self.set_selection(at, at);
    }

    pub fn select_all(&mut self) {
        let last = self.doc.textblock_count().saturating_sub(1);
        let len = self.doc.textblock(last).map(|p| p.len()).unwrap_or(0);
        self.set_selection(Position::new(0, 0), Position::new(last, len));
    }

    /// Type `text` at the selection. A range inside one textblock is
    /// replaced; a range spanning textblocks collapses to its start first.
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let from = self.selection.from();
        let to = self.selection.to();
        let paths = self.doc.textblocks();
        let Some(paragraph) = paths.get(from.block).and_then(|path| self.doc.paragraph_mut(path)) else {
            return;
        };

        let marks = self
            .stored_marks
            .unwrap_or_else(|| paragraph.marks_at(from.offset));
        if from.block == to.block {
            paragraph.delete(from.offset, to.offset);
        }
        paragraph.insert(from.offset, text, marks);

        self.selection = Selection::cursor(Position::new(from.block, from.offset + text.chars().count()));
        self.stored_marks = None;
        self.events.push_back(EngineEvent::SelectionUpdated);
        self.events.push_back(EngineEvent::ContentUpdated);
    }

    /// Marks at the caret: stored marks win over the surrounding text.
    fn caret_marks(&self) -> Marks {
        self.stored_marks.unwrap_or_else(|| {
            let head = self.selection.head;
            self.doc
                .textblock(head.block)
                .map(|p| p.marks_at(head.offset))
                .unwrap_or_default()
        })
    }

    fn mark_active(&self, mark: Mark) -> bool {
        if self.selection.is_empty() {
            return self.caret_marks().has(mark);
        }
        commands::range_has_mark(&self.doc, self.selection.from(), self.selection.to(), mark)
            .unwrap_or(false)
    }

    fn toggle_mark(&mut self, mark: Mark) {
        if self.selection.is_empty() {
            let marks = self.caret_marks();
            self.stored_marks = Some(marks.with(mark, !marks.has(mark)));
            self.events.push_back(EngineEvent::SelectionUpdated);
            return;
        }
        if commands::toggle_mark(&mut self.doc, self.selection.from(), self.selection.to(), mark) {
            self.events.push_back(EngineEvent::ContentUpdated);
        }
    }

    /// Run a structural command, recording a content event if it changed
    /// the document.
    fn structural(
        &mut self,
        command: impl FnOnce(&mut Document) -> crate::errors::CommandResult<()>,
    ) -> bool {
        let mut doc = self.doc.clone();
        match command(&mut doc) {
            Ok(()) => {
                if doc != self.doc {
                    self.doc = doc;
                    self.selection = self.selection.clamp(&self.doc);
                    self.events.push_back(EngineEvent::ContentUpdated);
                }
                true
            }
            Err(err) => {
                tracing::trace!(%err, "command not applicable");
                false
            }
        }
    }
}

impl RichTextEngine for StarterEditor {
    fn html(&self) -> String {
        html::serialize(&self.doc)
    }

    fn can(&self, command: EngineCommand) -> bool {
        let at = self.selection.from().block;
        match command {
            EngineCommand::ToggleBold
            | EngineCommand::ToggleItalic
            | EngineCommand::ToggleStrike
            | EngineCommand::ToggleBulletList => true,
            EngineCommand::SinkListItem => commands::can_sink_list_item(&self.doc, at),
            EngineCommand::LiftListItem => commands::can_lift_list_item(&self.doc, at),
        }
    }

    fn is_active(&self, formatting: Formatting) -> bool {
        match formatting {
            Formatting::Bold => self.mark_active(Mark::Bold),
            Formatting::Italic => self.mark_active(Mark::Italic),
            Formatting::Strike => self.mark_active(Mark::Strike),
            Formatting::BulletList => commands::is_in_list(&self.doc, self.selection.from().block),
        }
    }

    fn run(&mut self, command: EngineCommand) -> bool {
        let from = self.selection.from().block;
        let to = self.selection.to().block;

        let ran = match command {
            EngineCommand::ToggleBold => {
                self.toggle_mark(Mark::Bold);
                true
            }
            EngineCommand::ToggleItalic => {
                self.toggle_mark(Mark::Italic);
                true
            }
            EngineCommand::ToggleStrike => {
                self.toggle_mark(Mark::Strike);
                true
            }
            EngineCommand::ToggleBulletList => {
                self.structural(|doc| commands::toggle_bullet_list(doc, from, to))
            }
            EngineCommand::SinkListItem => self.structural(|doc| commands::sink_list_item(doc, from)),
            EngineCommand::LiftListItem => self.structural(|doc| commands::lift_list_item(doc, from)),
        };

        // Commands run through a focus-first chain.
        if ran {
            self.focused = true;
        }
        ran
    }

    fn set_content(&mut self, content: &str) {
        self.doc = html::parse(content);
        self.selection = Selection::default();
        self.stored_marks = None;
        self.events.push_back(EngineEvent::ContentUpdated);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain(..).collect()
    }
}
