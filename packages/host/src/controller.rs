use crate::toolbar::{toolbar, ToolbarControl, ToolbarItem};
use inkbridge_protocol::{decode, encode, Command, EditorAction, EditorState, FocusMode, Report};
use inkbridge_transport::Outbox;

/// Host-side protocol endpoint.
///
/// Holds exactly one desired-content string and one [`EditorState`]. The
/// state is only ever replaced by an inbound report, never edited here.
pub struct HostController<O: Outbox> {
    outbox: O,
    content: String,
    state: EditorState,
    editor_ready: bool,
}

impl<O: Outbox> HostController<O> {
    /// Controller with empty content and the all-false state. Sends nothing.
    pub fn new(outbox: O) -> Self {
        Self {
            outbox,
            content: String::new(),
            state: EditorState::default(),
            editor_ready: false,
        }
    }

    /// Controller that pushes `content` to the editor right away. If the
    /// editor does not exist yet the content is re-sent once it reports in.
    pub fn mount(content: impl Into<String>, outbox: O) -> Self {
        let mut controller = Self::new(outbox);
        controller.set_content(content);
        controller
    }

    pub fn outbox(&self) -> &O {
        &self.outbox
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Desired content, as last set by the host. Not necessarily what the
    /// editor currently shows.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether `editorInitialised` has been received.
    pub fn is_editor_ready(&self) -> bool {
        self.editor_ready
    }

    /// Replace the desired content and send it. Always sends, even when
    /// the content did not change.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.send(&Command::InitialContent(self.content.clone()));
    }

    /// Sends `action` without checking the `can*` flags.
    pub fn dispatch_action(&mut self, action: EditorAction) {
        self.send(&Command::Action(action));
    }

    pub fn focus(&mut self) {
        self.send(&Command::Editor(FocusMode::Focus));
    }

    pub fn blur(&mut self) {
        self.send(&Command::Editor(FocusMode::Blur));
    }

    /// A tap on the editor surface outside the toolbar.
    pub fn tap_editor_surface(&mut self) {
        self.focus();
    }

    pub fn toolbar(&self) -> Vec<ToolbarItem> {
        toolbar(&self.state)
    }

    /// Dispatch the control's action. Disabled controls still dispatch;
    /// the editor ignores what it cannot do.
    pub fn press(&mut self, control: ToolbarControl) {
        if control.is_disabled(&self.state) {
            tracing::debug!(%control, "pressing disabled control");
        }
        self.dispatch_action(control.action());
    }

    pub fn on_report(&mut self, report: Report) {
        match report {
            Report::EditorInitialised => {
                tracing::info!("editor initialised, re-sending content");
                self.editor_ready = true;
                self.send(&Command::InitialContent(self.content.clone()));
            }
            Report::EditorStateUpdate(state) => {
                self.state = state;
            }
        }
    }

    /// Decode and handle one inbound frame. Returns whether it was handled.
    pub fn handle_message(&mut self, raw: &str) -> bool {
        match decode::<Report>(raw) {
            Ok(report) => {
                self.on_report(report);
                true
            }
            Err(err) if err.is_unrecognized() => {
                tracing::debug!(%err, "dropping unrecognized report");
                false
            }
            Err(err) => {
                tracing::warn!(%err, "dropping report with invalid payload");
                false
            }
        }
    }

    fn send(&self, command: &Command) {
        match encode(command) {
            Ok(frame) => {
                tracing::trace!(len = frame.len(), "sending command");
                self.outbox.post(frame);
            }
            Err(err) => tracing::warn!(%err, "failed to encode command"),
        }
    }
}
