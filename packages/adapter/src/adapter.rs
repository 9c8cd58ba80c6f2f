use crate::derive::{derive_state, engine_command};
use inkbridge_editor::{EngineEvent, RichTextEngine};
use inkbridge_protocol::{decode, encode, FocusMode, MessageKind, NativeMessage, WebViewMessage};
use inkbridge_transport::Outbox;

/// Embedded-side protocol endpoint wrapping one engine instance.
///
/// Every engine event becomes exactly one `editorStateUpdate`; the
/// `Created` event additionally produces the single `editorInitialised`,
/// posted right before its state update.
pub struct EditorAdapter<E: RichTextEngine, O: Outbox> {
    engine: E,
    outbox: O,
    initialised: bool,
}

impl<E: RichTextEngine, O: Outbox> EditorAdapter<E, O> {
    /// Wrap a freshly constructed engine. Reports for whatever the engine
    /// raised during construction are posted before this returns.
    pub fn new(engine: E, outbox: O) -> Self {
        let mut adapter = Self {
            engine,
            outbox,
            initialised: false,
        };
        tracing::info!("editor adapter attached");
        adapter.flush_events();
        adapter
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Run `f` against the engine directly, then report whatever it changed.
    /// Covers local input such as typing, which never goes over the wire.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut E) -> R) -> R {
        let result = f(&mut self.engine);
        self.flush_events();
        result
    }

    /// Decode and apply one inbound frame. Frames that do not decode are
    /// dropped; returns whether the frame was applied.
    pub fn handle_message(&mut self, raw: &str) -> bool {
        match decode::<NativeMessage>(raw) {
            Ok(command) => {
                self.apply_command(command);
                true
            }
            Err(err) if err.is_unrecognized() => {
                tracing::debug!(%err, "dropping unrecognized message");
                false
            }
            Err(err) => {
                tracing::warn!(%err, "dropping message with invalid payload");
                false
            }
        }
    }

    pub fn apply_command(&mut self, command: NativeMessage) {
        tracing::debug!(kind = command.kind(), "applying command");
        match command {
            NativeMessage::InitialContent(html) => self.engine.set_content(&html),
            NativeMessage::Action(action) => {
                let command = engine_command(action);
                if !self.engine.run(command) {
                    tracing::debug!(%action, "action not applicable, ignored");
                }
            }
            NativeMessage::Editor(FocusMode::Focus) => self.engine.focus(),
            NativeMessage::Editor(FocusMode::Blur) => self.engine.blur(),
        }
        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.engine.take_events() {
            if event == EngineEvent::Created {
                if self.initialised {
                    tracing::debug!("engine reported creation twice, ignored");
                    continue;
                }
                self.initialised = true;
                self.post(&WebViewMessage::EditorInitialised);
            }
            self.post(&WebViewMessage::EditorStateUpdate(derive_state(&self.engine)));
        }
    }

    fn post(&self, report: &WebViewMessage) {
        match encode(report) {
            Ok(frame) => {
                tracing::trace!(len = frame.len(), "posting report");
                self.outbox.post(frame);
            }
            Err(err) => tracing::warn!(%err, "failed to encode report"),
        }
    }
}

impl<E: RichTextEngine, O: Outbox> Drop for EditorAdapter<E, O> {
    fn drop(&mut self) {
        tracing::info!("editor adapter detached");
    }
}
