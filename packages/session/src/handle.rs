use crate::config::SessionConfig;
use crate::reactor::{run_editor, run_host, Uplink};
use inkbridge_host::{HostController, ToolbarControl};
use inkbridge_protocol::{EditorAction, EditorState};
use inkbridge_transport::duplex;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Things a user can do to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostIntent {
    SetContent(String),
    Press(ToolbarControl),
    Action(EditorAction),
    Focus,
    Blur,
    /// Tap on the editor surface outside the toolbar.
    TapSurface,
}

/// Owner of a running session.
///
/// Intents go in through an unbounded channel; the host's latest
/// [`EditorState`] comes out through a `watch`. Must be created inside a
/// tokio runtime.
pub struct SessionHandle {
    intents: mpsc::UnboundedSender<HostIntent>,
    state: watch::Receiver<EditorState>,
    ready: watch::Receiver<bool>,
    host_task: JoinHandle<EditorState>,
    editor_task: JoinHandle<()>,
}

impl SessionHandle {
    /// Start both reactors. The host mounts with `initial_content`.
    pub fn spawn(initial_content: impl Into<String>) -> Self {
        let (host_end, editor_end) = duplex();
        let (commands, reports) = host_end.split();
        let (editor_out, editor_in) = editor_end.split();

        let (intents_tx, intents_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(EditorState::default());
        let (ready_tx, ready_rx) = watch::channel(false);

        let host = HostController::mount(initial_content, Uplink::new(commands));
        let host_task = tokio::spawn(run_host(host, intents_rx, reports, state_tx, ready_tx));
        let editor_task = tokio::spawn(run_editor(editor_in, editor_out));
        tracing::info!("session started");

        Self {
            intents: intents_tx,
            state: state_rx,
            ready: ready_rx,
            host_task,
            editor_task,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::spawn(config.initial_content.clone())
    }

    /// Queue an intent for the host. Returns `false` if the host has stopped.
    pub fn send(&self, intent: HostIntent) -> bool {
        self.intents.send(intent).is_ok()
    }

    pub fn set_content(&self, html: impl Into<String>) -> bool {
        self.send(HostIntent::SetContent(html.into()))
    }

    pub fn press(&self, control: ToolbarControl) -> bool {
        self.send(HostIntent::Press(control))
    }

    pub fn dispatch(&self, action: EditorAction) -> bool {
        self.send(HostIntent::Action(action))
    }

    /// Wait until the host has seen `editorInitialised`. Intents sent
    /// afterwards reach the editor behind the host's content re-send, so
    /// they cannot be undone by it. Returns `false` if the session stopped.
    pub async fn ready(&mut self) -> bool {
        self.ready.wait_for(|ready| *ready).await.is_ok()
    }

    /// Latest state the host has received.
    pub fn state(&self) -> EditorState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.state.clone()
    }

    /// Wait until the host holds a state matching `predicate`. `None` if
    /// the session stopped first.
    pub async fn wait_for(&mut self, predicate: impl FnMut(&EditorState) -> bool) -> Option<EditorState> {
        self.state.wait_for(predicate).await.ok().map(|state| state.clone())
    }

    /// Stop accepting intents, let everything already sent run through
    /// the editor, and return the final state.
    pub async fn finish(self) -> EditorState {
        let Self {
            intents,
            state,
            host_task,
            editor_task,
            ..
        } = self;
        drop(intents);

        let fallback = state.borrow().clone();
        let final_state = match host_task.await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(%err, "host reactor failed");
                fallback
            }
        };
        if let Err(err) = editor_task.await {
            tracing::warn!(%err, "editor reactor failed");
        }
        final_state
    }

    /// Tear both reactors down immediately. Frames still in flight are
    /// dropped without error.
    pub fn abort(self) {
        self.host_task.abort();
        self.editor_task.abort();
        tracing::info!("session aborted");
    }
}
