//! The two reactor loops.

use crate::handle::HostIntent;
use inkbridge_adapter::EditorAdapter;
use inkbridge_editor::StarterEditor;
use inkbridge_host::HostController;
use inkbridge_protocol::EditorState;
use inkbridge_transport::{Outbox, PipeReceiver, PipeSender};
use std::cell::RefCell;
use tokio::sync::{mpsc, watch};

/// Host end of the command pipe. Hanging up drops the sender so the
/// editor sees its inbound pipe close once it has drained it.
pub(crate) struct Uplink {
    tx: RefCell<Option<PipeSender>>,
}

impl Uplink {
    pub(crate) fn new(tx: PipeSender) -> Self {
        Self {
            tx: RefCell::new(Some(tx)),
        }
    }

    fn hang_up(&self) {
        self.tx.borrow_mut().take();
    }
}

impl Outbox for Uplink {
    fn post(&self, frame: String) {
        match self.tx.borrow().as_ref() {
            Some(tx) => {
                tx.send(frame);
            }
            None => tracing::debug!("command pipe hung up, frame dropped"),
        }
    }
}

pub(crate) async fn run_editor(mut inbound: PipeReceiver, outbound: PipeSender) {
    let mut adapter = EditorAdapter::new(StarterEditor::new(), outbound);
    while let Some(frame) = inbound.recv().await {
        adapter.handle_message(&frame);
    }
    tracing::info!("editor reactor stopped");
}

/// Runs until the intent channel is closed and every report the editor
/// produced afterwards has been applied. Returns the last state.
pub(crate) async fn run_host(
    mut host: HostController<Uplink>,
    mut intents: mpsc::UnboundedReceiver<HostIntent>,
    mut reports: PipeReceiver,
    state_tx: watch::Sender<EditorState>,
    ready_tx: watch::Sender<bool>,
) -> EditorState {
    let mut accepting = true;

    loop {
        tokio::select! {
            intent = intents.recv(), if accepting => match intent {
                Some(intent) => apply_intent(&mut host, intent),
                None => {
                    tracing::debug!("intent channel closed, draining reports");
                    accepting = false;
                    host.outbox().hang_up();
                }
            },
            frame = reports.recv() => match frame {
                Some(frame) => {
                    if host.handle_message(&frame) {
                        state_tx.send_replace(host.state().clone());
                        if host.is_editor_ready() {
                            ready_tx.send_if_modified(|ready| !std::mem::replace(ready, true));
                        }
                    }
                }
                None => break,
            },
        }
    }

    tracing::info!("host reactor stopped");
    host.state().clone()
}

fn apply_intent<O: Outbox>(host: &mut HostController<O>, intent: HostIntent) {
    match intent {
        HostIntent::SetContent(html) => host.set_content(html),
        HostIntent::Press(control) => host.press(control),
        HostIntent::Action(action) => host.dispatch_action(action),
        HostIntent::Focus => host.focus(),
        HostIntent::Blur => host.blur(),
        HostIntent::TapSurface => host.tap_editor_surface(),
    }
}
