use tokio::sync::mpsc;

/// Create a one-way pipe.
///
/// `label` only shows up in logs.
pub fn pipe(label: &'static str) -> (PipeSender, PipeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (PipeSender { tx, label }, PipeReceiver { rx, label })
}

/// Sending half of a pipe. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PipeSender {
    tx: mpsc::UnboundedSender<String>,
    label: &'static str,
}

impl PipeSender {
    /// Queue a frame. Returns `false` if the receiver has been dropped, in
    /// which case the frame is discarded.
    pub fn send(&self, frame: String) -> bool {
        match self.tx.send(frame) {
            Ok(()) => {
                tracing::trace!(pipe = self.label, "frame queued");
                true
            }
            Err(_) => {
                tracing::debug!(pipe = self.label, "receiver gone, frame dropped");
                false
            }
        }
    }
}

/// Receiving half of a pipe.
#[derive(Debug)]
pub struct PipeReceiver {
    rx: mpsc::UnboundedReceiver<String>,
    label: &'static str,
}

impl PipeReceiver {
    /// Wait for the next frame. `None` once every sender is gone and the
    /// queue is empty.
    pub async fn recv(&mut self) -> Option<String> {
        let frame = self.rx.recv().await;
        if frame.is_none() {
            tracing::debug!(pipe = self.label, "every sender gone, pipe ended");
        }
        frame
    }
}
