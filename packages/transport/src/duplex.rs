use crate::{pipe, PipeReceiver, PipeSender};

/// One side of a duplex: where it writes, and where it reads.
#[derive(Debug)]
pub struct Endpoint {
    pub outbound: PipeSender,
    pub inbound: PipeReceiver,
}

impl Endpoint {
    /// `(outbound, inbound)`, for reactors that drive each half separately.
    pub fn split(self) -> (PipeSender, PipeReceiver) {
        (self.outbound, self.inbound)
    }
}

/// Build the host ↔ editor duplex out of two unrelated pipes.
///
/// Returns `(host, editor)`. Nothing correlates the two directions: a
/// frame sent one way may interleave arbitrarily with frames coming back.
pub fn duplex() -> (Endpoint, Endpoint) {
    let (to_editor, from_host) = pipe("host->editor");
    let (to_host, from_editor) = pipe("editor->host");

    let host = Endpoint {
        outbound: to_editor,
        inbound: from_editor,
    };
    let editor = Endpoint {
        outbound: to_host,
        inbound: from_host,
    };
    (host, editor)
}
