//! # inkbridge transport
//!
//! Two independent one-way pipes composed into a duplex. Each pipe
//! carries whole text frames in send order, exactly once, with no
//! backpressure and no reply channel.
//!
//! Senders never block and never fail loudly: once the receiving end is
//! gone, frames are dropped silently.

mod duplex;
mod outbox;
mod pipe;

pub use duplex::{duplex, Endpoint};
pub use outbox::{LocalQueue, Outbox};
pub use pipe::{pipe, PipeReceiver, PipeSender};
