use crate::PipeSender;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

/// Fire-and-forget sink for encoded frames.
///
/// Handlers on either side only ever post; they never wait for a reply
/// and never learn whether the frame arrived.
pub trait Outbox {
    fn post(&self, frame: String);
}

impl Outbox for PipeSender {
    fn post(&self, frame: String) {
        self.send(frame);
    }
}

impl<O: Outbox + ?Sized> Outbox for &O {
    fn post(&self, frame: String) {
        (**self).post(frame)
    }
}

impl<O: Outbox + ?Sized> Outbox for Rc<O> {
    fn post(&self, frame: String) {
        (**self).post(frame)
    }
}

impl<O: Outbox + ?Sized> Outbox for Arc<O> {
    fn post(&self, frame: String) {
        (**self).post(frame)
    }
}

/// Single-threaded in-memory queue. Clones share the same queue.
///
/// Used where the real channel lives outside Rust (the embedded document
/// posts frames itself) and in tests.
#[derive(Debug, Clone, Default)]
pub struct LocalQueue {
    frames: Rc<RefCell<VecDeque<String>>>,
}

impl LocalQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }

    pub fn drain(&self) -> Vec<String> {
        self.frames.borrow_mut().drain(..).collect()
    }
}

impl Outbox for LocalQueue {
    fn post(&self, frame: String) {
        self.frames.borrow_mut().push_back(frame);
    }
}
