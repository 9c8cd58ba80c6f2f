//! # inkbridge protocol
//!
//! Message contract between a host application and a rich-text editor
//! embedded in an isolated document view.
//!
//! ```text
//!  Host ── NativeMessage (action / editor / initialContent) ──▶ Editor
//!  Host ◀── WebViewMessage (editorStateUpdate / editorInitialised) ── Editor
//! ```
//!
//! Every message is a JSON object with a `kind` discriminant and an
//! optional `payload`. Neither direction carries correlation ids or
//! acknowledgments: each message is a standalone notification.

mod action;
mod codec;
mod error;
mod message;
mod state;

pub use action::{EditorAction, FocusMode};
pub use codec::{decode, encode, MessageKind};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{Command, NativeMessage, Report, WebViewMessage};
pub use state::EditorState;
