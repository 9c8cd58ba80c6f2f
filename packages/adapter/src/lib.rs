//! # inkbridge adapter
//!
//! Runs inside the embedded document view. Owns one rich-text engine,
//! applies [`NativeMessage`](inkbridge_protocol::NativeMessage) commands
//! to it, and reports every engine event back to the host as a
//! [`WebViewMessage`](inkbridge_protocol::WebViewMessage).
//!
//! ```text
//!  inbound frame ─ decode ─▶ apply_command ─▶ engine
//!                                               │ events
//!  outbound frame ◀─ encode ◀─ derive_state ◀───┘
//! ```

mod adapter;
mod derive;

pub use adapter::EditorAdapter;
pub use derive::{derive_state, engine_command};
