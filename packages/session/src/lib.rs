//! # inkbridge session
//!
//! Runs a host controller and an embedded editor adapter as two tokio
//! tasks joined by a [duplex](inkbridge_transport::duplex). Each side is a
//! single-threaded reactor that only ever touches its own state.
//!
//! ```text
//!  SessionHandle ── HostIntent ──▶ host task ══ commands ══▶ editor task
//!        ▲                            │       ◀══ reports ══
//!        └──── watch<EditorState> ────┘
//! ```

mod config;
mod handle;
mod reactor;

pub use config::{ConfigError, SessionConfig, DEFAULT_CONFIG_NAME};
pub use handle::{HostIntent, SessionHandle};
