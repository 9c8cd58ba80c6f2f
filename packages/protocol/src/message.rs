//! `kind`/`payload` tagged messages for both directions.

use crate::codec::MessageKind;
use crate::{EditorAction, EditorState, FocusMode};
use serde::{Deserialize, Serialize};

/// Host → editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum NativeMessage {
    /// Run one formatting operation.
    Action(EditorAction),

    /// Move input focus into or out of the editor.
    Editor(FocusMode),

    /// Replace the entire document with this HTML.
    InitialContent(String),
}

/// Editor → host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum WebViewMessage {
    EditorStateUpdate(EditorState),

    /// Sent once, when the engine has finished constructing.
    EditorInitialised,
}

/// Host-side name for the messages it sends.
pub type Command = NativeMessage;

/// Host-side name for the messages it receives.
pub type Report = WebViewMessage;

impl MessageKind for NativeMessage {
    const KINDS: &'static [&'static str] = &["action", "editor", "initialContent"];

    fn kind(&self) -> &'static str {
        match self {
            NativeMessage::Action(_) => "action",
            NativeMessage::Editor(_) => "editor",
            NativeMessage::InitialContent(_) => "initialContent",
        }
    }
}

impl MessageKind for WebViewMessage {
    const KINDS: &'static [&'static str] = &["editorStateUpdate", "editorInitialised"];

    fn kind(&self) -> &'static str {
        match self {
            WebViewMessage::EditorStateUpdate(_) => "editorStateUpdate",
            WebViewMessage::EditorInitialised => "editorInitialised",
        }
    }
}
