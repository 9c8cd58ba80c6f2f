use inkbridge_adapter::{derive_state, EditorAdapter};
use inkbridge_editor::{RichTextEngine, StarterEditor};
use inkbridge_transport::LocalQueue;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Editor adapter for the embedded document view.
///
/// The page owns the actual channel to the host: it feeds every inbound
/// message to `handleMessage` and posts whatever strings come back.
#[wasm_bindgen]
pub struct WasmEditor {
    adapter: EditorAdapter<StarterEditor, LocalQueue>,
    outbox: LocalQueue,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Construct the engine. The `editorInitialised` and first state
    /// messages are queued; fetch them with `drainMessages`.
    #[wasm_bindgen(constructor)]
    pub fn new(content: Option<String>) -> WasmEditor {
        let outbox = LocalQueue::new();
        let engine = StarterEditor::with_content(content.as_deref().unwrap_or(""));
        let adapter = EditorAdapter::new(engine, outbox.clone());
        WasmEditor { adapter, outbox }
    }

    /// Apply one raw host message and return the messages to post back.
    /// Malformed input yields an empty list.
    #[wasm_bindgen(js_name = handleMessage)]
    pub fn handle_message(&mut self, data: &str) -> Vec<String> {
        self.adapter.handle_message(data);
        self.outbox.drain()
    }

    /// Messages queued outside `handleMessage`, oldest first.
    #[wasm_bindgen(js_name = drainMessages)]
    pub fn drain_messages(&mut self) -> Vec<String> {
        self.outbox.drain()
    }

    pub fn html(&self) -> String {
        self.adapter.engine().html()
    }

    /// Current state as JSON, the same shape as an `editorStateUpdate` payload.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&derive_state(self.adapter.engine()))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_queues_initialised() {
        let mut editor = WasmEditor::new(None);
        let messages = editor.drain_messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], r#"{"kind":"editorInitialised"}"#);
        assert!(messages[1].contains(r#""html":"<p></p>""#));
        assert!(editor.drain_messages().is_empty());
    }

    #[test]
    fn test_handle_message_returns_reports() {
        let mut editor = WasmEditor::new(Some("<p>x</p>".to_string()));
        editor.drain_messages();

        let replies = editor.handle_message(r#"{"kind":"initialContent","payload":"<p>y</p>"}"#);
        assert_eq!(replies.len(), 1);
        assert!(replies[0].starts_with(r#"{"kind":"editorStateUpdate""#));
        assert_eq!(editor.html(), "<p>y</p>");
    }

    #[test]
    fn test_garbage_yields_nothing() {
        let mut editor = WasmEditor::new(Some("<p>x</p>".to_string()));
        editor.drain_messages();

        assert!(editor.handle_message("{{").is_empty());
        assert!(editor.handle_message(r#"{"kind":"nope"}"#).is_empty());
        assert_eq!(editor.html(), "<p>x</p>");
    }
}
