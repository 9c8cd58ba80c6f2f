//! Wire-level behavior of the adapter, driven with raw JSON frames.

use inkbridge_adapter::EditorAdapter;
use inkbridge_editor::{RichTextEngine, StarterEditor};
use inkbridge_protocol::{decode, EditorState, WebViewMessage};
use inkbridge_transport::LocalQueue;

fn attach(content: &str) -> (EditorAdapter<StarterEditor, LocalQueue>, LocalQueue) {
    let queue = LocalQueue::new();
    let adapter = EditorAdapter::new(StarterEditor::with_content(content), queue.clone());
    (adapter, queue)
}

fn states(queue: &LocalQueue) -> Vec<EditorState> {
    queue
        .drain()
        .iter()
        .filter_map(|frame| match decode::<WebViewMessage>(frame).unwrap() {
            WebViewMessage::EditorStateUpdate(state) => Some(state),
            WebViewMessage::EditorInitialised => None,
        })
        .collect()
}

#[test]
fn test_empty_document_end_to_end() {
    let (mut adapter, queue) = attach("");

    let frames = queue.drain();
    assert_eq!(frames[0], r#"{"kind":"editorInitialised"}"#);
    let WebViewMessage::EditorStateUpdate(state) = decode::<WebViewMessage>(&frames[1]).unwrap() else {
        panic!("expected a state update after editorInitialised");
    };
    assert_eq!(state.html, "<p></p>");
    assert!(state.can_bold);
    assert!(!state.is_bold_active);

    assert!(adapter.handle_message(r#"{"kind":"action","payload":"toggleBold"}"#));
    let state = states(&queue).pop().unwrap();
    assert!(state.is_bold_active);
}

#[test]
fn test_illegal_actions_leave_html_unchanged() {
    let (mut adapter, queue) = attach("");
    queue.drain();

    for action in ["sinkListItem", "liftListItem"] {
        let frame = format!(r#"{{"kind":"action","payload":"{}"}}"#, action);
        assert!(adapter.handle_message(&frame));
    }
    assert_eq!(adapter.engine().html(), "<p></p>");
    assert!(states(&queue).is_empty());
}

#[test]
fn test_initial_content_is_idempotent() {
    let (mut adapter, queue) = attach("");
    let frame = r#"{"kind":"initialContent","payload":"<p>Hello <b>there</b></p>"}"#;

    adapter.handle_message(frame);
    let once = states(&queue).pop().unwrap().html;
    adapter.handle_message(frame);
    let twice = states(&queue).pop().unwrap().html;

    assert_eq!(once, "<p>Hello <strong>there</strong></p>");
    assert_eq!(once, twice);
}

#[test]
fn test_last_initial_content_wins() {
    let (mut adapter, queue) = attach("");
    adapter.handle_message(r#"{"kind":"initialContent","payload":"<p>A</p>"}"#);
    adapter.handle_message(r#"{"kind":"initialContent","payload":"<p>B</p>"}"#);

    assert_eq!(states(&queue).pop().unwrap().html, "<p>B</p>");
}

#[test]
fn test_bold_toggle_is_consistent_on_a_selection() {
    let (mut adapter, queue) = attach("<p>word</p>");
    adapter.edit(|editor| editor.select_all());
    let before = states(&queue).pop().unwrap();
    assert!(before.can_bold);
    assert!(!before.is_bold_active);

    adapter.handle_message(r#"{"kind":"action","payload":"toggleBold"}"#);
    let after = states(&queue).pop().unwrap();
    assert!(after.is_bold_active);
    assert_eq!(after.html, "<p><strong>word</strong></p>");

    adapter.handle_message(r#"{"kind":"action","payload":"toggleBold"}"#);
    let reverted = states(&queue).pop().unwrap();
    assert!(!reverted.is_bold_active);
    assert_eq!(reverted.html, before.html);
}

#[test]
fn test_list_actions_report_list_flags() {
    let (mut adapter, queue) = attach("<p>one</p>");
    queue.drain();

    adapter.handle_message(r#"{"kind":"action","payload":"toggleListItem"}"#);
    let state = states(&queue).pop().unwrap();
    assert_eq!(state.html, "<ul><li><p>one</p></li></ul>");
    assert!(state.is_bullet_list_active);
    assert!(state.can_lift_list_item);
    assert!(!state.can_sink_list_item);

    adapter.handle_message(r#"{"kind":"action","payload":"liftListItem"}"#);
    let state = states(&queue).pop().unwrap();
    assert_eq!(state.html, "<p>one</p>");
    assert!(!state.is_bullet_list_active);
}

#[test]
fn test_garbage_is_dropped_without_reports() {
    let (mut adapter, queue) = attach("<p>stay</p>");
    queue.drain();

    for frame in ["", "{", "[]", r#"{"payload":"x"}"#, r#"{"kind":"launch"}"#, r#"{"kind":"editor","payload":"sideways"}"#] {
        assert!(!adapter.handle_message(frame));
    }
    assert!(queue.is_empty());
    assert_eq!(adapter.engine().html(), "<p>stay</p>");
}

#[test]
fn test_deep_and_large_content_is_coerced() {
    let (mut adapter, queue) = attach("");
    queue.drain();

    let lists = "<ul><li>a".repeat(2_000);
    let marks = format!("<p>{}deep", "<b><i>".repeat(50_000));
    for payload in [lists, marks] {
        let frame = format!(r#"{{"kind":"initialContent","payload":{}}}"#, serde_json::to_string(&payload).unwrap());
        assert!(adapter.handle_message(&frame));

        let state = states(&queue).pop().unwrap();
        assert_eq!(state.html, adapter.engine().html());
        assert!(state.html.len() > "<p></p>".len());
    }
    assert!(adapter.engine().html().ends_with("<strong><em>deep</em></strong></p>"));
}
