//! Integration tests for editor crate

use inkbridge_editor::{
    html, EngineCommand, EngineEvent, Formatting, Position, RichTextEngine, StarterEditor,
};

#[test]
fn test_editor_lifecycle() {
    let mut editor = StarterEditor::with_content("<p>Hello <b>world</b></p>");

    // Construction is announced once
    assert_eq!(editor.take_events(), vec![EngineEvent::Created]);
    assert!(editor.take_events().is_empty());

    // Legacy tags come back canonical
    assert_eq!(editor.html(), "<p>Hello <strong>world</strong></p>");

    editor.set_selection(Position::new(0, 6), Position::new(0, 11));
    assert!(editor.is_active(Formatting::Bold));
    assert!(editor.run(EngineCommand::ToggleBold));
    assert_eq!(editor.html(), "<p>Hello world</p>");
    assert!(editor.is_focused());
}

#[test]
fn test_typing_into_a_list() {
    let mut editor = StarterEditor::new();
    editor.insert_text("first");
    assert!(editor.run(EngineCommand::ToggleBulletList));
    assert!(editor.is_active(Formatting::BulletList));
    assert_eq!(editor.html(), "<ul><li><p>first</p></li></ul>");

    editor.set_cursor(Position::new(0, 0));
    editor.insert_text("the ");
    assert_eq!(editor.html(), "<ul><li><p>the first</p></li></ul>");
    assert_eq!(editor.selection().head, Position::new(0, 4));
}

#[test]
fn test_nested_list_round_trip() {
    let source = "<ul><li><p>a</p></li><li><p>b</p></li><li><p>c</p></li></ul>";
    let mut editor = StarterEditor::with_content(source);

    editor.set_cursor(Position::new(2, 0));
    assert!(editor.run(EngineCommand::SinkListItem));
    assert_eq!(
        editor.html(),
        "<ul><li><p>a</p></li><li><p>b</p><ul><li><p>c</p></li></ul></li></ul>"
    );
    assert!(editor.can(EngineCommand::LiftListItem));
    assert!(!editor.can(EngineCommand::SinkListItem));

    assert!(editor.run(EngineCommand::LiftListItem));
    assert_eq!(editor.html(), source);
}

#[test]
fn test_set_content_coerces_markup() {
    let mut editor = StarterEditor::new();
    editor.take_events();

    editor.set_content("<h1>Title</h1><script>alert(1)</script><div>body &amp; soul</div>");
    assert_eq!(editor.html(), "<p>Title</p><p>body &amp; soul</p>");
    assert_eq!(editor.take_events(), vec![EngineEvent::ContentUpdated]);

    // Canonical output is a fixed point
    let again = html::serialize(&html::parse(&editor.html()));
    assert_eq!(again, editor.html());
}

#[test]
fn test_refused_commands_leave_no_trace() {
    let mut editor = StarterEditor::with_content("<p>plain</p>");
    editor.take_events();

    for command in [EngineCommand::SinkListItem, EngineCommand::LiftListItem] {
        assert!(!editor.can(command));
        assert!(!editor.run(command));
    }
    assert_eq!(editor.html(), "<p>plain</p>");
    assert!(editor.take_events().is_empty());
    assert!(!editor.is_focused());
}
