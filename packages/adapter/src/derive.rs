//! Engine → wire translation.

use inkbridge_editor::{EngineCommand, Formatting, RichTextEngine};
use inkbridge_protocol::{EditorAction, EditorState};

/// Snapshot the engine into a full [`EditorState`].
///
/// Always recomputed from scratch so the flags agree with the engine's
/// selection at the moment of the call.
pub fn derive_state<E: RichTextEngine + ?Sized>(engine: &E) -> EditorState {
    EditorState {
        html: engine.html(),
        can_bold: engine.can(EngineCommand::ToggleBold),
        can_italic: engine.can(EngineCommand::ToggleItalic),
        can_strike: engine.can(EngineCommand::ToggleStrike),
        can_sink_list_item: engine.can(EngineCommand::SinkListItem),
        can_lift_list_item: engine.can(EngineCommand::LiftListItem),
        is_bullet_list_active: engine.is_active(Formatting::BulletList),
        is_bold_active: engine.is_active(Formatting::Bold),
        is_italic_active: engine.is_active(Formatting::Italic),
        is_strike_active: engine.is_active(Formatting::Strike),
    }
}

/// Fixed mapping from wire actions to engine commands.
pub fn engine_command(action: EditorAction) -> EngineCommand {
    match action {
        EditorAction::ToggleBold => EngineCommand::ToggleBold,
        EditorAction::ToggleItalic => EngineCommand::ToggleItalic,
        EditorAction::ToggleStrike => EngineCommand::ToggleStrike,
        EditorAction::ToggleListItem => EngineCommand::ToggleBulletList,
        EditorAction::SinkListItem => EngineCommand::SinkListItem,
        EditorAction::LiftListItem => EngineCommand::LiftListItem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkbridge_editor::{Position, StarterEditor};

    #[test]
    fn test_empty_document_state() {
        let state = derive_state(&StarterEditor::new());
        assert_eq!(state.html, "<p></p>");
        assert!(state.can_bold && state.can_italic && state.can_strike);
        assert!(!state.can_sink_list_item);
        assert!(!state.can_lift_list_item);
        assert!(!state.is_bold_active);
        assert!(!state.is_bullet_list_active);
    }

    #[test]
    fn test_state_tracks_selection() {
        let mut editor = StarterEditor::with_content("<ul><li>a</li><li><s>b</s></li></ul>");
        editor.set_cursor(Position::new(1, 1));

        let state = derive_state(&editor);
        assert!(state.is_bullet_list_active);
        assert!(state.is_strike_active);
        assert!(state.can_sink_list_item);
        assert!(state.can_lift_list_item);
    }

    #[test]
    fn test_every_action_has_a_command() {
        let commands: Vec<_> = EditorAction::ALL.iter().map(|a| engine_command(*a)).collect();
        assert_eq!(commands.len(), 6);
        assert_eq!(engine_command(EditorAction::ToggleListItem), EngineCommand::ToggleBulletList);
    }
}
