use serde::{Deserialize, Serialize};
use std::fmt;

/// Formatting operations the host can ask the editor to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EditorAction {
    ToggleBold,
    ToggleItalic,
    ToggleStrike,
    /// Toggles a bullet list around the selection.
    ToggleListItem,
    SinkListItem,
    LiftListItem,
}

impl EditorAction {
    pub const ALL: [EditorAction; 6] = [
        EditorAction::ToggleBold,
        EditorAction::ToggleItalic,
        EditorAction::ToggleStrike,
        EditorAction::ToggleListItem,
        EditorAction::SinkListItem,
        EditorAction::LiftListItem,
    ];

    /// Wire name, as it appears in the `payload` of an `action` message.
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorAction::ToggleBold => "toggleBold",
            EditorAction::ToggleItalic => "toggleItalic",
            EditorAction::ToggleStrike => "toggleStrike",
            EditorAction::ToggleListItem => "toggleListItem",
            EditorAction::SinkListItem => "sinkListItem",
            EditorAction::LiftListItem => "liftListItem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

impl fmt::Display for EditorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an `editor` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusMode {
    Focus,
    Blur,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_names_match_serde() {
        for action in EditorAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
            assert_eq!(EditorAction::from_name(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_unknown_action_name() {
        assert_eq!(EditorAction::from_name("toggleUnderline"), None);
        assert!(serde_json::from_str::<EditorAction>("\"toggleUnderline\"").is_err());
    }

    #[test]
    fn test_focus_mode_serialization() {
        assert_eq!(serde_json::to_string(&FocusMode::Focus).unwrap(), "\"focus\"");
        assert_eq!(serde_json::to_string(&FocusMode::Blur).unwrap(), "\"blur\"");
    }
}
