//! Formatting snapshot reported by the embedded editor.

use serde::{Deserialize, Serialize};

/// Snapshot of the editor's content and toolbar affordances.
///
/// Produced fresh on every engine event. Receivers replace their copy
/// wholesale and never patch individual fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Canonical HTML of the whole document.
    pub html: String,

    pub can_bold: bool,
    pub can_italic: bool,
    pub can_strike: bool,
    pub can_sink_list_item: bool,
    pub can_lift_list_item: bool,

    pub is_bullet_list_active: bool,
    pub is_bold_active: bool,
    pub is_italic_active: bool,
    pub is_strike_active: bool,
}
