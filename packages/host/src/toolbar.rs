//! Toolbar derived from the last reported state. Nothing here is stored.

use inkbridge_protocol::{EditorAction, EditorState};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolbarControl {
    Bold,
    Italic,
    Strike,
    ToggleList,
    SinkListItem,
    LiftListItem,
}

impl ToolbarControl {
    /// Display order.
    pub const ALL: [ToolbarControl; 6] = [
        ToolbarControl::Bold,
        ToolbarControl::Italic,
        ToolbarControl::Strike,
        ToolbarControl::ToggleList,
        ToolbarControl::SinkListItem,
        ToolbarControl::LiftListItem,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToolbarControl::Bold => "Bold",
            ToolbarControl::Italic => "Italic",
            ToolbarControl::Strike => "Strike",
            ToolbarControl::ToggleList => "Toggle List",
            ToolbarControl::SinkListItem => "Sink List item",
            ToolbarControl::LiftListItem => "Lift List item",
        }
    }

    pub fn action(&self) -> EditorAction {
        match self {
            ToolbarControl::Bold => EditorAction::ToggleBold,
            ToolbarControl::Italic => EditorAction::ToggleItalic,
            ToolbarControl::Strike => EditorAction::ToggleStrike,
            ToolbarControl::ToggleList => EditorAction::ToggleListItem,
            ToolbarControl::SinkListItem => EditorAction::SinkListItem,
            ToolbarControl::LiftListItem => EditorAction::LiftListItem,
        }
    }

    /// Looks a control up by label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|control| control.label().eq_ignore_ascii_case(label))
    }

    pub fn is_active(&self, state: &EditorState) -> bool {
        match self {
            ToolbarControl::Bold => state.is_bold_active,
            ToolbarControl::Italic => state.is_italic_active,
            ToolbarControl::Strike => state.is_strike_active,
            ToolbarControl::ToggleList => state.is_bullet_list_active,
            ToolbarControl::SinkListItem | ToolbarControl::LiftListItem => false,
        }
    }

    /// Mark toggles are never disabled, only shown active or inactive.
    pub fn is_disabled(&self, state: &EditorState) -> bool {
        match self {
            ToolbarControl::Bold | ToolbarControl::Italic | ToolbarControl::Strike => false,
            ToolbarControl::ToggleList => false,
            ToolbarControl::SinkListItem => !state.can_sink_list_item,
            ToolbarControl::LiftListItem => !state.can_lift_list_item,
        }
    }
}

impl fmt::Display for ToolbarControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolbarItem {
    pub control: ToolbarControl,
    pub label: &'static str,
    pub active: bool,
    pub disabled: bool,
}

pub fn toolbar(state: &EditorState) -> Vec<ToolbarItem> {
    ToolbarControl::ALL
        .into_iter()
        .map(|control| ToolbarItem {
            control,
            label: control.label(),
            active: control.is_active(state),
            disabled: control.is_disabled(state),
        })
        .collect()
}
