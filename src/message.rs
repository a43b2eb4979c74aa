//! Gallery message types.
//!
//! Every widget callback maps into a [`Message`]; the gallery logs, records
//! and applies them after each gesture.

use ccl_ui::{ExpandState, NodePath, ProgressSnapshot};
use serde::{Deserialize, Serialize};

/// Identifies one widget instance in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetId {
    Listbox,
    Combobox,
    Grid,
    Treeview,
    Button,
    Checkbox,
    RadioGroup,
    ProgressBar,
    Label,
    Image,
    IconLabelButton,
}

impl WidgetId {
    /// All widgets in render order.
    pub fn all() -> &'static [WidgetId] {
        &[
            WidgetId::Listbox,
            WidgetId::Combobox,
            WidgetId::Grid,
            WidgetId::Treeview,
            WidgetId::Button,
            WidgetId::Checkbox,
            WidgetId::RadioGroup,
            WidgetId::ProgressBar,
            WidgetId::Label,
            WidgetId::Image,
            WidgetId::IconLabelButton,
        ]
    }

    /// Script and snapshot file name.
    pub fn name(&self) -> &'static str {
        match self {
            WidgetId::Listbox => "listbox",
            WidgetId::Combobox => "combobox",
            WidgetId::Grid => "grid",
            WidgetId::Treeview => "treeview",
            WidgetId::Button => "button",
            WidgetId::Checkbox => "checkbox",
            WidgetId::RadioGroup => "radio_group",
            WidgetId::ProgressBar => "progress_bar",
            WidgetId::Label => "label",
            WidgetId::Image => "image",
            WidgetId::IconLabelButton => "icon_label_button",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|id| id.name() == name)
    }
}

/// Messages emitted by the gallery's widgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Message {
    // Listbox
    /// A listbox row was tapped
    ListboxSelected(usize),

    // Combobox
    /// A combobox list row was tapped
    ComboboxSelectionChanged(usize),
    /// The combobox list opened (true) or closed (false)
    ComboboxToggled(bool),

    // Grid
    GridCellTapped { row: usize, col: usize },
    GridHeaderTapped(usize),

    // Treeview
    /// A node label was tapped
    TreeNodeActivated(NodePath),
    /// A node's expand/collapse button was tapped
    TreeNodeToggled { path: NodePath, state: ExpandState },

    // Simple controls
    ButtonTapped,
    CheckboxToggled(bool),
    RadioSelectionChanged(usize),
    ProgressTapped(ProgressSnapshot),
    /// Indices of the image tap areas containing the tap point
    ImageAreasTapped(Vec<usize>),
    IconButtonTapped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_names_roundtrip() {
        for id in WidgetId::all() {
            assert_eq!(WidgetId::from_name(id.name()), Some(*id));
        }
        assert_eq!(WidgetId::from_name("slider"), None);
    }

    #[test]
    fn test_widget_id_serde_matches_name() {
        for id in WidgetId::all() {
            let json = serde_json::to_string(id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.name()));
        }
    }

    #[test]
    fn test_message_serializes() {
        let json = serde_json::to_string(&Message::TreeNodeToggled {
            path: vec![0, 2],
            state: ExpandState::Expanded,
        })
        .unwrap();
        assert_eq!(json, r#"{"TreeNodeToggled":{"path":[0,2],"state":"expanded"}}"#);
    }
}
