//! Centralized constants for ccl_ui
//!
//! Default geometry and colors for every widget live here so the widget
//! config `Default` impls stay in one place.

use ccl_canvas::Color;

// =============================================================================
// Typography
// =============================================================================

pub use ccl_canvas::DEFAULT_FONT_SIZE;

/// Left padding for text drawn inside rows and cells
pub const TEXT_PADDING: f32 = 5.0;

// =============================================================================
// Frames
// =============================================================================

/// Stroke width of widget frames
pub const FRAME_WIDTH: f32 = 1.0;

/// Corner radius used by labels, comboboxes and progress bars
pub const CORNER_RADIUS: f32 = 5.0;

pub const FRAME_COLOR: Color = Color::BLACK;
pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::BLACK;
pub const SELECTION_COLOR: Color = Color::CORNFLOWER_BLUE;

// =============================================================================
// Listbox / Combobox
// =============================================================================

/// Row height shared by listbox and combobox lists
pub const ROW_HEIGHT: f32 = 25.0;

pub const COMBOBOX_BUTTON_WIDTH: f32 = 25.0;
pub const COMBOBOX_BUTTON_HEIGHT: f32 = 25.0;
pub const COMBOBOX_LIST_HEIGHT: f32 = 200.0;

// =============================================================================
// Grid
// =============================================================================

pub const GRID_COLUMN_WIDTH: f32 = 100.0;
pub const GRID_DATA_ROW_HEIGHT: f32 = 25.0;
pub const GRID_HEADER_ROW_HEIGHT: f32 = 50.0;
pub const GRID_HEADER_COLOR: Color = Color::LIGHT_GRAY;
pub const GRID_LINE_COLOR: Color = Color::GRAY;

// =============================================================================
// Treeview
// =============================================================================

pub const TREE_PER_LEVEL_INDENT: f32 = 15.0;
pub const TREE_BUTTON_LABEL_SPACING: f32 = 20.0;
pub const TREE_NODE_HEIGHT: f32 = 35.0;
pub const TREE_BUTTON_SIZE: f32 = 20.0;

// =============================================================================
// Buttons
// =============================================================================

pub const BUTTON_COLOR: Color = Color::GREEN;
pub const BUTTON_TAPPED_COLOR: Color = Color::RED;
pub const BUTTON_TEXT_COLOR: Color = Color::WHITE;

/// Glyph drawn in a checked checkbox
pub const CHECK_MARK: &str = "✓";

// =============================================================================
// Radio group
// =============================================================================

pub const RADIO_RADIUS: f32 = 7.0;
pub const RADIO_LABEL_SPACING: f32 = 20.0;
pub const RADIO_BUTTON_SPACING: f32 = 30.0;

// =============================================================================
// Progress bar
// =============================================================================

pub const PROGRESS_MIN: f64 = 0.0;
pub const PROGRESS_MAX: f64 = 100.0;
pub const PROGRESS_BACKGROUND_COLOR: Color = Color::GRAY;
pub const PROGRESS_FILL_COLOR: Color = Color::GREEN;

// =============================================================================
// Icon label button
// =============================================================================

pub const ICON_SIZE: f32 = 25.0;
pub const ICON_LEFT_SPACING: f32 = 20.0;
pub const ICON_LABEL_SPACING: f32 = 10.0;
