//! Scrollable virtualized list/grid engine.
//!
//! Shared by the listbox, combobox, grid and treeview:
//! - [`viewport`]: scroll offsets clamped to content bounds
//! - [`hit_test`]: pointer position to item index or tagged region
//! - [`visible_range`]: which items intersect the viewport
//! - [`paint`]: frame, clip bracketing and per-item draw callbacks

pub mod paint;
pub mod viewport;
pub mod visible_range;

pub use hit_test::{locate, locate_cell, HitRegion, HitRegionTable};
pub use paint::{paint_grid, paint_list, GridGeometry, GridHit, Strip};
pub use viewport::{clamp_offset, scroll, ScrollBound, ScrollLimits, Scrolled, Viewport, ViewportUpdate};
pub use visible_range::{visible_cells, visible_range, VisibleCells};
