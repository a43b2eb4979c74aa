//! ccl_ui - custom-drawn touch widgets over a pluggable canvas
//!
//! Widgets paint themselves from scratch onto a [`ccl_canvas::Canvas`] and
//! turn tap and pan [`Gesture`]s into [`EventResult`]s carrying host
//! messages. The list-like widgets (listbox, combobox, grid, treeview) share
//! the virtualized scrolling [`engine`].

#[macro_use]
mod macros;

mod callback;
pub mod constants;
pub mod engine;
mod event;
mod state;
mod widget;
mod widgets;

pub use callback::{Callback, Callback0};
pub use event::{Gesture, PanPhase};
pub use state::{ExpandState, PanGesture, TapFlash};
pub use widget::{EventResult, HitTestable, PaintOutcome, Paintable, Widget};

pub use widgets::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{Gesture, PanPhase};
    pub use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable, Widget};
    pub use crate::widgets::{button, label, listbox};
    pub use crate::{Callback, ExpandState};
    pub use ccl_canvas::{Canvas, Color, ImageData, Point, Rect, Size};
}
