//! Listbox widget
//!
//! A vertically scrolling list of labels with single selection.

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, Rect, Size, VAlign};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    BACKGROUND_COLOR, DEFAULT_FONT_SIZE, FRAME_COLOR, FRAME_WIDTH, ROW_HEIGHT, SELECTION_COLOR, TEXT_COLOR,
    TEXT_PADDING,
};
use crate::engine::{paint_list, ScrollBound, ScrollLimits, Strip, Viewport};
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Configuration for the listbox widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListboxConfig {
    /// Height of each row (pixels)
    pub row_height: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub background_color: Color,
    pub frame_color: Color,
    /// Background of the selected row
    pub selection_color: Color,
}

impl Default for ListboxConfig {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            text_color: TEXT_COLOR,
            background_color: BACKGROUND_COLOR,
            frame_color: FRAME_COLOR,
            selection_color: SELECTION_COLOR,
        }
    }
}

/// A scrollable, selectable list of labels
pub struct Listbox<M> {
    labels: Vec<String>,
    config: ListboxConfig,
    size: Size,
    viewport: Viewport,
    selected: Option<usize>,
    on_select: Callback<usize, M>,
}

impl<M> Listbox<M> {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            config: ListboxConfig::default(),
            size: Size::new(200.0, 100.0),
            viewport: Viewport::new(),
            selected: None,
            on_select: Callback::none(),
        }
    }

    callback_setter!(on_select, usize);
    builder_field!(config, ListboxConfig);
    builder_field!(row_height, config.row_height, f32);
    builder_field!(font_size, config.font_size, f32);

    /// Set the initial size
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.resize(Size::new(width, height));
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replace the content. Selection is dropped if it no longer fits.
    pub fn set_labels<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.labels = labels.into_iter().map(Into::into).collect();
        if self.selected.is_some_and(|i| i >= self.labels.len()) {
            self.selected = None;
        }
        self.reclamp();
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Programmatic selection; out of range indices clear it.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.labels.len());
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.labels.get(i)).map(String::as_str)
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.offset_y
    }

    pub fn reset_scroll(&mut self) {
        self.viewport = self.viewport.reset().viewport;
    }

    /// The last row may scroll up to the top edge.
    pub fn max_offset(&self) -> f64 {
        ScrollBound::LastItemAtOrigin {
            count: self.labels.len(),
            extent: self.config.row_height,
        }
        .max_offset()
    }

    fn limits(&self) -> ScrollLimits {
        ScrollLimits::vertical(self.max_offset())
    }

    fn reclamp(&mut self) {
        self.viewport = self.viewport.reclamp(self.limits()).viewport;
    }

    fn strip(&self) -> Strip {
        Strip::new(
            Rect::from_size(self.size),
            self.config.row_height,
            self.viewport.offset_y,
            self.labels.len(),
        )
    }
}

/// Create a listbox over the given labels
pub fn listbox<M, S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Listbox<M> {
    Listbox::new(labels)
}

impl<M> Paintable for Listbox<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
        self.reclamp();
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let bounds = self.bounds();
        let config = &self.config;
        let font = FontSpec::new(config.font_size).with_color(config.text_color);
        let labels = &self.labels;
        let selected = self.selected;

        paint_list(
            canvas,
            &self.strip(),
            |canvas| {
                canvas.fill_rect(bounds, config.background_color);
                canvas.stroke_rect(bounds, config.frame_color, FRAME_WIDTH);
            },
            |canvas, index, slot| {
                if selected == Some(index) {
                    canvas.fill_rect(slot, config.selection_color);
                }
                let text_rect = Rect::new(slot.x + TEXT_PADDING, slot.y, slot.width - TEXT_PADDING, slot.height);
                canvas.draw_string(&labels[index], text_rect, HAlign::Left, VAlign::Center, &font);
            },
        );
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for Listbox<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } => {
                let Some(index) = self.strip().locate(position) else {
                    return EventResult::None;
                };
                self.selected = Some(index);
                log::debug!("Listbox: selected index {} ('{}')", index, self.labels[index]);
                EventResult::from_parts(true, self.on_select.call(index))
            }
            Gesture::Pan {
                phase,
                total_x,
                total_y,
            } => {
                let update = self.viewport.apply_pan(phase, total_x, total_y, self.limits());
                self.viewport = update.viewport;
                EventResult::from_parts(update.repaint, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PanPhase;
    use ccl_canvas::RecordingCanvas;

    fn fruits() -> Listbox<usize> {
        Listbox::new((0..10).map(|i| format!("item {}", i)))
            .with_size(200.0, 100.0)
            .on_select(|i| i)
    }

    #[test]
    fn test_tap_selects_row() {
        let mut lb = fruits();
        let result = lb.on_gesture(&Gesture::tap(10.0, 60.0));
        assert_eq!(result, EventResult::RedrawWithMessage(2));
        assert_eq!(lb.selected(), Some(2));
        assert_eq!(lb.selected_label(), Some("item 2"));
    }

    #[test]
    fn test_pan_then_tap() {
        let mut lb = fruits();
        let result = lb.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 40.0));
        assert!(result.needs_redraw());
        assert_eq!(lb.scroll_offset(), 40.0);

        assert_eq!(lb.on_gesture(&Gesture::tap(10.0, 60.0)).into_message(), Some(4));
    }

    #[test]
    fn test_pan_clamps_to_last_row() {
        let mut lb = fruits();
        let _ = lb.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 10_000.0));
        assert_eq!(lb.scroll_offset(), 225.0);
        let _ = lb.on_gesture(&Gesture::pan(PanPhase::Completed, 0.0, 0.0));
        let _ = lb.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, -10_000.0));
        assert_eq!(lb.scroll_offset(), 0.0);
    }

    #[test]
    fn test_tap_below_last_row_saturates() {
        let mut lb: Listbox<usize> = Listbox::new(["a", "b"]).with_size(200.0, 100.0);
        assert_eq!(lb.on_gesture(&Gesture::tap(10.0, 90.0)), EventResult::Redraw);
        assert_eq!(lb.selected(), Some(1));
    }

    #[test]
    fn test_tap_outside_bounds_ignored() {
        let mut lb = fruits();
        assert_eq!(lb.on_gesture(&Gesture::tap(250.0, 10.0)), EventResult::None);
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn test_empty_listbox_is_safe() {
        let mut lb: Listbox<usize> = Listbox::new(Vec::<String>::new());
        assert_eq!(lb.on_gesture(&Gesture::tap(10.0, 10.0)), EventResult::None);

        let mut canvas = RecordingCanvas::new();
        let _ = lb.paint(&mut canvas);
        assert!(canvas.texts().is_empty());
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_paint_draws_only_visible_rows() {
        let mut lb = fruits();
        let _ = lb.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 40.0));
        let mut canvas = RecordingCanvas::new();
        let _ = lb.paint(&mut canvas);
        assert_eq!(canvas.texts(), vec!["item 1", "item 2", "item 3", "item 4", "item 5"]);
        // Row 4 is painted where the tap at y=60 landed
        let rect = canvas.text_rect("item 4").unwrap();
        assert!(rect.y <= 60.0 && 60.0 < rect.y + 25.0);
    }

    #[test]
    fn test_set_labels_reclamps_and_drops_selection() {
        let mut lb = fruits();
        let _ = lb.on_gesture(&Gesture::pan(PanPhase::Running, 0.0, 200.0));
        let _ = lb.on_gesture(&Gesture::tap(10.0, 90.0));
        lb.set_labels(["only"]);
        assert_eq!(lb.scroll_offset(), 0.0);
        assert_eq!(lb.selected(), None);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ListboxConfig = serde_json::from_str(r#"{"row_height": 30.0}"#).unwrap();
        assert_eq!(config.row_height, 30.0);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }
}
