//! Label widget

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, Size, VAlign};

use crate::constants::{CORNER_RADIUS, DEFAULT_FONT_SIZE, TEXT_COLOR};
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Static text with an optional rounded background
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    size: Size,
    font: FontSpec,
    h_align: HAlign,
    v_align: VAlign,
    background: Option<Color>,
    corner_radius: f32,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Size::new(150.0, 30.0),
            font: FontSpec::new(DEFAULT_FONT_SIZE).with_color(TEXT_COLOR),
            h_align: HAlign::Left,
            v_align: VAlign::Center,
            background: None,
            corner_radius: CORNER_RADIUS,
        }
    }

    builder_field!(font, FontSpec);
    builder_field!(h_align, HAlign);
    builder_field!(v_align, VAlign);
    builder_field!(corner_radius, f32);

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Create a new label
pub fn label(text: impl Into<String>) -> Label {
    Label::new(text)
}

impl Paintable for Label {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let bounds = self.bounds();
        if let Some(background) = self.background {
            canvas.fill_rounded_rect(bounds, self.corner_radius, background);
        }
        if !self.text.is_empty() {
            canvas.draw_string(&self.text, bounds, self.h_align, self.v_align, &self.font);
        }
        PaintOutcome::Settled
    }
}

/// Labels never consume gestures.
impl<M> HitTestable<M> for Label {
    fn on_gesture(&mut self, _gesture: &Gesture) -> EventResult<M> {
        EventResult::None
    }
}
