//! Checkbox widget

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, ImageData, Rect, Size, VAlign};

use crate::callback::Callback;
use crate::constants::{BUTTON_COLOR, BUTTON_TEXT_COLOR, CHECK_MARK, CORNER_RADIUS, DEFAULT_FONT_SIZE};
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// One image per state, drawn instead of the box and mark.
#[derive(Debug, Clone)]
pub struct CheckboxImages {
    pub checked: ImageData,
    pub unchecked: ImageData,
    /// Fill the bounds. Otherwise the image keeps its natural size at the
    /// top-left corner.
    pub stretch: bool,
}

/// A square toggle drawing a check mark while checked
pub struct Checkbox<M> {
    is_checked: bool,
    size: Size,
    font_size: f32,
    color: Color,
    mark_color: Color,
    mark: String,
    corner_radius: f32,
    images: Option<CheckboxImages>,
    on_toggle: Callback<bool, M>,
}

impl<M> Checkbox<M> {
    pub fn new(is_checked: bool) -> Self {
        Self {
            is_checked,
            size: Size::new(30.0, 30.0),
            font_size: DEFAULT_FONT_SIZE,
            color: BUTTON_COLOR,
            mark_color: BUTTON_TEXT_COLOR,
            mark: CHECK_MARK.to_string(),
            corner_radius: CORNER_RADIUS,
            images: None,
            on_toggle: Callback::none(),
        }
    }

    callback_setter!(on_toggle, bool);
    builder_field!(font_size, f32);
    builder_field!(color, Color);
    builder_field!(mark_color, Color);
    builder_field!(corner_radius, f32);

    /// Replace the check mark glyph
    pub fn mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = mark.into();
        self
    }

    pub fn images(mut self, checked: ImageData, unchecked: ImageData, stretch: bool) -> Self {
        self.images = Some(CheckboxImages {
            checked,
            unchecked,
            stretch,
        });
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }
}

impl<M> Paintable for Checkbox<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let bounds = self.bounds();
        if let Some(images) = &self.images {
            let image = if self.is_checked { &images.checked } else { &images.unchecked };
            let rect = if images.stretch {
                bounds
            } else {
                Rect::new(bounds.x, bounds.y, image.width() as f32, image.height() as f32)
            };
            canvas.draw_image(image, rect);
            return PaintOutcome::Settled;
        }

        canvas.fill_rounded_rect(bounds, self.corner_radius, self.color);
        if self.is_checked {
            let font = FontSpec::new(self.font_size).with_color(self.mark_color);
            canvas.draw_string(&self.mark, bounds, HAlign::Center, VAlign::Center, &font);
        }
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for Checkbox<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } if self.bounds().contains(position) => {
                self.is_checked = !self.is_checked;
                log::debug!("Checkbox: checked = {}", self.is_checked);
                EventResult::from_parts(true, self.on_toggle.call(self.is_checked))
            }
            _ => EventResult::None,
        }
    }
}
