//! Icon + label button widget

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, ImageData, Rect, Size, VAlign};

use crate::callback::Callback0;
use crate::constants::{
    BUTTON_COLOR, BUTTON_TAPPED_COLOR, BUTTON_TEXT_COLOR, CORNER_RADIUS, DEFAULT_FONT_SIZE, ICON_LABEL_SPACING,
    ICON_LEFT_SPACING, ICON_SIZE, ROW_HEIGHT,
};
use crate::event::Gesture;
use crate::state::TapFlash;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// A button showing an icon followed by a label.
///
/// Layout, left to right: `icon_left_spacing`, the icon, `label_spacing`,
/// then the label box. Both are centered vertically.
pub struct IconLabelButton<M> {
    icon: Option<ImageData>,
    label: String,
    size: Size,
    icon_size: Size,
    label_size: Size,
    icon_left_spacing: f32,
    label_spacing: f32,
    font_size: f32,
    color: Color,
    tapped_color: Color,
    text_color: Color,
    flash: TapFlash,
    on_tap: Callback0<M>,
}

impl<M> IconLabelButton<M> {
    pub fn new(icon: Option<ImageData>, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            size: Size::new(180.0, 40.0),
            icon_size: Size::new(ICON_SIZE, ICON_SIZE),
            label_size: Size::new(100.0, ROW_HEIGHT),
            icon_left_spacing: ICON_LEFT_SPACING,
            label_spacing: ICON_LABEL_SPACING,
            font_size: DEFAULT_FONT_SIZE,
            color: BUTTON_COLOR,
            tapped_color: BUTTON_TAPPED_COLOR,
            text_color: BUTTON_TEXT_COLOR,
            flash: TapFlash::Idle,
            on_tap: Callback0::none(),
        }
    }

    callback_setter!(on_tap);
    builder_field!(icon_size, Size);
    builder_field!(label_size, Size);
    builder_field!(icon_left_spacing, f32);
    builder_field!(label_spacing, f32);
    builder_field!(font_size, f32);
    builder_field!(color, Color);
    builder_field!(tapped_color, Color);
    builder_field!(text_color, Color);

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn icon_rect(&self) -> Rect {
        Rect::new(
            self.icon_left_spacing,
            (self.size.height - self.icon_size.height) / 2.0,
            self.icon_size.width,
            self.icon_size.height,
        )
    }

    pub fn label_rect(&self) -> Rect {
        Rect::new(
            self.icon_left_spacing + self.icon_size.width + self.label_spacing,
            (self.size.height - self.label_size.height) / 2.0,
            self.label_size.width,
            self.label_size.height,
        )
    }
}

impl<M> Paintable for IconLabelButton<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let pressed = self.flash.take();
        let fill = if pressed { self.tapped_color } else { self.color };
        canvas.fill_rounded_rect(self.bounds(), CORNER_RADIUS, fill);

        if let Some(icon) = &self.icon {
            canvas.draw_image(icon, self.icon_rect());
        }
        if !self.label.is_empty() {
            let font = FontSpec::new(self.font_size).with_color(self.text_color);
            canvas.draw_string(&self.label, self.label_rect(), HAlign::Left, VAlign::Center, &font);
        }

        if pressed {
            PaintOutcome::Invalidate
        } else {
            PaintOutcome::Settled
        }
    }
}

impl<M> HitTestable<M> for IconLabelButton<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } if self.bounds().contains(position) => {
                self.flash.press();
                log::debug!("IconLabelButton '{}' tapped", self.label);
                EventResult::from_parts(true, self.on_tap.emit())
            }
            _ => EventResult::None,
        }
    }
}
