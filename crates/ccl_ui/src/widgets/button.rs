//! Button widget

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, ImageData, Rect, Size, VAlign};

use crate::callback::Callback0;
use crate::constants::{BUTTON_COLOR, BUTTON_TAPPED_COLOR, BUTTON_TEXT_COLOR, CORNER_RADIUS, DEFAULT_FONT_SIZE};
use crate::event::Gesture;
use crate::state::TapFlash;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Images drawn as the button background instead of the rounded fill.
#[derive(Debug, Clone)]
pub struct BackgroundImages {
    pub normal: ImageData,
    /// Shown for the flash frame
    pub pressed: ImageData,
    /// Draw at natural size, grown to at least the bounds, and cut off at
    /// the bounds. Otherwise the image is scaled to the bounds.
    pub clip: bool,
}

impl BackgroundImages {
    fn rect(&self, image: &ImageData, bounds: Rect) -> Rect {
        if self.clip {
            Rect::new(
                bounds.x,
                bounds.y,
                bounds.width.max(image.width() as f32),
                bounds.height.max(image.height() as f32),
            )
        } else {
            bounds
        }
    }
}

/// A tappable rounded button with a text label.
///
/// A tap paints the pressed color for exactly one frame.
pub struct Button<M> {
    label: String,
    size: Size,
    font_size: f32,
    color: Color,
    tapped_color: Color,
    text_color: Color,
    corner_radius: f32,
    background: Option<BackgroundImages>,
    flash: TapFlash,
    on_tap: Callback0<M>,
}

impl<M> Button<M> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            size: Size::new(120.0, 40.0),
            font_size: DEFAULT_FONT_SIZE,
            color: BUTTON_COLOR,
            tapped_color: BUTTON_TAPPED_COLOR,
            text_color: BUTTON_TEXT_COLOR,
            corner_radius: CORNER_RADIUS,
            background: None,
            flash: TapFlash::Idle,
            on_tap: Callback0::none(),
        }
    }

    callback_setter!(on_tap);
    builder_field!(font_size, f32);
    builder_field!(color, Color);
    builder_field!(tapped_color, Color);
    builder_field!(text_color, Color);
    builder_field!(corner_radius, f32);

    pub fn background_images(mut self, normal: ImageData, pressed: ImageData, clip: bool) -> Self {
        self.background = Some(BackgroundImages { normal, pressed, clip });
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Whether the next paint shows the pressed color
    pub fn is_pressed(&self) -> bool {
        self.flash.is_pressed()
    }
}

/// Create a new button with the given label
pub fn button<M>(label: impl Into<String>) -> Button<M> {
    Button::new(label)
}

impl<M> Paintable for Button<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let pressed = self.flash.take();
        let bounds = self.bounds();
        match &self.background {
            None => {
                let fill = if pressed { self.tapped_color } else { self.color };
                canvas.fill_rounded_rect(bounds, self.corner_radius, fill);
            }
            Some(background) => {
                let image = if pressed { &background.pressed } else { &background.normal };
                canvas.save_state();
                canvas.clip_rect(bounds);
                canvas.draw_image(image, background.rect(image, bounds));
                canvas.restore_state();
            }
        }

        if !self.label.is_empty() {
            let font = FontSpec::new(self.font_size).with_color(self.text_color);
            canvas.draw_string(&self.label, bounds, HAlign::Center, VAlign::Center, &font);
        }

        if pressed {
            PaintOutcome::Invalidate
        } else {
            PaintOutcome::Settled
        }
    }
}

impl<M> HitTestable<M> for Button<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } if self.bounds().contains(position) => {
                self.flash.press();
                log::debug!("Button '{}' tapped", self.label);
                EventResult::from_parts(true, self.on_tap.emit())
            }
            _ => EventResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PanPhase;
    use ccl_canvas::{DrawCommand, RecordingCanvas};

    fn fill_color(canvas: &RecordingCanvas) -> Option<Color> {
        canvas.commands().iter().find_map(|cmd| match cmd {
            DrawCommand::FillRoundedRect { color, .. } => Some(*color),
            _ => None,
        })
    }

    #[test]
    fn test_tap_emits_and_flashes_once() {
        let mut button = Button::new("OK").on_tap(|| "ok");
        assert_eq!(button.on_gesture(&Gesture::tap(10.0, 10.0)), EventResult::RedrawWithMessage("ok"));
        assert!(button.is_pressed());

        let mut first = RecordingCanvas::new();
        assert_eq!(button.paint(&mut first), PaintOutcome::Invalidate);
        assert_eq!(fill_color(&first), Some(BUTTON_TAPPED_COLOR));

        let mut second = RecordingCanvas::new();
        assert_eq!(button.paint(&mut second), PaintOutcome::Settled);
        assert_eq!(fill_color(&second), Some(BUTTON_COLOR));
        assert_eq!(second.texts(), vec!["OK"]);
    }

    #[test]
    fn test_tap_outside_is_ignored() {
        let mut button: Button<()> = Button::new("OK").with_size(50.0, 20.0);
        assert_eq!(button.on_gesture(&Gesture::tap(60.0, 10.0)), EventResult::None);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_pan_is_ignored() {
        let mut button: Button<()> = Button::new("OK");
        assert_eq!(button.on_gesture(&Gesture::pan(PanPhase::Running, 5.0, 5.0)), EventResult::None);
    }

    fn image_rects(canvas: &RecordingCanvas) -> Vec<(u32, Rect)> {
        canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawImage { width, rect, .. } => Some((*width, *rect)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_clipped_background_image_keeps_natural_size() {
        let normal = ImageData::solid(200, 20, Color::BLUE).unwrap();
        let pressed = ImageData::solid(150, 60, Color::RED).unwrap();
        let mut button = Button::new("OK").background_images(normal, pressed, true).on_tap(|| ());

        let mut canvas = RecordingCanvas::new();
        assert_eq!(button.paint(&mut canvas), PaintOutcome::Settled);
        let bounds = Rect::new(0.0, 0.0, 120.0, 40.0);
        assert_eq!(
            &canvas.commands()[..4],
            &[
                DrawCommand::SaveState,
                DrawCommand::ClipRect(bounds),
                DrawCommand::DrawImage {
                    width: 200,
                    height: 20,
                    rect: Rect::new(0.0, 0.0, 200.0, 40.0)
                },
                DrawCommand::RestoreState,
            ]
        );
        assert_eq!(fill_color(&canvas), None);
        assert_eq!(canvas.texts(), vec!["OK"]);

        let _ = button.on_gesture(&Gesture::tap(10.0, 10.0));
        let mut canvas = RecordingCanvas::new();
        assert_eq!(button.paint(&mut canvas), PaintOutcome::Invalidate);
        assert_eq!(image_rects(&canvas), vec![(150, Rect::new(0.0, 0.0, 150.0, 60.0))]);
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_scaled_background_image_fills_bounds() {
        let normal = ImageData::solid(8, 8, Color::BLUE).unwrap();
        let pressed = ImageData::solid(8, 8, Color::RED).unwrap();
        let mut button: Button<()> = Button::new("")
            .with_size(50.0, 20.0)
            .background_images(normal, pressed, false);
        let mut canvas = RecordingCanvas::new();
        let _ = button.paint(&mut canvas);
        assert_eq!(image_rects(&canvas), vec![(8, Rect::new(0.0, 0.0, 50.0, 20.0))]);
        assert!(canvas.commands().contains(&DrawCommand::ClipRect(Rect::new(0.0, 0.0, 50.0, 20.0))));
    }

    #[test]
    fn test_without_callback_still_redraws() {
        let mut button: Button<()> = Button::new("");
        assert_eq!(button.on_gesture(&Gesture::tap(1.0, 1.0)), EventResult::Redraw);
        let mut canvas = RecordingCanvas::new();
        let _ = button.paint(&mut canvas);
        assert!(canvas.texts().is_empty());
    }
}
