//! Progress bar widget

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, ImageData, Rect, Size, VAlign};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    CORNER_RADIUS, DEFAULT_FONT_SIZE, PROGRESS_BACKGROUND_COLOR, PROGRESS_FILL_COLOR, PROGRESS_MAX, PROGRESS_MIN,
    TEXT_COLOR,
};
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

use super::radio_group::Arrangement;

/// Configuration for the progress bar widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarConfig {
    /// Horizontal bars fill left to right, vertical ones bottom to top
    pub arrangement: Arrangement,
    pub before_label: String,
    pub after_label: String,
    pub corner_radius: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub background_color: Color,
    pub fill_color: Color,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            arrangement: Arrangement::Horizontal,
            before_label: String::new(),
            after_label: "%".to_string(),
            corner_radius: CORNER_RADIUS,
            font_size: DEFAULT_FONT_SIZE,
            text_color: TEXT_COLOR,
            background_color: PROGRESS_BACKGROUND_COLOR,
            fill_color: PROGRESS_FILL_COLOR,
        }
    }
}

/// Image used for the filled part instead of a solid color.
#[derive(Debug, Clone)]
pub struct FillImage {
    pub image: ImageData,
    /// Draw the image across the whole bar and reveal only the filled part.
    /// Otherwise the image is squeezed into the filled part.
    pub clip: bool,
}

/// The range and value a progress bar reported when tapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

/// Filled length of a bar of `extent` pixels: `value * extent / (max - min)`,
/// clamped to `[0, extent]`.
///
/// The value is scaled by the width of the range without subtracting `min`,
/// so a bar over `50..150` is full at `100`. Nothing fills while
/// `value <= min` or when the range is empty.
pub fn fill_length(min: f64, max: f64, value: f64, extent: f32) -> f32 {
    let range = max - min;
    if !(range > 0.0) || !(value > min) {
        return 0.0;
    }
    let length = value * f64::from(extent) / range;
    if length.is_nan() {
        return 0.0;
    }
    (length as f32).clamp(0.0, extent.max(0.0))
}

/// A bar showing a value between a minimum and maximum
pub struct ProgressBar<M> {
    min: f64,
    max: f64,
    value: f64,
    config: ProgressBarConfig,
    fill_image: Option<FillImage>,
    size: Size,
    on_tap: Callback<ProgressSnapshot, M>,
}

impl<M> ProgressBar<M> {
    pub fn new(value: f64) -> Self {
        Self {
            min: PROGRESS_MIN,
            max: PROGRESS_MAX,
            value,
            config: ProgressBarConfig::default(),
            fill_image: None,
            size: Size::new(200.0, 30.0),
            on_tap: Callback::none(),
        }
    }

    callback_setter!(on_tap, ProgressSnapshot);
    builder_field!(config, ProgressBarConfig);
    builder_field!(arrangement, config.arrangement, Arrangement);

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn fill_image(mut self, image: ImageData, clip: bool) -> Self {
        self.fill_image = Some(FillImage { image, clip });
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            min: self.min,
            max: self.max,
            value: self.value,
        }
    }

    /// Text drawn over the bar
    pub fn label(&self) -> String {
        format!("{}{}{}", self.config.before_label, self.value, self.config.after_label)
    }

    /// Filled part of the bar
    pub fn fill_rect(&self) -> Rect {
        let Size { width, height } = self.size;
        match self.config.arrangement {
            Arrangement::Horizontal => {
                let length = fill_length(self.min, self.max, self.value, width);
                Rect::new(0.0, 0.0, length, height)
            }
            Arrangement::Vertical => {
                let length = fill_length(self.min, self.max, self.value, height);
                Rect::new(0.0, height - length, width, length)
            }
        }
    }
}

impl<M> Paintable for ProgressBar<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let bounds = self.bounds();
        let config = &self.config;
        canvas.fill_rounded_rect(bounds, config.corner_radius, config.background_color);

        let fill = self.fill_rect();
        if !fill.is_empty() {
            match &self.fill_image {
                None => canvas.fill_rounded_rect(fill, config.corner_radius, config.fill_color),
                Some(FillImage { image, clip: true }) => {
                    canvas.save_state();
                    canvas.clip_rect(fill);
                    canvas.draw_image(image, bounds);
                    canvas.restore_state();
                }
                Some(FillImage { image, clip: false }) => canvas.draw_image(image, fill),
            }
        }

        let font = FontSpec::new(config.font_size).with_color(config.text_color);
        canvas.draw_string(&self.label(), bounds, HAlign::Center, VAlign::Center, &font);
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for ProgressBar<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        match *gesture {
            Gesture::Tap { position } if self.bounds().contains(position) => {
                log::debug!("ProgressBar: tapped at value {}", self.value);
                EventResult::from_parts(true, self.on_tap.call(self.snapshot()))
            }
            _ => EventResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccl_canvas::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_fill_length() {
        assert_eq!(fill_length(0.0, 100.0, 25.0, 200.0), 50.0);
        assert_eq!(fill_length(0.0, 100.0, 100.0, 200.0), 200.0);
        assert_eq!(fill_length(0.0, 100.0, 150.0, 200.0), 200.0);
        assert_eq!(fill_length(0.0, 100.0, -5.0, 200.0), 0.0);
        assert_eq!(fill_length(10.0, 10.0, 10.0, 200.0), 0.0);
        assert_eq!(fill_length(0.0, 100.0, f64::NAN, 200.0), 0.0);
    }

    #[test]
    fn test_fill_scales_value_by_range_width() {
        // Not offset by min: 60 * 200 / 100
        assert_eq!(fill_length(50.0, 150.0, 60.0, 200.0), 120.0);
        assert_eq!(fill_length(50.0, 150.0, 100.0, 200.0), 200.0);
        // At or below min nothing is drawn, even though value * extent > 0
        assert_eq!(fill_length(50.0, 150.0, 50.0, 200.0), 0.0);
        assert_eq!(fill_length(50.0, 150.0, 20.0, 200.0), 0.0);

        let bar: ProgressBar<()> = ProgressBar::new(100.0).range(50.0, 150.0).with_size(200.0, 30.0);
        assert_eq!(bar.fill_rect(), Rect::new(0.0, 0.0, 200.0, 30.0));
    }

    #[test]
    fn test_label_format() {
        let bar: ProgressBar<()> = ProgressBar::new(42.0);
        assert_eq!(bar.label(), "42%");
        let bar: ProgressBar<()> = ProgressBar::new(2.5).config(ProgressBarConfig {
            before_label: "v=".to_string(),
            after_label: String::new(),
            ..Default::default()
        });
        assert_eq!(bar.label(), "v=2.5");
    }

    #[test]
    fn test_vertical_fills_from_bottom() {
        let bar: ProgressBar<()> = ProgressBar::new(25.0)
            .arrangement(Arrangement::Vertical)
            .with_size(30.0, 200.0);
        assert_eq!(bar.fill_rect(), Rect::new(0.0, 150.0, 30.0, 50.0));
    }

    #[test]
    fn test_zero_value_draws_no_fill() {
        let mut bar: ProgressBar<()> = ProgressBar::new(0.0);
        let mut canvas = RecordingCanvas::new();
        let _ = bar.paint(&mut canvas);
        let fills = canvas
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillRoundedRect { .. }))
            .count();
        assert_eq!(fills, 1);
        assert_eq!(canvas.texts(), vec!["0%"]);
    }

    #[test]
    fn test_clipped_fill_image() {
        let image = ImageData::solid(4, 4, Color::BLUE).unwrap();
        let mut bar: ProgressBar<()> = ProgressBar::new(50.0).fill_image(image, true);
        let mut canvas = RecordingCanvas::new();
        let _ = bar.paint(&mut canvas);
        assert!(canvas
            .commands()
            .contains(&DrawCommand::ClipRect(Rect::new(0.0, 0.0, 100.0, 30.0))));
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn test_tap_reports_range_and_value() {
        let mut bar = ProgressBar::new(30.0).range(10.0, 50.0).on_tap(|snapshot| snapshot);
        let result = bar.on_gesture(&Gesture::tap(5.0, 5.0));
        assert_eq!(
            result.into_message(),
            Some(ProgressSnapshot {
                min: 10.0,
                max: 50.0,
                value: 30.0
            })
        );
        assert_eq!(bar.on_gesture(&Gesture::tap(500.0, 5.0)), EventResult::None);
    }
}
