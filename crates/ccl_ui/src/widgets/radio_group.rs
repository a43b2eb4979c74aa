//! Radio button group widget
//!
//! Each option is a label followed by a circle. Circle centers depend on
//! measured label widths, so they are laid out during paint and the tap
//! handler tests against the regions recorded by the last paint.

use ccl_canvas::{Canvas, Color, FontSpec, HAlign, Point, Rect, Size, VAlign};
use serde::{Deserialize, Serialize};

use crate::callback::Callback;
use crate::constants::{
    BUTTON_COLOR, CORNER_RADIUS, DEFAULT_FONT_SIZE, FRAME_WIDTH, GRID_LINE_COLOR, RADIO_BUTTON_SPACING,
    RADIO_LABEL_SPACING, RADIO_RADIUS, TEXT_COLOR,
};
use crate::engine::HitRegionTable;
use crate::event::Gesture;
use crate::widget::{EventResult, HitTestable, PaintOutcome, Paintable};

/// Direction in which options are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    #[default]
    Horizontal,
    Vertical,
}

/// Configuration for the radio group widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioGroupConfig {
    pub arrangement: Arrangement,
    pub radius: f32,
    /// Gap between a label and its circle
    pub label_spacing: f32,
    /// Gap between one circle and the next label (horizontal only)
    pub button_spacing: f32,
    pub font_size: f32,
    pub text_color: Color,
    pub selected_color: Color,
    pub border_color: Color,
    pub background_color: Option<Color>,
    pub corner_radius: f32,
}

impl Default for RadioGroupConfig {
    fn default() -> Self {
        Self {
            arrangement: Arrangement::Horizontal,
            radius: RADIO_RADIUS,
            label_spacing: RADIO_LABEL_SPACING,
            button_spacing: RADIO_BUTTON_SPACING,
            font_size: DEFAULT_FONT_SIZE,
            text_color: TEXT_COLOR,
            selected_color: BUTTON_COLOR,
            border_color: GRID_LINE_COLOR,
            background_color: None,
            corner_radius: CORNER_RADIUS,
        }
    }
}

/// A group of mutually exclusive options
pub struct RadioGroup<M> {
    labels: Vec<String>,
    config: RadioGroupConfig,
    size: Size,
    selected: Option<usize>,
    /// Bounding squares of the circles from the last paint
    regions: HitRegionTable<usize>,
    on_select: Callback<usize, M>,
}

impl<M> RadioGroup<M> {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            config: RadioGroupConfig::default(),
            size: Size::new(300.0, 40.0),
            selected: None,
            regions: HitRegionTable::new(),
            on_select: Callback::none(),
        }
    }

    callback_setter!(on_select, usize);
    builder_field!(config, RadioGroupConfig);
    builder_field!(arrangement, config.arrangement, Arrangement);

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.labels.len());
    }

    /// Circle centers recorded by the last paint.
    pub fn centers(&self) -> Vec<Point> {
        self.regions.iter().map(|region| region.rect.center()).collect()
    }
}

impl<M> Paintable for RadioGroup<M> {
    fn size(&self) -> Size {
        self.size
    }

    fn resize(&mut self, size: Size) {
        self.size = size;
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> PaintOutcome {
        let config = &self.config;
        let bounds = Rect::from_size(self.size);
        if let Some(background) = config.background_color {
            canvas.fill_rounded_rect(bounds, config.corner_radius, background);
        }
        canvas.stroke_rounded_rect(bounds, config.corner_radius, config.border_color, FRAME_WIDTH);

        let font = FontSpec::new(config.font_size).with_color(config.text_color);
        let horizontal = config.arrangement == Arrangement::Horizontal;
        let row_height = if self.labels.is_empty() {
            0.0
        } else {
            self.size.height / self.labels.len() as f32
        };

        let mut regions = HitRegionTable::new();
        let mut offset = 0.0;
        for (index, label) in self.labels.iter().enumerate() {
            let label_width = canvas.measure_string(label, &font).width;
            let label_rect = if horizontal {
                Rect::new(offset, 0.0, label_width + config.font_size, self.size.height)
            } else {
                Rect::new(0.0, offset, label_width + config.font_size, row_height)
            };
            canvas.draw_string(label, label_rect, HAlign::Left, VAlign::Center, &font);

            let center = if horizontal {
                Point::new(
                    offset + label_width + config.label_spacing + config.radius,
                    self.size.height / 2.0,
                )
            } else {
                Point::new(
                    label_width + config.label_spacing + config.radius,
                    offset + row_height / 2.0,
                )
            };
            canvas.stroke_circle(center, config.radius, config.border_color, FRAME_WIDTH);
            if self.selected == Some(index) {
                canvas.fill_circle(center, config.radius - 1.0, config.selected_color);
            }

            let diameter = 2.0 * config.radius;
            regions.push(
                Rect::new(center.x - config.radius, center.y - config.radius, diameter, diameter),
                index,
            );

            offset += if horizontal {
                label_width + config.label_spacing + diameter + config.button_spacing
            } else {
                row_height
            };
        }
        self.regions = regions;
        PaintOutcome::Settled
    }
}

impl<M> HitTestable<M> for RadioGroup<M> {
    fn on_gesture(&mut self, gesture: &Gesture) -> EventResult<M> {
        let Gesture::Tap { position } = *gesture else {
            return EventResult::None;
        };
        if !self.bounds().contains(position) {
            return EventResult::None;
        }
        let Some(index) = self.regions.hit(position).map(|region| region.tag) else {
            return EventResult::None;
        };
        self.selected = Some(index);
        log::debug!("RadioGroup: selected '{}'", self.labels[index]);
        EventResult::from_parts(true, self.on_select.call(index))
    }
}
