//! A canvas that records draw commands instead of rasterizing them.
//!
//! Used for tests and for inspecting what a widget paints.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::font::{FontSpec, HAlign, VAlign};
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageData;
use crate::text_metrics::TextMetrics;

/// A single recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: f32,
    },
    FillRoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
    },
    StrokeRoundedRect {
        rect: Rect,
        radius: f32,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        color: Color,
        width: f32,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    DrawString {
        text: String,
        rect: Rect,
        h_align: HAlign,
        v_align: VAlign,
        font: FontSpec,
        /// Clip in force when the text was drawn
        clip: Option<Rect>,
    },
    DrawImage {
        width: u32,
        height: u32,
        rect: Rect,
    },
    SaveState,
    ClipRect(Rect),
    RestoreState,
}

/// Records every call; measures text with [`TextMetrics`].
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip: Option<Rect>,
    stack: Vec<Option<Rect>>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands. The clip stack is left untouched.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Current clip rectangle, if any.
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }

    /// Depth of the save/restore stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// All strings drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::DrawString { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The rectangle of the first string equal to `text`.
    pub fn text_rect(&self, text: &str) -> Option<Rect> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::DrawString { text: t, rect, .. } if t == text => Some(*rect),
            _ => None,
        })
    }

    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.push(DrawCommand::FillRoundedRect { rect, radius, color });
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.push(DrawCommand::StrokeRoundedRect {
            rect,
            radius,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.push(DrawCommand::Line { from, to, color, width });
    }

    fn draw_string(&mut self, text: &str, rect: Rect, h_align: HAlign, v_align: VAlign, font: &FontSpec) {
        let clip = self.clip;
        self.push(DrawCommand::DrawString {
            text: text.to_string(),
            rect,
            h_align,
            v_align,
            font: *font,
            clip,
        });
    }

    fn draw_image(&mut self, image: &ImageData, rect: Rect) {
        self.push(DrawCommand::DrawImage {
            width: image.width(),
            height: image.height(),
            rect,
        });
    }

    fn measure_string(&mut self, text: &str, font: &FontSpec) -> Size {
        TextMetrics::for_font(font).measure(text)
    }

    fn save_state(&mut self) {
        self.stack.push(self.clip);
        self.push(DrawCommand::SaveState);
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.clip = Some(match self.clip {
            Some(current) => current.intersect(&rect),
            None => rect,
        });
        self.push(DrawCommand::ClipRect(rect));
    }

    fn restore_state(&mut self) {
        match self.stack.pop() {
            Some(clip) => {
                self.clip = clip;
                self.push(DrawCommand::RestoreState);
            }
            None => log::warn!("RecordingCanvas: restore_state without matching save_state"),
        }
    }
}
