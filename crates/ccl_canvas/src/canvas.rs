//! The drawing surface widgets paint onto.

use crate::color::Color;
use crate::font::{FontSpec, HAlign, VAlign};
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageData;

/// Primitive draw, measure and clip operations.
///
/// Widgets only ever compose these. Coordinates are in the widget's local
/// pixel space; a canvas has no transform stack, only a clip stack.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32);

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw `text` aligned inside `rect`. Text is not wrapped.
    fn draw_string(&mut self, text: &str, rect: Rect, h_align: HAlign, v_align: VAlign, font: &FontSpec);

    /// Draw `image` scaled to fill `rect`.
    fn draw_image(&mut self, image: &ImageData, rect: Rect);

    fn measure_string(&mut self, text: &str, font: &FontSpec) -> Size;

    /// Push the current clip onto the state stack.
    fn save_state(&mut self);

    /// Intersect the current clip with `rect`.
    fn clip_rect(&mut self, rect: Rect);

    /// Pop the state stack. Unbalanced calls are ignored.
    fn restore_state(&mut self);
}
