//! Software canvas backed by a tiny-skia pixmap, with text through cosmic-text.

use std::path::Path;

use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping, SwashCache, Weight};
use tiny_skia::{FillRule, FilterQuality, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::{CanvasError, Result};
use crate::font::{FontSpec, HAlign, VAlign};
use crate::geometry::{Point, Rect, Size};
use crate::image::ImageData;
use crate::text_metrics::TextMetrics;

/// Font database and glyph cache.
///
/// Loading system fonts is slow, so one engine is meant to be moved from
/// canvas to canvas via [`RasterCanvas::with_text_engine`] and
/// [`RasterCanvas::into_text_engine`].
pub struct TextEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    fn shape(&mut self, text: &str, font: &FontSpec) -> Buffer {
        let line_height = TextMetrics::for_font(font).line_height();
        let mut buffer = Buffer::new(&mut self.font_system, Metrics::new(font.size, line_height));
        let attrs = if font.bold {
            Attrs::new().weight(Weight::BOLD)
        } else {
            Attrs::new()
        };
        {
            let mut b = buffer.borrow_with(&mut self.font_system);
            b.set_size(None, None);
            b.set_text(text, &attrs, Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }
        buffer
    }

    fn measure(&mut self, text: &str, font: &FontSpec) -> Size {
        let buffer = self.shape(text, font);
        let line_height = buffer.metrics().line_height;
        let (width, lines) = buffer
            .layout_runs()
            .fold((0.0f32, 0usize), |(w, n), run| (w.max(run.line_w), n + 1));
        Size::new(width, lines.max(1) as f32 * line_height)
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Rasterizing [`Canvas`].
pub struct RasterCanvas {
    pixmap: Pixmap,
    mask: Option<Mask>,
    stack: Vec<Option<Mask>>,
    text: TextEngine,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_text_engine(width, height, TextEngine::new())
    }

    pub fn with_text_engine(width: u32, height: u32, text: TextEngine) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            mask: None,
            stack: Vec::new(),
            text,
        })
    }

    pub fn into_text_engine(self) -> TextEngine {
        self.text
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole surface, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_sk_color(color));
    }

    /// Read back a pixel with straight alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::new(
            px.red() as f32 / 255.0,
            px.green() as f32 / 255.0,
            px.blue() as f32 / 255.0,
            px.alpha() as f32 / 255.0,
        ))
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| CanvasError::PngEncode(e.to_string()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path.as_ref(), bytes)?;
        log::debug!("RasterCanvas: wrote {}", path.as_ref().display());
        Ok(())
    }

    /// Snapshot the current surface as an image.
    pub fn to_image(&self) -> ImageData {
        ImageData::from_pixmap(self.pixmap.clone())
    }

    fn fill_path(&mut self, path: &tiny_skia::Path, color: Color) {
        let paint = paint_for(color);
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), self.mask.as_ref());
    }

    fn stroke_path(&mut self, path: &tiny_skia::Path, color: Color, width: f32) {
        let paint = paint_for(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), self.mask.as_ref());
    }

    fn empty_mask(&self) -> Option<Mask> {
        Mask::new(self.pixmap.width(), self.pixmap.height())
    }
}

impl Canvas for RasterCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(r) = to_sk_rect(rect) {
            let paint = paint_for(color);
            self.pixmap
                .fill_rect(r, &paint, Transform::identity(), self.mask.as_ref());
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        if let Some(r) = to_sk_rect(rect) {
            let path = PathBuilder::from_rect(r);
            self.stroke_path(&path, color, width);
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            self.fill_path(&path, color);
        }
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        if let Some(path) = rounded_rect_path(rect, radius) {
            self.stroke_path(&path, color, width);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.fill_path(&path, color);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.stroke_path(&path, color, width);
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color, width);
        }
    }

    fn draw_string(&mut self, text: &str, rect: Rect, h_align: HAlign, v_align: VAlign, font: &FontSpec) {
        if text.is_empty() {
            return;
        }

        let buffer = self.text.shape(text, font);
        let line_height = buffer.metrics().line_height;
        let (text_w, lines) = buffer
            .layout_runs()
            .fold((0.0f32, 0usize), |(w, n), run| (w.max(run.line_w), n + 1));
        let text_h = lines.max(1) as f32 * line_height;

        let origin_x = h_align.place(rect.x, rect.width, text_w).round() as i32;
        let origin_y = v_align.place(rect.y, rect.height, text_h).round() as i32;

        let [r, g, b, a] = font.color.to_rgba8();
        let mut spans = Vec::new();
        let TextEngine {
            font_system,
            swash_cache,
        } = &mut self.text;
        buffer.draw(
            font_system,
            swash_cache,
            cosmic_text::Color::rgba(r, g, b, a),
            |x, y, w, h, c| spans.push((x, y, w, h, c)),
        );

        for (x, y, w, h, c) in spans {
            if c.a() == 0 {
                continue;
            }
            let px = Rect::new((origin_x + x) as f32, (origin_y + y) as f32, w as f32, h as f32);
            let color = Color::new(
                c.r() as f32 / 255.0,
                c.g() as f32 / 255.0,
                c.b() as f32 / 255.0,
                c.a() as f32 / 255.0,
            );
            self.fill_rect(px, color);
        }
    }

    fn draw_image(&mut self, image: &ImageData, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let src = image.pixmap();
        let sx = rect.width / src.width() as f32;
        let sy = rect.height / src.height() as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            src.as_ref(),
            &paint,
            Transform::from_row(sx, 0.0, 0.0, sy, rect.x, rect.y),
            self.mask.as_ref(),
        );
    }

    fn measure_string(&mut self, text: &str, font: &FontSpec) -> Size {
        self.text.measure(text, font)
    }

    fn save_state(&mut self) {
        self.stack.push(self.mask.clone());
    }

    fn clip_rect(&mut self, rect: Rect) {
        let Some(path) = to_sk_rect(rect).map(PathBuilder::from_rect) else {
            // Empty clip hides everything until restored
            self.mask = self.empty_mask();
            return;
        };

        match self.mask.as_mut() {
            Some(mask) => mask.intersect_path(&path, FillRule::Winding, false, Transform::identity()),
            None => {
                let mut mask = self.empty_mask();
                if let Some(m) = mask.as_mut() {
                    m.fill_path(&path, FillRule::Winding, false, Transform::identity());
                }
                self.mask = mask;
            }
        }
    }

    fn restore_state(&mut self) {
        match self.stack.pop() {
            Some(mask) => self.mask = mask,
            None => log::warn!("RasterCanvas: restore_state without matching save_state"),
        }
    }
}

fn to_sk_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_rgba8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_sk_color(color));
    paint.anti_alias = true;
    paint
}

fn to_sk_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    if rect.is_empty() {
        return None;
    }
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Option<tiny_skia::Path> {
    if rect.is_empty() {
        return None;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.quad_to(right, top, right, top + r);
    pb.line_to(right, bottom - r);
    pb.quad_to(right, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.quad_to(left, bottom, left, bottom - r);
    pb.line_to(left, top + r);
    pb.quad_to(left, top, left + r, top);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(w: u32, h: u32) -> RasterCanvas {
        RasterCanvas::new(w, h).unwrap()
    }

    #[test]
    fn test_zero_size_is_error() {
        assert!(matches!(
            RasterCanvas::new(0, 10),
            Err(CanvasError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_fill_rect_paints_pixels() {
        let mut c = canvas(20, 20);
        c.fill_rect(Rect::new(5.0, 5.0, 10.0, 10.0), Color::RED);
        assert_eq!(c.pixel(10, 10).unwrap().to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(c.pixel(1, 1).unwrap().a, 0.0);
    }

    #[test]
    fn test_clip_limits_fill_and_restore_lifts_it() {
        let mut c = canvas(20, 20);
        c.save_state();
        c.clip_rect(Rect::new(0.0, 0.0, 10.0, 20.0));
        c.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Color::BLUE);
        c.restore_state();

        assert_eq!(c.pixel(5, 5).unwrap().to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(c.pixel(15, 5).unwrap().a, 0.0);

        c.fill_rect(Rect::new(0.0, 0.0, 20.0, 20.0), Color::RED);
        assert_eq!(c.pixel(15, 5).unwrap().to_rgba8(), [255, 0, 0, 255]);
    }

    #[test]
    fn test_empty_clip_hides_everything() {
        let mut c = canvas(10, 10);
        c.save_state();
        c.clip_rect(Rect::new(0.0, 0.0, 0.0, 0.0));
        c.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        c.restore_state();
        assert_eq!(c.pixel(5, 5).unwrap().a, 0.0);
    }

    #[test]
    fn test_draw_image_scales_to_rect() {
        let mut c = canvas(20, 20);
        let img = ImageData::solid(2, 2, Color::BLUE).unwrap();
        c.draw_image(&img, Rect::new(0.0, 0.0, 20.0, 20.0));
        assert_eq!(c.pixel(10, 10).unwrap().to_rgba8(), [0, 0, 255, 255]);
    }

    #[test]
    fn test_encode_png_has_signature() {
        let c = canvas(4, 4);
        let png = c.encode_png().unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }
}
