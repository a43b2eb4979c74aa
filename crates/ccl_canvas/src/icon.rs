//! SVG icon rasterization.
//!
//! Icons are rasterized with resvg into [`ImageData`] and cached by name and
//! size, so widgets that draw the same glyph every frame only pay once.

use std::collections::HashMap;

use crate::color::Color;
use crate::error::{CanvasError, Result};
use crate::image::ImageData;

/// Cache of rasterized icons keyed by (name, size, color).
#[derive(Debug, Default)]
pub struct IconCache {
    cache: HashMap<(String, u32, [u8; 4]), ImageData>,
}

impl IconCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an icon from the cache, or rasterize and cache it.
    pub fn get_or_rasterize(&mut self, name: &str, svg: &str, size: u32, color: Color) -> Result<ImageData> {
        let key = (name.to_string(), size, color.to_rgba8());
        if let Some(image) = self.cache.get(&key) {
            return Ok(image.clone());
        }

        let image = rasterize_svg(svg, size, color)?;
        self.cache.insert(key, image.clone());
        Ok(image)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Rasterize an SVG into a square-fitted image.
///
/// `currentColor` in the source is replaced with `color`.
pub fn rasterize_svg(svg: &str, size: u32, color: Color) -> Result<ImageData> {
    let svg = svg.replace("currentColor", &color.to_hex());

    let tree = resvg::usvg::Tree::from_str(&svg, &resvg::usvg::Options::default())
        .map_err(|e| CanvasError::SvgParse(e.to_string()))?;

    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).ceil() as u32;
    let height = (svg_size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    log::debug!("Rasterized SVG icon: {}x{} (scale {:.2})", width, height, scale);
    Ok(ImageData::from_pixmap(pixmap))
}

/// Built-in icons.
pub mod icons {
    /// Square with a plus sign, shown on collapsed tree nodes.
    pub const PLUS_SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><rect x="1" y="1" width="14" height="14" rx="2" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M8 4v8M4 8h8" stroke="currentColor" stroke-width="1.5"/></svg>"#;

    /// Square with a minus sign, shown on expanded tree nodes.
    pub const DASH_SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><rect x="1" y="1" width="14" height="14" rx="2" fill="none" stroke="currentColor" stroke-width="1.5"/><path d="M4 8h8" stroke="currentColor" stroke-width="1.5"/></svg>"#;

    /// Filled downward caret, used on combobox buttons.
    pub const CARET_DOWN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path d="M3 5h10l-5 6z" fill="currentColor"/></svg>"#;

    /// Star, used by the gallery's icon button.
    pub const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><path d="M8 1l2.2 4.6 5 .7-3.6 3.5.9 5L8 12.4 3.5 14.8l.9-5L.8 6.3l5-.7z" fill="currentColor"/></svg>"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_builtin_icon() {
        let image = rasterize_svg(icons::PLUS_SQUARE, 20, Color::BLACK).unwrap();
        assert_eq!(image.width(), 20);
        assert_eq!(image.height(), 20);
    }

    #[test]
    fn test_invalid_svg_is_error() {
        assert!(matches!(
            rasterize_svg("<not-svg", 16, Color::BLACK),
            Err(CanvasError::SvgParse(_))
        ));
    }

    #[test]
    fn test_cache_reuses_rasterized_icon() {
        let mut cache = IconCache::new();
        let a = cache.get_or_rasterize("plus", icons::PLUS_SQUARE, 16, Color::BLACK).unwrap();
        let b = cache.get_or_rasterize("plus", icons::PLUS_SQUARE, 16, Color::BLACK).unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(cache.len(), 1);

        cache.get_or_rasterize("plus", icons::PLUS_SQUARE, 24, Color::BLACK).unwrap();
        assert_eq!(cache.len(), 2);
    }
}
