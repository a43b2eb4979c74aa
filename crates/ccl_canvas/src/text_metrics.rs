//! Text measurement utilities.
//!
//! Estimates text dimensions from font metrics. Used by canvases that have
//! no shaping engine and by widgets that need a size before painting.

use crate::font::FontSpec;
use crate::geometry::Size;

/// Metrics for a specific font/size combination.
#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    /// Font size in pixels
    pub size: f32,
    /// Average character width as a ratio of font size
    pub char_width_ratio: f32,
    /// Line height as a ratio of font size
    pub line_height_ratio: f32,
}

impl TextMetrics {
    /// Ratios tuned for a monospace face.
    pub const MONO: TextMetrics = TextMetrics {
        size: 14.0,
        char_width_ratio: 0.6,
        line_height_ratio: 1.2,
    };

    /// Create metrics for a specific font size.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Self::MONO
        }
    }

    pub fn for_font(font: &FontSpec) -> Self {
        Self::new(font.size)
    }

    /// Estimate the width of a single line of text.
    pub fn line_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * self.char_width_ratio
    }

    pub fn line_height(&self) -> f32 {
        self.size * self.line_height_ratio
    }

    /// Estimate dimensions for multi-line text. An empty string still
    /// occupies one line.
    pub fn measure(&self, text: &str) -> Size {
        let line_count = text.lines().count().max(1);
        let width = text
            .lines()
            .map(|line| self.line_width(line))
            .fold(0.0f32, f32::max);

        Size::new(width, line_count as f32 * self.line_height())
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self::MONO
    }
}
