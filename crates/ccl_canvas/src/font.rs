//! Font description and text alignment.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Default font size used by widgets.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Font request passed to text drawing and measuring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f32,
    pub color: Color,
    #[serde(default)]
    pub bold: bool,
}

impl FontSpec {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
            bold: false,
        }
    }
}

/// Horizontal text alignment within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

impl HAlign {
    /// X position of content `width` wide inside `[x, x + available)`.
    pub fn place(self, x: f32, available: f32, width: f32) -> f32 {
        match self {
            HAlign::Left => x,
            HAlign::Center => x + (available - width) / 2.0,
            HAlign::Right => x + available - width,
        }
    }
}

impl VAlign {
    /// Y position of content `height` tall inside `[y, y + available)`.
    pub fn place(self, y: f32, available: f32, height: f32) -> f32 {
        match self {
            VAlign::Top => y,
            VAlign::Center => y + (available - height) / 2.0,
            VAlign::Bottom => y + available - height,
        }
    }
}
