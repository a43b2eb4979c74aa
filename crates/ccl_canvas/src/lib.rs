//! ccl_canvas - drawing surfaces for the ccl widget library
//!
//! Defines the [`Canvas`] trait widgets paint onto, a [`RecordingCanvas`]
//! for tests and a tiny-skia [`RasterCanvas`] for real pixels.

pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod geometry;
pub mod icon;
pub mod image;
pub mod raster;
pub mod recording;
pub mod text_metrics;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{CanvasError, Result};
pub use font::{FontSpec, HAlign, VAlign, DEFAULT_FONT_SIZE};
pub use geometry::{Point, Rect, Size};
pub use icon::{icons, rasterize_svg, IconCache};
pub use image::ImageData;
pub use raster::{RasterCanvas, TextEngine};
pub use recording::{DrawCommand, RecordingCanvas};
pub use text_metrics::TextMetrics;
