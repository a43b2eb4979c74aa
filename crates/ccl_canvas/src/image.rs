//! Image data handed to [`Canvas::draw_image`](crate::Canvas::draw_image).

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tiny_skia::{IntSize, Pixmap};

use crate::color::Color;
use crate::error::{CanvasError, Result};

/// Shared, immutable RGBA image.
///
/// Pixels are stored premultiplied, the native layout of tiny-skia, so the
/// raster canvas can blit them without conversion. Cloning is cheap.
#[derive(Clone)]
pub struct ImageData {
    pixmap: Arc<Pixmap>,
}

impl ImageData {
    /// Build from straight-alpha RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, mut data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CanvasError::PixelBufferLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        for px in data.chunks_exact_mut(4) {
            let a = px[3] as u16;
            for c in &mut px[..3] {
                *c = ((*c as u16 * a + 127) / 255) as u8;
            }
        }

        let size = IntSize::from_wh(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        let pixmap = Pixmap::from_vec(data, size).ok_or(CanvasError::InvalidSize { width, height })?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// A single-color image.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(CanvasError::InvalidSize { width, height })?;
        let [r, g, b, a] = color.to_rgba8();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        Ok(Self::from_pixmap(pixmap))
    }

    /// Decode a PNG from memory.
    pub fn decode_png(bytes: &[u8]) -> Result<Self> {
        let pixmap = Pixmap::decode_png(bytes).map_err(|e| CanvasError::ImageDecode(e.to_string()))?;
        Ok(Self::from_pixmap(pixmap))
    }

    /// Load a PNG file.
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        log::debug!("Loaded {} bytes from {}", bytes.len(), path.as_ref().display());
        Self::decode_png(&bytes)
    }

    pub(crate) fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Whether two handles share the same pixel storage.
    pub fn ptr_eq(&self, other: &ImageData) -> bool {
        Arc::ptr_eq(&self.pixmap, &other.pixmap)
    }
}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_rejects_wrong_length() {
        let err = ImageData::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
        assert!(matches!(err, CanvasError::PixelBufferLength { expected: 16, actual: 15, .. }));
    }

    #[test]
    fn test_from_rgba8_premultiplies() {
        let img = ImageData::from_rgba8(1, 1, vec![255, 100, 0, 128]).unwrap();
        let px = img.pixmap().pixel(0, 0).unwrap();
        assert_eq!(px.red(), 128);
        assert_eq!(px.alpha(), 128);
    }

    #[test]
    fn test_solid_zero_size_is_error() {
        assert!(matches!(
            ImageData::solid(0, 5, Color::RED),
            Err(CanvasError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_clone_shares_storage() {
        let a = ImageData::solid(2, 2, Color::BLUE).unwrap();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, ImageData::solid(2, 2, Color::BLUE).unwrap());
    }
}
