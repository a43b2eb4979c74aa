use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Pixel buffer length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    PixelBufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
