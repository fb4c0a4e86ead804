//! Error types for the card editor core

use thiserror::Error;

/// Main error type for card rendering and export operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Logo image could not be decoded or re-encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Rendered SVG failed to parse for rasterization
    #[error("SVG parse error: {0}")]
    Svg(String),

    /// Pixmap allocation or PNG encoding failed
    #[error("PNG encode error: {0}")]
    Encode(String),

    /// Contact payload exceeds QR symbol capacity
    #[error("QR error: {0}")]
    Qr(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
