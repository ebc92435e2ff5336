//! QR symbol rendering for the generate endpoint.
//!
//! Symbol construction is delegated to the `qrcode` crate; this crate only
//! picks the rendering parameters, rasterizes the module matrix and encodes
//! the result as PNG.

pub mod options;
pub mod qr;

// Re-exports for convenience
pub use options::QrRenderOptions;
pub use qr::{render_image, render_png, render_png_with};

/// Pixels per QR module.
pub const DEFAULT_SCALE: u32 = 10;

/// Quiet-zone width in modules.
pub const DEFAULT_MARGIN: u32 = 4;

/// Upper bound accepted for pixels per module.
pub const MAX_SCALE: u32 = 100;

/// Upper bound accepted for the quiet-zone width.
pub const MAX_MARGIN: u32 = 64;

/// Errors that can occur while rendering a QR image.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR content is empty")]
    EmptyContent,

    #[error("QR encode error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encode error: {0}")]
    Png(#[from] image::ImageError),

    #[error("Invalid render options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for QR rendering.
pub type Result<T> = std::result::Result<T, QrError>;
