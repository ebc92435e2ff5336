//! Rendering parameters passed to the QR encoder.

use qrcode::EcLevel;

use crate::{DEFAULT_MARGIN, DEFAULT_SCALE, MAX_MARGIN, MAX_SCALE, QrError};

/// Fixed rendering configuration for generated QR images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrRenderOptions {
    /// Error-correction level. Low favors data capacity over redundancy.
    pub ec_level: EcLevel,

    /// Edge length of one module in pixels.
    pub scale: u32,

    /// Quiet zone around the symbol, in modules.
    pub margin: u32,

    /// Foreground (dark module) color as RGB.
    pub dark: [u8; 3],

    /// Background and quiet-zone color as RGB.
    pub light: [u8; 3],
}

/// Process-wide configuration used by the generate endpoint.
pub const DEFAULT_RENDER_OPTIONS: QrRenderOptions = QrRenderOptions {
    ec_level: EcLevel::L,
    scale: DEFAULT_SCALE,
    margin: DEFAULT_MARGIN,
    dark: [0x00, 0x00, 0x00],
    light: [0xff, 0xff, 0xff],
};

impl Default for QrRenderOptions {
    fn default() -> Self {
        DEFAULT_RENDER_OPTIONS
    }
}

impl QrRenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set error-correction level.
    pub fn with_ec_level(mut self, val: EcLevel) -> Self {
        self.ec_level = val;
        self
    }

    /// Builder: set pixels per module.
    pub fn with_scale(mut self, val: u32) -> Self {
        self.scale = val;
        self
    }

    /// Builder: set quiet-zone width in modules.
    pub fn with_margin(mut self, val: u32) -> Self {
        self.margin = val;
        self
    }

    /// Builder: set foreground and background colors.
    pub fn with_colors(mut self, dark: [u8; 3], light: [u8; 3]) -> Self {
        self.dark = dark;
        self.light = light;
        self
    }

    /// Check that the options describe a drawable image.
    pub fn validate(&self) -> Result<(), QrError> {
        if !(1..=MAX_SCALE).contains(&self.scale) {
            return Err(QrError::InvalidOptions(format!(
                "scale must be between 1 and {MAX_SCALE}, got {}",
                self.scale
            )));
        }
        if self.margin > MAX_MARGIN {
            return Err(QrError::InvalidOptions(format!(
                "margin must be at most {MAX_MARGIN}, got {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Side length in pixels of the image for a symbol `modules` wide.
    ///
    /// Validated options keep this within `u32` for every QR version.
    pub fn image_size(&self, modules: u32) -> u32 {
        (modules + 2 * self.margin) * self.scale
    }
}
