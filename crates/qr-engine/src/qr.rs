//! QR code rasterization and PNG output.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use qrcode::{Color, QrCode};

use crate::options::{DEFAULT_RENDER_OPTIONS, QrRenderOptions};
use crate::{QrError, Result};

/// Render `content` as a PNG using the service's fixed configuration.
pub fn render_png(content: &str) -> Result<Vec<u8>> {
    render_png_with(content, &DEFAULT_RENDER_OPTIONS)
}

/// Render `content` as a PNG with explicit options.
pub fn render_png_with(content: &str, opts: &QrRenderOptions) -> Result<Vec<u8>> {
    let img = render_image(content, opts)?;

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img).write_to(&mut cursor, ImageFormat::Png)?;
    let png = cursor.into_inner();

    tracing::debug!(bytes = png.len(), "QR image encoded");
    Ok(png)
}

/// Build the QR symbol for `content` and draw it into an RGB raster.
///
/// The image is square with side `(modules + 2 * margin) * scale`; the quiet
/// zone is filled with the background color.
pub fn render_image(content: &str, opts: &QrRenderOptions) -> Result<RgbImage> {
    if content.is_empty() {
        return Err(QrError::EmptyContent);
    }
    opts.validate()?;

    let code = QrCode::with_error_correction_level(content.as_bytes(), opts.ec_level)?;
    let module_count = code.width() as u32;
    let scale = opts.scale;
    let offset = opts.margin * scale;
    let img_size = opts.image_size(module_count);

    let mut img = RgbImage::from_pixel(img_size, img_size, Rgb(opts.light));
    let dark = Rgb(opts.dark);

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;

        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, dark);
            }
        }
    }

    tracing::debug!(
        version = ?code.version(),
        modules = module_count,
        size = img_size,
        "QR symbol rendered"
    );
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrcode::EcLevel;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn render_png_produces_png_bytes() {
        let png = render_png("https://example.com").unwrap();
        assert!(png.len() > PNG_SIGNATURE.len());
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn render_image_has_quiet_zone_and_scale() {
        let opts = QrRenderOptions::default();
        let img = render_image("https://example.com", &opts).unwrap();
        let code =
            QrCode::with_error_correction_level(b"https://example.com", EcLevel::L).unwrap();
        let expected = (code.width() as u32 + 8) * 10;

        assert_eq!(img.width(), expected);
        assert_eq!(img.height(), expected);
        // Quiet zone corner is background.
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(39, 39), &Rgb([255, 255, 255]));
        // Top-left finder pattern starts right after the margin.
        assert_eq!(img.get_pixel(40, 40), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(49, 49), &Rgb([0, 0, 0]));
    }

    #[test]
    fn render_image_respects_custom_colors() {
        let opts = QrRenderOptions::new()
            .with_scale(1)
            .with_margin(0)
            .with_colors([10, 20, 30], [200, 210, 220]);
        let img = render_image("hello", &opts).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([10, 20, 30]));
        // Separator next to the finder pattern is light.
        assert_eq!(img.get_pixel(7, 0), &Rgb([200, 210, 220]));
    }

    #[test]
    fn empty_content_is_rejected() {
        assert!(matches!(render_png(""), Err(QrError::EmptyContent)));
    }

    #[test]
    fn content_over_capacity_fails_to_encode() {
        // Version 40-L holds 2953 bytes in byte mode.
        let content = "&amp;".repeat(1000);
        let err = render_png(&content).unwrap_err();
        assert!(matches!(err, QrError::Encode(_)));
    }

    #[test]
    fn invalid_options_are_reported() {
        for scale in [0, u32::MAX] {
            let opts = QrRenderOptions::new().with_scale(scale);
            assert!(matches!(
                render_png_with("hello", &opts),
                Err(QrError::InvalidOptions(_))
            ));
        }
    }
}
