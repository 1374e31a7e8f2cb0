//! QR code rasterisation.

use crate::CardError;
use image::{GrayImage, Luma};
use log::{debug, info};
use qrcode::{Color, QrCode};

/// Light modules required around the symbol for scanners to find it
pub const QUIET_ZONE: u32 = 4;

/// The smallest side, in pixels, of a rendered QR image
pub const MIN_SIDE_PX: u32 = 900;

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Encode `payload` as a QR code and render it as a square greyscale image
/// at least [MIN_SIDE_PX] pixels wide.
///
/// The encoder picks the smallest version that fits at its default error
/// correction level. Payloads too long for any version are an error.
pub fn qr_image(payload: &str) -> Result<GrayImage, CardError> {
    qr_image_with_min_side(payload, MIN_SIDE_PX)
}

/// Like [qr_image], but with a custom minimum side
pub fn qr_image_with_min_side(payload: &str, min_side: u32) -> Result<GrayImage, CardError> {
    info!(bytes = payload.len(); "Encoding QR code");
    let code = QrCode::new(payload.as_bytes())?;
    let image = render(&code, min_side);
    debug!(
        modules = code.width(),
        version:? = code.version(),
        side_px = image.width();
        "Rendered QR code"
    );
    Ok(image)
}

/// Paint every module as a `scale`×`scale` block, where `scale` is the
/// smallest integer that makes the image at least `min_side` wide
fn render(code: &QrCode, min_side: u32) -> GrayImage {
    let modules = code.width() as u32;
    let colours = code.to_colors();

    let span = modules + 2 * QUIET_ZONE;
    let scale = min_side.div_ceil(span).max(1);
    let side = span * scale;

    GrayImage::from_fn(side, side, |x, y| {
        let (mx, my) = (x / scale, y / scale);
        let inside = (QUIET_ZONE..QUIET_ZONE + modules).contains(&mx)
            && (QUIET_ZONE..QUIET_ZONE + modules).contains(&my);
        if !inside {
            return LIGHT;
        }

        let index = ((my - QUIET_ZONE) * modules + (mx - QUIET_ZONE)) as usize;
        match colours[index] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(image: &GrayImage) -> String {
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            image.width() as usize,
            image.height() as usize,
            |x, y| image.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR code");
        let (_meta, content) = grids[0].decode().unwrap();
        content
    }

    #[test]
    fn images_are_square_and_large_enough() {
        let image = qr_image("https://example.com").unwrap();
        assert_eq!(image.width(), image.height());
        assert!(image.width() >= MIN_SIDE_PX);
        assert!(image.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn quiet_zone_is_light() {
        let code = QrCode::new(b"quiet").unwrap();
        let image = render(&code, 100);
        let span = code.width() as u32 + 2 * QUIET_ZONE;
        let scale = image.width() / span;
        let border = QUIET_ZONE * scale;

        for i in 0..image.width() {
            for j in 0..border {
                assert_eq!(image.get_pixel(i, j).0[0], 255);
                assert_eq!(image.get_pixel(j, i).0[0], 255);
            }
        }
        // top-left finder pattern corner
        assert_eq!(image.get_pixel(border, border).0[0], 0);
    }

    #[test]
    fn scale_is_the_smallest_integer_reaching_the_minimum() {
        let code = QrCode::new(b"https://example.com").unwrap();
        let span = code.width() as u32 + 2 * QUIET_ZONE;
        let image = render(&code, 900);
        assert_eq!(image.width() % span, 0);
        assert!(image.width() >= 900);
        assert!(image.width() - span < 900);
    }

    #[test]
    fn decodes_back_to_the_url() {
        let url = "https://example.com/game?name=Theresa";
        let image = qr_image(url).unwrap();
        assert_eq!(decode(&image), url);
    }

    #[test]
    fn oversized_payloads_are_rejected() {
        let payload = "x".repeat(4000);
        assert!(matches!(qr_image(&payload), Err(CardError::QrCode(_))));
    }
}
