//! QR rendering for finished payloads.

use qrcode::render::{svg, unicode};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

use crate::config::QrOptions;

/// QR rendering errors.
#[derive(Debug, Error)]
pub enum QrError {
    #[error("failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Encode the payload text. Medium error correction, which is what bank
/// apps expect for a static code.
fn encode(payload: &str) -> Result<QrCode, QrError> {
    Ok(QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)?)
}

/// Render the payload as an SVG document.
pub fn render_svg(payload: &str, options: &QrOptions) -> Result<String, QrError> {
    let code = encode(payload)?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(options.min_dimension, options.min_dimension)
        .quiet_zone(options.quiet_zone)
        .dark_color(svg::Color(&options.dark_color))
        .light_color(svg::Color(&options.light_color))
        .build())
}

/// Render the payload with Unicode half blocks for a terminal.
pub fn render_terminal(payload: &str) -> Result<String, QrError> {
    let code = encode(payload)?;
    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use supermix_pix_core::build_pix_payload;

    fn payload() -> String {
        build_pix_payload("pix@example.com", "ACME CONCRETO", "SAO PAULO", 100.0)
    }

    #[test]
    fn test_svg_document() {
        let svg = render_svg(&payload(), &QrOptions::default()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn test_svg_respects_min_dimension() {
        let small = render_svg(&payload(), &QrOptions::compact()).unwrap();
        let large = render_svg(&payload(), &QrOptions::default()).unwrap();
        assert_ne!(small, large);
    }

    #[test]
    fn test_terminal_render() {
        let text = render_terminal(&payload()).unwrap();
        assert!(text.lines().count() > 10);
    }

    #[test]
    fn test_payload_too_long_for_qr() {
        let huge = "A".repeat(8_000);
        assert!(matches!(render_terminal(&huge), Err(QrError::Encode(_))));
    }
}
