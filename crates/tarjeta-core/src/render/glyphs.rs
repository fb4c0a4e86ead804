//! Shared SVG building blocks: text, icons, the QR glyph and the logo.

use std::fmt::Write as _;

use qrcode::{EcLevel, QrCode};

use crate::card::Logo;

/// Side of the white backing plate behind the QR modules.
pub const QR_PLATE: f32 = 80.0;

/// Quiet zone between the plate edge and the first module.
const QR_PAD: f32 = 6.0;

/// Escape text content for XML.
pub fn esc(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Line icons drawn next to contact fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Phone,
    Mail,
    Globe,
    Building,
}

impl Icon {
    /// Stroke markup on a 24x24 grid.
    fn markup(&self) -> &'static str {
        match self {
            Icon::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6A19.79 19.79 0 0 1 2.12 4.18 2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            Icon::Mail => {
                r#"<rect x="2" y="4" width="20" height="16" rx="2"/><path d="m22 7-10 5L2 7"/>"#
            }
            Icon::Globe => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#
            }
            Icon::Building => {
                r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M9 22v-4h6v4"/><path d="M8 6h.01"/><path d="M16 6h.01"/><path d="M12 6h.01"/><path d="M8 10h.01"/><path d="M12 10h.01"/><path d="M16 10h.01"/><path d="M8 14h.01"/><path d="M12 14h.01"/><path d="M16 14h.01"/>"#
            }
        }
    }
}

/// Emit an icon with its top-left corner at `(x, y)`, scaled to `size`.
pub fn icon(out: &mut String, icon: Icon, x: f32, y: f32, size: f32, color: &str) {
    let scale = size / 24.0;
    out.push_str(&format!(
        r#"<g transform="translate({x} {y}) scale({scale})" fill="none" stroke="{color}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{markup}</g>"#,
        markup = icon.markup(),
    ));
}

/// Emit a text element. Empty content renders nothing at all.
///
/// Extra presentation attributes (weight, opacity, anchor, spacing) go in
/// `attrs` verbatim.
pub fn text_el(out: &mut String, content: &str, x: f32, y: f32, size: f32, fill: &str, attrs: &str) {
    if content.is_empty() {
        return;
    }
    out.push_str(&format!(
        r#"<text x="{x}" y="{y}" font-size="{size}" fill="{fill}"{sep}{attrs}>{content}</text>"#,
        sep = if attrs.is_empty() { "" } else { " " },
        content = esc(content),
    ));
}

/// One icon+text contact line with its baseline at `y`.
///
/// Empty text renders nothing, icon included. Reversed lines anchor their
/// right edge at `x` and place the icon after the text.
pub fn info_line(
    out: &mut String,
    kind: Icon,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: &str,
    reversed: bool,
) {
    if text.is_empty() {
        return;
    }
    let icon_top = y - size + 3.0;
    out.push_str(r#"<g class="info-line">"#);
    if reversed {
        text_el(out, text, x - size - 6.0, y, size, color, r#"text-anchor="end""#);
        icon(out, kind, x - size, icon_top, size, color);
    } else {
        icon(out, kind, x, icon_top, size, color);
        text_el(out, text, x + size + 6.0, y, size, color, "");
    }
    out.push_str("</g>");
}

/// The QR glyph: the contact payload at error-correction level M on a
/// white backing plate, so it scans against any background.
///
/// A payload too large for the symbol is logged and skipped; the card
/// renders without the glyph.
pub fn qr_glyph(out: &mut String, contact: &str, x: f32, y: f32) {
    let code = match QrCode::with_error_correction_level(contact.as_bytes(), EcLevel::M) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            return;
        }
    };

    let modules = code.width();
    let module = (QR_PLATE - 2.0 * QR_PAD) / modules as f32;

    let mut dark = String::new();
    for (i, color) in code.to_colors().into_iter().enumerate() {
        if color == qrcode::Color::Dark {
            let mx = QR_PAD + (i % modules) as f32 * module;
            let my = QR_PAD + (i / modules) as f32 * module;
            let _ = write!(dark, "M{mx:.2} {my:.2}h{module:.2}v{module:.2}h-{module:.2}z");
        }
    }

    out.push_str(&format!(
        r##"<g class="qr-glyph" transform="translate({x} {y})"><rect width="{plate}" height="{plate}" rx="4" fill="#ffffff"/><path d="{dark}" fill="#000000"/></g>"##,
        plate = QR_PLATE,
    ));
}

/// Emit the logo image with its top-left corner at `(x, y)`, fit inside a
/// `size` square.
pub fn logo_image(out: &mut String, logo: &Logo, x: f32, y: f32, size: f32) {
    out.push_str(&format!(
        r#"<image class="logo-glyph" x="{x}" y="{y}" width="{size}" height="{size}" preserveAspectRatio="xMidYMid meet" xlink:href="{uri}"/>"#,
        uri = logo.data_uri(),
    ));
}

/// Generic building glyph standing in where a layout wants a logo and none
/// is set.
pub fn building_placeholder(out: &mut String, x: f32, y: f32, size: f32, color: &str) {
    out.push_str(r#"<g class="logo-placeholder">"#);
    icon(out, Icon::Building, x, y, size, color);
    out.push_str("</g>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_xml_metacharacters() {
        assert_eq!(esc(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
        assert_eq!(esc("Pérez"), "Pérez");
    }

    #[test]
    fn empty_text_emits_nothing() {
        let mut out = String::new();
        text_el(&mut out, "", 10.0, 10.0, 14.0, "#000000", "");
        info_line(&mut out, Icon::Phone, "", 10.0, 10.0, 14.0, "#000000", false);
        assert!(out.is_empty());
    }

    #[test]
    fn info_line_carries_icon_and_text() {
        let mut out = String::new();
        info_line(&mut out, Icon::Mail, "a@b.c", 10.0, 20.0, 14.0, "#ffffff", false);
        assert!(out.contains(r#"class="info-line""#));
        assert!(out.contains("a@b.c"));
        assert!(out.contains("stroke=\"#ffffff\""));
        assert!(!out.contains("text-anchor=\"end\""));
    }

    #[test]
    fn reversed_info_line_anchors_right() {
        let mut out = String::new();
        info_line(&mut out, Icon::Phone, "555", 506.0, 20.0, 14.0, "#ffffff", true);
        assert!(out.contains("text-anchor=\"end\""));
    }

    #[test]
    fn qr_glyph_has_white_plate_and_dark_modules() {
        let mut out = String::new();
        qr_glyph(&mut out, "BEGIN:VCARD\nEND:VCARD", 0.0, 0.0);
        assert!(out.contains(r#"class="qr-glyph""#));
        assert!(out.contains(r##"fill="#ffffff""##));
        assert!(out.contains(r##"fill="#000000""##));
    }

    #[test]
    fn qr_payloads_differ_per_contact() {
        let mut a = String::new();
        let mut b = String::new();
        qr_glyph(&mut a, "FN:Ana", 0.0, 0.0);
        qr_glyph(&mut b, "FN:Bob", 0.0, 0.0);
        assert_ne!(a, b);
    }
}
