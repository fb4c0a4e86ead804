//! Color parsing and contrast derivation.
//!
//! Colors travel through the model as `#rrggbb` strings straight from the
//! color pickers. Gradient templates paint a blend of the background and
//! text colors, so the text drawn on top of them uses a contrast color
//! derived from that blend: black on light blends, white on dark ones.

/// Pure black. Also the fallback for any malformed color input.
pub const BLACK: &str = "#000000";

/// Pure white.
pub const WHITE: &str = "#FFFFFF";

/// Parse a `#rrggbb` string into RGB bytes.
///
/// Only the first seven characters are inspected; anything shorter, without
/// the leading `#`, or with non-hex digits is rejected.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.starts_with('#') {
        return None;
    }
    Some([channel(hex, 1)?, channel(hex, 3)?, channel(hex, 5)?])
}

fn channel(hex: &str, at: usize) -> Option<u8> {
    u8::from_str_radix(hex.get(at..at + 2)?, 16).ok()
}

/// Average two colors channel by channel, rounding halves up.
pub fn blend(a: &str, b: &str) -> Option<[u8; 3]> {
    let a = parse_hex(a)?;
    let b = parse_hex(b)?;
    Some([avg(a[0], b[0]), avg(a[1], b[1]), avg(a[2], b[2])])
}

fn avg(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16 + 1) / 2) as u8
}

/// BT.601 luma of an RGB triple, in 0..=255.
fn luma([r, g, b]: [u8; 3]) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

/// Black or white, whichever stays legible against `hex`.
///
/// Malformed input counts as dark and yields black; this must never fail,
/// the renderer calls it on every pass.
pub fn contrast_for(hex: &str) -> &'static str {
    match parse_hex(hex) {
        Some(rgb) if luma(rgb) >= 128 => BLACK,
        Some(_) => WHITE,
        None => BLACK,
    }
}

/// Contrast color for text drawn over a blend of the card's two colors.
pub fn blended_contrast(background: &str, text: &str) -> &'static str {
    match blend(background, text) {
        Some(rgb) if luma(rgb) >= 128 => BLACK,
        Some(_) => WHITE,
        None => BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_hex() {
        assert_eq!(parse_hex("#3645a9"), Some([0x36, 0x45, 0xa9]));
        assert_eq!(parse_hex("#ffffff"), Some([255, 255, 255]));
        assert_eq!(parse_hex("#000000"), Some([0, 0, 0]));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex(""), None);
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("3645a9"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        // Multi-byte characters must not panic the slicing
        assert_eq!(parse_hex("#éééééé"), None);
    }

    #[test]
    fn blend_rounds_halves_up() {
        // 0x36 + 0xff = 309, half is 154.5, rounds to 155
        assert_eq!(blend("#3645a9", "#ffffff"), Some([155, 162, 212]));
        assert_eq!(blend("#000000", "#000000"), Some([0, 0, 0]));
    }

    #[test]
    fn contrast_is_black_or_white() {
        assert_eq!(contrast_for("#ffffff"), BLACK);
        assert_eq!(contrast_for("#000000"), WHITE);
        assert_eq!(contrast_for("#808080"), BLACK); // luma 128 exactly
    }

    #[test]
    fn contrast_on_malformed_input_is_black() {
        assert_eq!(contrast_for("#fff"), BLACK);
        assert_eq!(contrast_for(""), BLACK);
        assert_eq!(blended_contrast("#fff", "#ffffff"), BLACK);
        assert_eq!(blended_contrast("", ""), BLACK);
    }

    #[test]
    fn default_card_colors_blend_dark_text() {
        // Indigo over white blends light, so the contrast text is black
        assert_eq!(blended_contrast("#3645a9", "#ffffff"), BLACK);
        assert_eq!(blended_contrast("#000000", "#111111"), WHITE);
    }
}
