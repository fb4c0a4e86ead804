//! PNG export of the rendered card.
//!
//! The card SVG is parsed with usvg, rasterized with resvg into a
//! tiny-skia pixmap at triple pixel density, and PNG-encoded. The pixmap
//! starts fully transparent, so only what the template paints ends up
//! opaque in the exported file.

use std::path::{Path, PathBuf};

use crate::card::CardData;
use crate::error::CardError;
use crate::render;

/// Pixel density multiplier for exported bitmaps.
pub const EXPORT_SCALE: f32 = 3.0;

/// Filename slug: the trimmed full name, lowercased, whitespace runs
/// collapsed to single hyphens. A blank name slugs to `tarjeta`.
pub fn slug(full_name: &str) -> String {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return "tarjeta".to_string();
    }
    let lowered = trimmed.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Name of the exported file for a given full name.
pub fn export_filename(full_name: &str) -> String {
    format!("tarjeta-{}.png", slug(full_name))
}

/// Rasterize an SVG document to PNG bytes at the given scale.
pub fn render_png(svg: &str, scale: f32) -> Result<Vec<u8>, CardError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| CardError::Svg(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| CardError::Encode(format!("invalid pixmap size {width}x{height}")))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap.encode_png().map_err(|e| CardError::Encode(e.to_string()))
}

/// Render the card and write `tarjeta-<slug>.png` into `dir`.
///
/// Returns the path of the written file.
pub fn export_card(card: &CardData, dir: &Path) -> Result<PathBuf, CardError> {
    let svg = render::render_card(card);
    let png = render_png(&svg, EXPORT_SCALE)?;
    let path = dir.join(export_filename(&card.full_name));
    std::fs::write(&path, png)?;
    tracing::info!("Exported card to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug("Juan Pérez"), "juan-pérez");
        assert_eq!(slug("  Ana   María  López "), "ana-maría-lópez");
    }

    #[test]
    fn blank_names_slug_to_tarjeta() {
        assert_eq!(slug(""), "tarjeta");
        assert_eq!(slug("   "), "tarjeta");
        assert_eq!(slug("\t\n"), "tarjeta");
    }

    #[test]
    fn filename_wraps_the_slug() {
        assert_eq!(export_filename("Juan Pérez"), "tarjeta-juan-pérez.png");
        assert_eq!(export_filename(""), "tarjeta-tarjeta.png");
    }
}
