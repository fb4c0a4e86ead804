//! SVG template renderer.
//!
//! Pure functions from a card snapshot to an SVG document. The same markup
//! backs the live preview (injected into the page) and the PNG export
//! (rasterized with resvg), so what the user sees is exactly what gets
//! saved.

mod glyphs;
mod templates;

pub use glyphs::QR_PLATE;
pub use templates::{render_card, render_template, CARD_HEIGHT, CARD_WIDTH};
