//! Tarjeta Core Library
//!
//! Business-card model, template renderer and PNG export.
//!
//! ## Overview
//!
//! Tarjeta composes a digital business card from contact fields, one of
//! nine layout templates, a typeface and a two-color scheme. The model is
//! a single in-memory record; the renderer is a pure function from a model
//! snapshot to an SVG document, which doubles as the live preview and as
//! the source for the 3x PNG export. An optional QR glyph embeds the
//! card's vCard payload.
//!
//! ## Quick Start
//!
//! ```
//! use tarjeta_core::{render, CardData, Template};
//!
//! let mut card = CardData::default();
//! card.full_name = "Ana María López".to_string();
//! card.template = Template::Classic;
//! card.toggle_qr();
//!
//! let svg = render::render_card(&card);
//! assert!(svg.contains("Ana María López"));
//! ```

pub mod card;
pub mod color;
pub mod error;
pub mod export;
pub mod render;
pub mod template;
pub mod vcard;

// Re-exports
pub use card::{CardData, Logo};
pub use error::CardError;
pub use template::{FontFamily, Template};
