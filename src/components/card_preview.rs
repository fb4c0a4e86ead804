//! Live card preview.
//!
//! The preview and the PNG export share one renderer: the SVG produced by
//! tarjeta-core is injected here verbatim, and the export rasterizes the
//! same markup, so the saved file always matches the screen.

use dioxus::prelude::*;
use tarjeta_core::render;

use crate::context::use_card;

/// Rendered card surface.
#[component]
pub fn CardPreview() -> Element {
    let card = use_card();

    // Re-rendered whenever any model field changes
    let svg = use_memo(move || render::render_card(&card.read()));

    rsx! {
        div {
            class: "card-preview",
            dangerous_inner_html: "{svg()}",
        }
    }
}
