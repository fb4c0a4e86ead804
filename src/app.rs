use dioxus::prelude::*;
use tarjeta_core::CardData;

use crate::components::{CardPreview, ControlPanel};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card model context. One page: the
/// control panel on the left, the live preview on the right.
#[component]
pub fn App() -> Element {
    // The session's single card instance
    let card: Signal<CardData> = use_signal(CardData::default);
    use_context_provider(|| card);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "editor-shell",
            ControlPanel {}
            div { class: "preview-pane",
                CardPreview {}
            }
        }
    }
}
