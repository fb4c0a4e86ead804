//! Control panel: the editing surface.
//!
//! One bound control per card field. Each control's change event performs
//! exactly one model operation; no validation beyond the native input
//! types, empty fields simply drop out of the rendered card.

use dioxus::prelude::*;
use tarjeta_core::{FontFamily, Template};
use tarjeta_ui::{Button, ButtonVariant, ColorInput, Input, Select};

use crate::components::export::spawn_export;
use crate::components::LogoPicker;
use crate::context::use_card;

/// Editing surface bound to the shared card model.
#[component]
pub fn ControlPanel() -> Element {
    let mut card = use_card();

    let qr_shown = card.read().show_qr_code;

    rsx! {
        div { class: "control-panel",
            h2 { class: "panel-title", "Personalizar Tarjeta" }

            h3 { class: "panel-section", "Información de Contacto" }
            Input {
                value: card.read().full_name.clone(),
                placeholder: "Nombre Completo".to_string(),
                oninput: move |v| card.write().full_name = v,
            }
            Input {
                value: card.read().title.clone(),
                placeholder: "Cargo o Puesto".to_string(),
                oninput: move |v| card.write().title = v,
            }
            Input {
                value: card.read().company.clone(),
                placeholder: "Nombre de la Empresa".to_string(),
                oninput: move |v| card.write().company = v,
            }
            Input {
                value: card.read().phone.clone(),
                placeholder: "Número de Teléfono".to_string(),
                input_type: "tel".to_string(),
                oninput: move |v| card.write().phone = v,
            }
            Input {
                value: card.read().email.clone(),
                placeholder: "Correo Electrónico".to_string(),
                input_type: "email".to_string(),
                oninput: move |v| card.write().email = v,
            }
            Input {
                value: card.read().website.clone(),
                placeholder: "Sitio Web".to_string(),
                input_type: "url".to_string(),
                oninput: move |v| card.write().website = v,
            }

            LogoPicker {}

            h3 { class: "panel-section", "Diseño y Estilo" }
            Select {
                label: "Plantilla".to_string(),
                value: card.read().template.label().to_string(),
                options: Template::ALL.iter().map(|t| t.label().to_string()).collect::<Vec<_>>(),
                onchange: move |label: String| card.write().template = Template::from_label(&label),
            }
            Select {
                label: "Tipografía".to_string(),
                value: card.read().font_family.label().to_string(),
                options: FontFamily::ALL.iter().map(|f| f.label().to_string()).collect::<Vec<_>>(),
                onchange: move |label: String| card.write().font_family = FontFamily::from_label(&label),
            }
            div { class: "color-grid",
                ColorInput {
                    label: "Color de Fondo".to_string(),
                    value: card.read().background_color.clone(),
                    oninput: move |v| card.write().background_color = v,
                }
                ColorInput {
                    label: "Color de Texto".to_string(),
                    value: card.read().text_color.clone(),
                    oninput: move |v| card.write().text_color = v,
                }
            }

            h3 { class: "panel-section", "Acciones" }
            div { class: "panel-actions",
                Button {
                    variant: ButtonVariant::Accent,
                    onclick: move |_| card.write().toggle_qr(),
                    if qr_shown { "Quitar QR" } else { "Integrar QR" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| spawn_export(&card.read()),
                    "Guardar como PNG"
                }
            }
        }
    }
}
