//! Logo file picker.
//!
//! Opens a native file dialog, decodes the chosen image and installs it as
//! the card logo. The previous logo resource is released on replacement;
//! an unreadable file leaves the model untouched.

use dioxus::prelude::*;
use rfd::FileDialog;
use tarjeta_core::Logo;

use crate::context::use_card;

/// Logo upload control with inline error reporting.
#[component]
pub fn LogoPicker() -> Element {
    let mut card = use_card();
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Seleccionar Logo o Foto")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => {
                    match image::open(&path) {
                        Ok(img) => match Logo::from_image(&img) {
                            Ok(logo) => {
                                card.write().set_logo(Some(logo));
                                picking.set(false);
                            }
                            Err(e) => {
                                error.set(Some(format!("No se pudo codificar la imagen: {e}")));
                                picking.set(false);
                            }
                        },
                        Err(e) => {
                            error.set(Some(format!("No se pudo cargar la imagen: {e}")));
                            picking.set(false);
                        }
                    }
                }
                Ok(None) => {
                    // User cancelled
                    picking.set(false);
                }
                Err(e) => {
                    error.set(Some(format!("Error del selector de archivos: {e}")));
                    picking.set(false);
                }
            }
        });
    };

    let has_logo = card.read().logo().is_some();

    rsx! {
        div { class: "form-field logo-picker",
            label { class: "field-label", "Logo o Foto" }
            button {
                class: "btn-ghost logo-picker-btn",
                onclick: handle_pick,
                disabled: picking(),
                if picking() {
                    "Abriendo..."
                } else if has_logo {
                    "Cambiar imagen"
                } else {
                    "Elegir imagen"
                }
            }
            if let Some(err) = error() {
                div { class: "logo-picker-error", "⚠ {err}" }
            }
        }
    }
}
