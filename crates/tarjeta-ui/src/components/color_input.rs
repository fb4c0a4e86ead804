//! Color picker field.

use dioxus::prelude::*;

use super::input::rand_id;

/// Properties for the ColorInput component
#[derive(Clone, PartialEq, Props)]
pub struct ColorInputProps {
    /// Current color as `#rrggbb`
    pub value: String,
    /// Handler called with the newly picked color
    pub oninput: EventHandler<String>,
    /// Label above the swatch
    #[props(default)]
    pub label: Option<String>,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Native color picker bound to a `#rrggbb` string
#[component]
pub fn ColorInput(props: ColorInputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("color-{}", rand_id()));

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "field-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "color-field",
                r#type: "color",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
