use dioxus::prelude::*;
use shared_types::FieldMeta;

/// Wrapper class for a field row; `has-danger` only once touched with an error.
pub fn field_class(meta: &FieldMeta) -> &'static str {
    if meta.has_danger() {
        "form-group has-danger"
    } else {
        "form-group"
    }
}

/// Labeled single-line text input bound to explicit form-state callbacks.
///
/// The caller owns the value and the [`FieldMeta`]; this component only
/// reports `on_value_change` / `on_focus` / `on_blur` and renders the help
/// line. The error text is shown only after the field has been touched.
#[component]
pub fn TextField(
    label: String,
    name: String,
    #[props(default)] value: String,
    #[props(default)] meta: FieldMeta,
    #[props(default)] on_value_change: EventHandler<String>,
    #[props(default)] on_focus: EventHandler<()>,
    #[props(default)] on_blur: EventHandler<()>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let help = meta.visible_error().unwrap_or_default().to_string();

    rsx! {
        div { class: field_class(&meta),
            label { "{label}" }
            input {
                r#type: "text",
                class: "form-control",
                name: "{name}",
                value: value,
                disabled: disabled,
                oninput: move |evt| on_value_change.call(evt.value()),
                onfocus: move |_| on_focus.call(()),
                onblur: move |_| on_blur.call(()),
            }
            div { class: "text-help", "{help}" }
        }
    }
}
