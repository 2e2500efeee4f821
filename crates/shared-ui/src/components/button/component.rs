use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Destructive => "destructive",
        }
    }
}

/// Native `type` of the rendered button element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub button_type: ButtonType,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: props.button_type.as_str(),
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(variant: ButtonVariant, button_type: ButtonType) -> Element {
        rsx! {
            Button { variant, button_type, "Submit" }
        }
    }

    fn render(variant: ButtonVariant, button_type: ButtonType) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                variant,
                button_type,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_variant_and_type() {
        let html = render(ButtonVariant::Destructive, ButtonType::Submit);
        assert!(html.contains(r#"data-style="destructive""#), "{html}");
        assert!(html.contains(r#"type="submit""#), "{html}");
        assert!(html.contains("Submit"));
    }

    #[test]
    fn defaults_to_plain_primary_button() {
        let html = render(ButtonVariant::default(), ButtonType::default());
        assert!(html.contains(r#"data-style="primary""#), "{html}");
        assert!(html.contains(r#"type="button""#), "{html}");
    }
}
