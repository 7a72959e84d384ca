use dioxus::prelude::*;

/// Visual variant for buttons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default = false)]
    pub disabled: bool,
    /// Set for toggle buttons; rendered as `aria-pressed`.
    #[props(default)]
    pub pressed: Option<bool>,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A plain `type="button"` button styled by variant.
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut base = vec![
        Attribute::new("class", "button", None, false),
        Attribute::new("data-style", props.variant.class(), None, false),
    ];
    if let Some(pressed) = props.pressed {
        base.push(Attribute::new(
            "aria-pressed",
            if pressed { "true" } else { "false" },
            None,
            false,
        ));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "button",
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

    #[test]
    fn renders_variant_and_type() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { variant: ButtonVariant::Secondary, "Go" }
        });
        assert!(html.contains(r#"type="button""#), "{html}");
        assert!(html.contains(r#"data-style="secondary""#), "{html}");
        assert!(html.contains("Go"));
        assert!(!html.contains("aria-pressed"), "{html}");
    }

    #[test]
    fn pressed_state_is_exposed() {
        let html = dioxus_ssr::render_element(rsx! {
            Button { pressed: true, "On" }
        });
        assert!(html.contains(r#"aria-pressed="true""#), "{html}");
    }
}
