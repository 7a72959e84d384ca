use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

/// Visual weight of a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorVariant {
    /// Full-strength rule placed between components.
    #[default]
    Primary,
    Subtle,
}

impl SeparatorVariant {
    pub fn class(&self) -> &'static str {
        match self {
            SeparatorVariant::Primary => "separator-primary",
            SeparatorVariant::Subtle => "separator-subtle",
        }
    }
}

fn styled_separator(mut props: prim::SeparatorProps, variant: SeparatorVariant) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        format!("separator {}", variant.class()),
        None,
        false,
    ));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Separator { ..props }
    }
}

/// A generic rule to be placed between components.
#[component]
pub fn Separator(props: prim::SeparatorProps) -> Element {
    styled_separator(props, SeparatorVariant::Primary)
}

/// A lighter rule for separating sub-sections.
#[component]
pub fn SubtleSeparator(props: prim::SeparatorProps) -> Element {
    styled_separator(props, SeparatorVariant::Subtle)
}
