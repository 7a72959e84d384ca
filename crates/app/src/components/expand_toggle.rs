use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronsDownUp, LdChevronsUpDown};
use dioxus_free_icons::Icon;
use shared_ui::components::{Button, ButtonVariant};

/// Gallery-wide request to open or close every panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpandIntent {
    ExpandAll,
    CollapseAll,
}

impl ExpandIntent {
    /// The `open` value handed to each panel.
    pub fn open(&self) -> bool {
        matches!(self, ExpandIntent::ExpandAll)
    }
}

/// Resolve the `open` value for one panel: the gallery-wide intent when the
/// user picked one, otherwise whatever the panel's own config says.
pub fn resolve_open(intent: Option<ExpandIntent>, configured: Option<bool>) -> Option<bool> {
    intent.map(|i| i.open()).or(configured)
}

/// Two buttons that drive every panel through its external `open` value.
///
/// Panels react only when the intent changes, so pressing "Collapse all"
/// twice in a row does not close a panel the user reopened in between.
#[component]
pub fn ExpandToggle(mut intent: Signal<Option<ExpandIntent>>) -> Element {
    let current = *intent.read();

    rsx! {
        div { class: "expand-toggle",
            Button {
                variant: if current == Some(ExpandIntent::ExpandAll) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                pressed: current == Some(ExpandIntent::ExpandAll),
                onclick: move |_| intent.set(Some(ExpandIntent::ExpandAll)),
                Icon::<LdChevronsUpDown> { icon: LdChevronsUpDown, width: 16, height: 16 }
                "Expand all"
            }
            Button {
                variant: if current == Some(ExpandIntent::CollapseAll) { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                pressed: current == Some(ExpandIntent::CollapseAll),
                onclick: move |_| intent.set(Some(ExpandIntent::CollapseAll)),
                Icon::<LdChevronsDownUp> { icon: LdChevronsDownUp, width: 16, height: 16 }
                "Collapse all"
            }
        }
    }
}
