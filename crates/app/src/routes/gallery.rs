use dioxus::prelude::*;
use shared_types::{GalleryConfig, SectionConfig, StyleMap};
use shared_ui::components::{Collapsible, Separator, SubtleSeparator};

use crate::components::{resolve_open, ExpandIntent, ExpandToggle};
use crate::config::gallery_sections;

/// Most recent change entries kept in the on-page log.
const LOG_CAPACITY: usize = 20;

/// Push `line` onto `log`, dropping the oldest entries beyond [`LOG_CAPACITY`].
fn push_log(log: &mut Vec<String>, line: String) {
    log.push(line);
    if log.len() > LOG_CAPACITY {
        let excess = log.len() - LOG_CAPACITY;
        log.drain(..excess);
    }
}

/// Gallery body text spacing, with the section's own content style on top.
fn section_content_style(configured: &StyleMap) -> StyleMap {
    StyleMap::new().with("line-height", "1.6").merged(configured)
}

fn change_line(title: &str, open: bool) -> String {
    format!("{title}: {}", if open { "opened" } else { "closed" })
}

/// Showcase page listing every configured panel, separated by rules.
#[component]
pub fn Gallery() -> Element {
    let gallery = use_context::<GalleryConfig>();
    let intent = use_signal(|| None::<ExpandIntent>);
    let mut log = use_signal(Vec::<String>::new);

    let sections = gallery_sections(&gallery);
    let heading = gallery.heading.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./gallery.css") }

        div { class: "gallery-page",
            header { class: "gallery-header",
                h1 { "{heading}" }
                ExpandToggle { intent }
            }

            for (idx, section) in sections.into_iter().enumerate() {
                div { key: "{idx}", class: "gallery-item",
                    if idx > 0 {
                        Separator {}
                    }
                    GallerySection {
                        open: resolve_open(intent(), section.collapsible.open),
                        section,
                        on_log: move |line: String| push_log(&mut log.write(), line),
                    }
                }
            }

            SubtleSeparator {}

            section { class: "gallery-log",
                h2 { "Change log" }
                if log.read().is_empty() {
                    p { class: "gallery-log-empty", "No changes yet." }
                } else {
                    ul {
                        for (i, line) in log.read().iter().enumerate() {
                            li { key: "{i}", "{line}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GallerySection(section: SectionConfig, open: Option<bool>, on_log: EventHandler<String>) -> Element {
    let title = section.title.clone();
    let c = section.collapsible;

    rsx! {
        Collapsible {
            title: rsx! { span { class: "gallery-section-title", "{section.title}" } },
            initially_open: c.initially_open,
            open,
            style: c.style,
            title_style: c.title_style,
            content_style: section_content_style(&c.content_style),
            on_change: move |is_open: bool| {
                tracing::info!(section = %title, open = is_open, "panel toggled");
                on_log.call(change_line(&title, is_open));
            },
            p { "{section.body}" }
        }
    }
}
