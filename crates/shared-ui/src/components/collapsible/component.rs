use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{CollapsibleConfig, CollapsibleState, CollapsibleStore, LayoutSnapshot, StyleMap};

/// Measure the natural height of the mounted content region.
///
/// An unmounted region, or a renderer that cannot measure, yields a
/// zero-height snapshot.
async fn measure_content(node: Option<Rc<MountedData>>) -> LayoutSnapshot {
    let Some(node) = node else {
        return LayoutSnapshot::missing();
    };
    match node.get_client_rect().await {
        Ok(rect) => LayoutSnapshot::measured(rect.height()),
        Err(e) => {
            tracing::debug!(error = ?e, "collapsible content could not be measured");
            LayoutSnapshot::missing()
        }
    }
}

/// Owns the panel's [`CollapsibleStore`] for the lifetime of the component.
///
/// The store itself is not reactive. A subscriber copies every new state into
/// the returned signal, which is what the component renders from, and the
/// store's change listener forwards flips to the latest `on_change` handler.
fn use_collapsible_store(
    config: &CollapsibleConfig,
    on_change: Option<EventHandler<bool>>,
) -> (CopyValue<CollapsibleStore>, Signal<CollapsibleState>) {
    let mut listener = use_hook(|| CopyValue::new(on_change));
    listener.set(on_change);

    let mut rendered = use_signal(|| CollapsibleState::from_config(config));
    let store = use_hook(|| {
        let mut store = CollapsibleStore::from_config(config);
        store.subscribe(move |state| rendered.set(*state));
        store.set_on_change(move |open| {
            if let Some(handler) = *listener.peek() {
                handler.call(open);
            }
        });
        CopyValue::new(store)
    });
    (store, rendered)
}

/// Measure the content and flip the panel. Returns the new open value.
async fn toggle_panel(
    mut store: CopyValue<CollapsibleStore>,
    content_node: Signal<Option<Rc<MountedData>>>,
) -> bool {
    let node = content_node.peek().clone();
    let layout = measure_content(node).await;
    store.write().toggle(layout)
}

/// Follow a new external `open` value.
///
/// The value is recorded before anything is awaited, so a second change that
/// arrives while the first is still measuring is compared against it. The
/// measuring task only flips the panel if `next` is still the latest value.
fn sync_external_open(
    mut store: CopyValue<CollapsibleStore>,
    content_node: Signal<Option<Rc<MountedData>>>,
    next: bool,
) {
    if !store.write().record_external_open(next) {
        return;
    }
    spawn(async move {
        let node = content_node.peek().clone();
        let layout = measure_content(node).await;
        if store.write().resync(next, layout).is_none() {
            tracing::trace!(next, "external open value needed no flip");
        }
    });
}

/// A panel whose content opens and closes when its title is clicked.
///
/// The open/closed state lives in the component. Passing `open` lets the
/// parent drive it as well: whenever `open` changes to a value different
/// from the previous one, the panel toggles to match. Re-rendering with the
/// same `open` value never undoes a click.
///
/// ```rust,ignore
/// Collapsible {
///     title: rsx! { "Click me to open/close the content" },
///     style: StyleMap::new().with("border", "1px solid").with("padding", "15px"),
///     content_style: StyleMap::new().with("padding-top", "15px"),
///     on_change: move |open: bool| tracing::info!(open, "panel changed"),
///     "This is the content"
/// }
/// ```
#[component]
pub fn Collapsible(
    /// Clickable label, always shown.
    title: Element,
    children: Element,
    #[props(default = true)] initially_open: bool,
    open: Option<bool>,
    /// Called with the new value after every toggle.
    on_change: Option<EventHandler<bool>>,
    #[props(default)] style: StyleMap,
    #[props(default)] title_style: StyleMap,
    #[props(default)] content_style: StyleMap,
    #[props(into)] class: Option<String>,
) -> Element {
    let config = CollapsibleConfig {
        initially_open,
        open,
        ..Default::default()
    };
    let (store, rendered) = use_collapsible_store(&config, on_change);
    let mut content_node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Resync with the parent only when `open` itself changes.
    use_effect(use_reactive((&open,), move |(open,)| {
        if let Some(next) = open {
            sync_external_open(store, content_node, next);
        }
    }));

    let state = *rendered.read();
    let is_open = state.is_open();

    let mut classes = vec!["collapsible"];
    if is_open {
        classes.push("collapsible-open");
    }
    if let Some(extra) = class.as_deref() {
        classes.push(extra);
    }
    let container_class = classes.join(" ");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "{container_class}",
            "data-state": state.toggle_state().as_str(),
            style: style.inline(),
            button {
                class: "collapsible-title",
                r#type: "button",
                aria_expanded: if is_open { "true" } else { "false" },
                style: title_style.inline(),
                onclick: move |_| {
                    spawn(async move {
                        toggle_panel(store, content_node).await;
                    });
                },
                {title}
                svg {
                    class: "collapsible-chevron",
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M6 9l6 6 6-6" }
                }
            }
            div {
                class: "collapsible-content-container",
                style: state.max_height().to_css(),
                div {
                    class: "collapsible-content",
                    style: content_style.inline(),
                    onmounted: move |evt| content_node.set(Some(evt.data())),
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(element: Element) -> String {
        dioxus_ssr::render_element(element)
    }

    #[test]
    fn renders_open_by_default() {
        let html = render(rsx! {
            Collapsible { title: rsx! { "Details" }, "Body text" }
        });
        assert!(html.contains(r#"class="collapsible collapsible-open""#), "{html}");
        assert!(html.contains(r#"data-state="open""#), "{html}");
        assert!(html.contains(r#"aria-expanded="true""#), "{html}");
        assert!(html.contains("Details"));
        assert!(html.contains("Body text"));
        // nothing measured yet, so the open panel is unconstrained
        assert!(!html.contains("max-height"), "{html}");
    }

    #[test]
    fn initially_closed_panel_is_collapsed() {
        let html = render(rsx! {
            Collapsible { title: rsx! { "Details" }, initially_open: false, "Body text" }
        });
        assert!(!html.contains("collapsible-open"), "{html}");
        assert!(html.contains(r#"data-state="closed""#), "{html}");
        assert!(html.contains(r#"aria-expanded="false""#), "{html}");
        assert!(html.contains("max-height: 0px"), "{html}");
    }

    #[test]
    fn external_open_overrides_initial_value() {
        let html = render(rsx! {
            Collapsible { title: rsx! { "Details" }, initially_open: true, open: false, "Body" }
        });
        assert!(html.contains(r#"data-state="closed""#), "{html}");
    }

    #[test]
    fn styles_and_extra_class_pass_through() {
        let html = render(rsx! {
            Collapsible {
                title: rsx! { "Details" },
                class: "faq",
                style: StyleMap::new().with("border", "1px solid").with("padding", "15px"),
                title_style: StyleMap::new().with("font-weight", "bold"),
                content_style: StyleMap::new().with("padding-top", "15px"),
                "Body"
            }
        });
        assert!(html.contains(r#"class="collapsible collapsible-open faq""#), "{html}");
        assert!(html.contains(r#"style="border: 1px solid; padding: 15px""#), "{html}");
        assert!(html.contains(r#"style="font-weight: bold""#), "{html}");
        assert!(html.contains(r#"style="padding-top: 15px""#), "{html}");
    }

    #[test]
    fn content_is_rendered_even_when_closed() {
        // Hiding is done by the max-height transition, not by unmounting.
        let html = render(rsx! {
            Collapsible { title: rsx! { "T" }, initially_open: false, p { "hidden body" } }
        });
        assert_eq!(html.matches("hidden body").count(), 1);
    }

    mod live {
        use super::*;
        use dioxus::dioxus_core::NoOpMutations;
        use std::cell::{Cell, RefCell};
        use std::time::Duration;

        thread_local! {
            static OPEN: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
            static CHANGES: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
        }

        fn record_change(open: bool) {
            CHANGES.with(|c| c.borrow_mut().push(open));
        }

        fn changes() -> Vec<bool> {
            CHANGES.with(|c| c.borrow().clone())
        }

        /// Parent that drives the panel through a signal the test can reach.
        #[component]
        fn Host(initial: bool) -> Element {
            let open = use_signal(|| initial);
            OPEN.with(|cell| cell.set(Some(open)));
            rsx! {
                Collapsible {
                    title: rsx! { "Details" },
                    open: open(),
                    on_change: move |value| record_change(value),
                    "Body"
                }
            }
        }

        /// Runs the same path as a title click, once, on first render.
        #[component]
        fn ClickHost() -> Element {
            let config = CollapsibleConfig {
                initially_open: false,
                ..Default::default()
            };
            let (store, rendered) =
                use_collapsible_store(&config, Some(EventHandler::new(record_change)));
            let content_node = use_signal(|| None);
            use_hook(move || {
                spawn(async move {
                    toggle_panel(store, content_node).await;
                });
            });
            let state = *rendered.read();
            rsx! {
                div {
                    "data-state": state.toggle_state().as_str(),
                    style: state.max_height().to_css(),
                }
            }
        }

        fn mount(mut dom: VirtualDom) -> VirtualDom {
            OPEN.with(|cell| cell.set(None));
            CHANGES.with(|c| c.borrow_mut().clear());
            dom.rebuild_in_place();
            dom
        }

        async fn step(dom: &mut VirtualDom) -> bool {
            let ready = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work())
                .await
                .is_ok();
            if ready {
                dom.render_immediate(&mut NoOpMutations);
            }
            ready
        }

        async fn settle(dom: &mut VirtualDom) {
            for _ in 0..20 {
                if !step(dom).await {
                    break;
                }
            }
        }

        fn set_open(dom: &VirtualDom, value: bool) {
            dom.in_runtime(|| {
                let mut open = OPEN.with(|cell| cell.get()).expect("host rendered");
                open.set(value);
            });
        }

        #[tokio::test]
        async fn external_close_converges_and_notifies_once() {
            let mut dom = mount(VirtualDom::new_with_props(Host, HostProps { initial: true }));
            settle(&mut dom).await;
            assert!(dioxus_ssr::render(&dom).contains(r#"data-state="open""#));

            set_open(&dom, false);
            settle(&mut dom).await;

            let html = dioxus_ssr::render(&dom);
            assert!(html.contains(r#"data-state="closed""#), "{html}");
            assert!(html.contains("max-height: 0px"), "{html}");
            assert_eq!(changes(), vec![false]);
        }

        #[tokio::test]
        async fn rerender_with_same_open_value_does_nothing() {
            let mut dom = mount(VirtualDom::new_with_props(Host, HostProps { initial: false }));
            settle(&mut dom).await;

            set_open(&dom, false);
            settle(&mut dom).await;

            let html = dioxus_ssr::render(&dom);
            assert!(html.contains(r#"data-state="closed""#), "{html}");
            assert!(changes().is_empty());
        }

        #[tokio::test]
        async fn external_flip_back_ends_on_latest_value() {
            let mut dom = mount(VirtualDom::new_with_props(Host, HostProps { initial: true }));
            settle(&mut dom).await;

            set_open(&dom, false);
            step(&mut dom).await;
            set_open(&dom, true);
            settle(&mut dom).await;

            let html = dioxus_ssr::render(&dom);
            assert!(html.contains(r#"data-state="open""#), "{html}");
            // Either both flips happened or neither did.
            let seen = changes();
            assert!(seen.is_empty() || seen == vec![false, true], "{seen:?}");
        }

        #[tokio::test]
        async fn title_click_opens_with_margin() {
            let mut dom = mount(VirtualDom::new(ClickHost));
            assert!(dioxus_ssr::render(&dom).contains(r#"data-state="closed""#));

            settle(&mut dom).await;

            // Nothing is mounted, so the content counts as zero height.
            let html = dioxus_ssr::render(&dom);
            assert!(html.contains(r#"data-state="open""#), "{html}");
            assert!(html.contains("max-height: 500px"), "{html}");
            assert_eq!(changes(), vec![true]);
        }
    }
}
