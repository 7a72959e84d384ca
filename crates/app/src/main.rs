use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

mod components;
mod config;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // Dioxus owns the tracing subscriber.
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] failed to initialize: {e}");
    }

    config::load_config();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| config::load_config().gallery.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
