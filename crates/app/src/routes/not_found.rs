use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-code", "404" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                "."
            }
            Link { to: Route::Gallery {}, class: "not-found-link", "Back to the gallery" }
        }
    }
}
