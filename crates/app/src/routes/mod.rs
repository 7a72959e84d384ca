pub mod gallery;
pub mod not_found;

use dioxus::prelude::*;

use gallery::Gallery;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
