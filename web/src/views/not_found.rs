use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No page at /{}", path);

    rsx! {
        div {
            class: "not-found",
            h1 { class: "gradient-text", "404" }
            p { "There is no script at /{path}." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Back to PyEveryday" }
        }
    }
}
