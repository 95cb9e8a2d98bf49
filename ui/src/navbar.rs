use dioxus::prelude::*;
use pyeveryday_core::LandingController;

#[component]
pub fn Navbar(mut page: Signal<LandingController>) -> Element {
    let state = page.read();
    let code_label = if state.show_code_demo() { "Hide" } else { "Show" };
    let repository = state.config().repository_url.clone();

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "brand",
                div { class: "brand-logo", span { "🐍" } }
                span { class: "brand-name gradient-text", "PyEveryday" }
            }
            div {
                class: "navbar-actions",
                button {
                    class: "pill pill-purple",
                    onclick: move |_| page.write().toggle_code_demo(),
                    "{code_label} Code"
                }
                a {
                    class: "pill pill-primary",
                    href: "{repository}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Explore Code"
                }
            }
        }
    }
}
