use dioxus::prelude::*;
use pyeveryday_core::{LandingController, SITE};

use crate::icons::GithubMark;

#[component]
pub fn Footer(page: Signal<LandingController>) -> Element {
    let repository = page.read().config().repository_url.clone();
    let name = SITE.name;
    let author = SITE.author;

    rsx! {
        footer {
            class: "footer",
            div {
                class: "brand",
                div { class: "brand-logo", span { "🐍" } }
                span { class: "brand-name gradient-text", "{name}" }
            }
            p { class: "footer-tagline", "Automating the future, one Python script at a time." }

            div {
                class: "footer-links",
                a {
                    href: "{repository}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "GitHub Repository"
                }
                button { "Documentation" }
                button { "License" }
            }

            div {
                class: "footer-bottom",
                div { "© 2025 PyEveryday • Open Source • Built by {author}" }
                div {
                    class: "footer-social",
                    a {
                        href: "{repository}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        GithubMark {}
                    }
                    span { class: "social", "𝕏" }
                    span { class: "social", "in" }
                }
            }
        }
    }
}
