use dioxus::prelude::*;
use pyeveryday_core::LandingController;

use crate::backdrop::{GlowOrbs, MatrixRain};
use crate::icons::ArrowRight;
use crate::terminal::Terminal;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero(page: Signal<LandingController>) -> Element {
    let repository = page.read().config().repository_url.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            MatrixRain { page }
            GlowOrbs {}

            div {
                class: "hero-content",
                Terminal { page }

                div {
                    class: "hero-actions",
                    button {
                        class: "btn btn-primary",
                        span { "Initialize Scripts" }
                        ArrowRight {}
                    }
                    a {
                        class: "btn btn-outline",
                        href: "{repository}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View on GitHub"
                    }
                }
            }
        }
    }
}
