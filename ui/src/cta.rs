use dioxus::prelude::*;
use pyeveryday_core::LandingController;

use crate::icons::ArrowRight;

/// "Ready to Automate?" section
#[component]
pub fn CallToAction(page: Signal<LandingController>) -> Element {
    let state = page.read();
    let repository = state.config().repository_url.clone();

    rsx! {
        section {
            id: "cta",
            div {
                class: "bubbles",
                for (i, bubble) in state.backdrop().bubbles.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "bubble pulse",
                        style: format!(
                            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                            bubble.left, bubble.top, bubble.diameter, bubble.diameter, bubble.delay_s, bubble.duration_s
                        ),
                    }
                }
            }

            div {
                class: "cta-panel",
                h2 { class: "gradient-text", "Ready to Automate?" }
                p {
                    "Join the automation revolution. Download, customize, and deploy Python scripts that work 24/7 for you."
                }

                div {
                    class: "cta-features",
                    Feature { icon: "⚡", label: "Instant Setup" }
                    Feature { icon: "🔧", label: "Easy Customization" }
                    Feature { icon: "🚀", label: "Deploy Anywhere" }
                }

                a {
                    class: "btn btn-primary btn-large",
                    href: "{repository}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    span { "Deploy Scripts" }
                    ArrowRight {}
                }

                div {
                    class: "social-proof",
                    span { class: "live-dot pulse" }
                    span { "25+ Scripts Active" }
                    span { class: "live-dot pulse", style: "animation-delay: 0.5s;" }
                    span { "Open Source" }
                    span { class: "live-dot pulse", style: "animation-delay: 1s;" }
                    span { "MIT Licensed" }
                }
            }
        }
    }
}

#[component]
fn Feature(icon: &'static str, label: &'static str) -> Element {
    rsx! {
        div {
            class: "cta-feature",
            div { class: "cta-feature-icon", "{icon}" }
            div { class: "cta-feature-label", "{label}" }
        }
    }
}
