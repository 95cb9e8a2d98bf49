use dioxus::prelude::*;
use pyeveryday_core::{LandingController, CATEGORIES};

#[component]
pub fn StatsDashboard(page: Signal<LandingController>) -> Element {
    let stats = page.read().stats();
    let bounce = if stats.animated { "bounce" } else { "" };

    rsx! {
        section {
            id: "stats",
            div {
                class: "stats-grid",

                div {
                    class: "stat-card stat-cyan {bounce}",
                    div { class: "stat-value", "{stats.scripts}" }
                    div { class: "stat-label", "Python Scripts" }
                    div {
                        class: "stat-tags",
                        span { "Automation" }
                        span { "Productivity" }
                        span { "Utilities" }
                    }
                }

                div {
                    class: "stat-card stat-purple {bounce}",
                    style: "animation-delay: 0.2s;",
                    div { class: "stat-value", "{stats.categories}" }
                    div { class: "stat-label", "Categories" }
                    div { class: "stat-caption", "Covering all aspects of automation" }
                    div {
                        class: "stat-tags",
                        for (i, category) in CATEGORIES.iter().take(4).enumerate() {
                            span { key: "{i}", "{category.emoji} {category.name}" }
                        }
                    }
                }

                div {
                    class: "stat-card stat-pink {bounce}",
                    style: "animation-delay: 0.4s;",
                    div { class: "stat-value", "∞" }
                    div { class: "stat-label", "Possibilities" }
                    div { class: "stat-caption", "Unlimited automation potential" }
                    ul {
                        class: "stat-list",
                        li { "Email automation" }
                        li { style: "animation-delay: 0.3s;", "File management" }
                        li { style: "animation-delay: 0.6s;", "Data processing" }
                    }
                }
            }
        }
    }
}
