use dioxus::prelude::*;
use pyeveryday_core::{Category, LandingController, CATEGORIES};

const CATEGORIES_CSS: Asset = asset!("/assets/styling/categories.css");

const OCTAGON: &str =
    "polygon(20% 0%, 80% 0%, 100% 20%, 100% 80%, 80% 100%, 20% 100%, 0% 80%, 0% 20%)";

/// "Choose Your Arsenal" grid
#[component]
pub fn CategoryGrid(page: Signal<LandingController>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CATEGORIES_CSS }

        section {
            id: "categories",
            div {
                class: "section-heading",
                h2 { class: "gradient-text", "Choose Your Arsenal" }
                p {
                    "Seven powerful categories of automation tools, each designed to solve specific challenges in your digital workflow."
                }
            }
            div {
                class: "category-grid",
                for index in 0..CATEGORIES.len() {
                    CategoryCard { key: "{index}", index, page }
                }
            }
        }
    }
}

#[component]
fn CategoryCard(index: usize, mut page: Signal<LandingController>) -> Element {
    let category: &'static Category = &CATEGORIES[index];
    let state = page.read();
    let selected = state.selected_category() == Some(index);
    let hovered = state.hovered_category() == Some(index);
    let visible = state.visible_scripts(index);
    let hidden = category.hidden_scripts();

    let clip = if Category::is_octagon(index) { OCTAGON } else { "none" };
    let selected_class = if selected { "selected" } else { "" };
    let indicator_class = if hovered { "indicator lit" } else { "indicator" };

    rsx! {
        div {
            class: "category-card {category.color} {category.hover_color} {selected_class}",
            style: "clip-path: {clip}; background-image: {category.bg_pattern}, linear-gradient(135deg, var(--from), var(--to));",
            onmouseenter: move |_| page.write().hover_category(Some(index)),
            onmouseleave: move |_| page.write().hover_category(None),
            onclick: move |_| page.write().select_category(index),

            div { class: "category-overlay" }
            div { class: "category-glow" }

            div {
                class: "category-body",
                div {
                    class: "category-icons",
                    div { class: "category-emoji", "{category.emoji}" }
                    div { class: "category-icon", "{category.icon}" }
                }
                h3 { "{category.name}" }
                p { class: "category-description", "{category.description}" }

                div {
                    class: "category-scripts",
                    for (script_index, script) in visible.iter().enumerate() {
                        div {
                            key: "{script_index}",
                            class: "category-script",
                            style: format!("transition-delay: {}ms;", script_index * 50),
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                page.write().run_category_script(index, script_index);
                            },
                            "{script}"
                        }
                    }
                    if hidden > 0 && !selected {
                        div { class: "category-more", "Click to see +{hidden} more..." }
                    }
                }

                div {
                    class: "category-indicators",
                    for i in 0..3 {
                        div {
                            key: "{i}",
                            class: "{indicator_class}",
                            style: format!("animation-delay: {:.1}s;", i as f64 * 0.1),
                        }
                    }
                }
            }
        }
    }
}
