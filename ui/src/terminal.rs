use dioxus::prelude::*;
use pyeveryday_core::{LandingController, CATEGORIES};

const TERMINAL_CSS: Asset = asset!("/assets/styling/terminal.css");

/// The mock terminal in the hero section
#[component]
pub fn Terminal(mut page: Signal<LandingController>) -> Element {
    let state = page.read();
    let category = state.active_category();
    let prompt_dir = category.name.to_lowercase();
    let loaded = if state.is_loaded() { "loaded" } else { "" };
    let focused = if state.terminal_focused() { "focused" } else { "" };
    let cursor = if state.cursor_visible() { "visible" } else { "hidden" };
    let category_count = CATEGORIES.len();
    let clock = state.clock_label().to_string();
    let input = state.terminal_input().to_string();
    let typed = state.typed_text();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        page.write().submit_terminal();
    };

    rsx! {
        document::Link { rel: "stylesheet", href: TERMINAL_CSS }

        div {
            class: "terminal {loaded} {focused}",

            div {
                class: "terminal-header",
                div {
                    class: "terminal-lights",
                    button {
                        class: "light light-red",
                        title: "Clear history",
                        onclick: move |_| page.write().reset_history(),
                    }
                    button { class: "light light-yellow" }
                    button {
                        class: "light light-green",
                        title: "Toggle focus",
                        onclick: move |_| page.write().toggle_terminal_focus(),
                    }
                }
                span { class: "terminal-title", "user@pyeveryday:~$ {prompt_dir}" }
                div { class: "terminal-clock", "{clock}" }
            }

            div {
                class: "terminal-body",
                div { class: "line line-command", "$ python3 pyeveryday.py --initialize" }
                div { class: "line line-banner", "🐍 PyEveryday Automation Suite v2.0.1" }

                for (i, line) in state.history().lines().iter().enumerate() {
                    div { key: "{i}", class: "line line-history", "{line}" }
                }

                div {
                    class: "boot-log",
                    div {
                        class: "line line-info",
                        "Loading {category_count} script categories"
                        span {
                            class: "loading-dots",
                            span { class: "dot bounce", style: "animation-duration: 1.5s;" }
                            span { class: "dot bounce", style: "animation-delay: 0.15s; animation-duration: 1.5s;" }
                            span { class: "dot bounce", style: "animation-delay: 0.3s; animation-duration: 1.5s;" }
                        }
                    }
                    div { class: "line line-ok", "Found 25+ automation tools" }
                    div { class: "line line-ok", "Ready to transform your workflow" }
                }

                div {
                    class: "active-module",
                    div {
                        class: "active-module-title",
                        span { class: "active-module-icon", "{category.icon}" }
                        "Active Module: "
                        span { class: "active-module-name", "{category.name}" }
                    }
                    div { class: "active-module-description", "{category.description}" }
                    div {
                        class: "chips",
                        for (i, script) in category.scripts.iter().enumerate() {
                            span {
                                key: "{i}",
                                class: "chip",
                                onclick: move |_| page.write().run_active_script(i),
                                "{script}"
                            }
                        }
                    }
                }

                form {
                    class: "prompt",
                    onsubmit: on_submit,
                    span { class: "prompt-sign", "$" }
                    input {
                        r#type: "text",
                        class: "prompt-input",
                        value: "{input}",
                        placeholder: "{typed}",
                        oninput: move |evt: FormEvent| page.write().set_terminal_input(evt.value()),
                        onfocus: move |_| page.write().set_terminal_focus(true),
                        onblur: move |_| page.write().set_terminal_focus(false),
                    }
                    span { class: "prompt-cursor {cursor}", "_" }
                }
            }
        }
    }
}
