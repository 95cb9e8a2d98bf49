use dioxus::prelude::*;
use pyeveryday_core::LandingController;

const SHOWCASE_CSS: Asset = asset!("/assets/styling/showcase.css");

const CODE_LINES: usize = 15;

/// "See It In Action" code editor mockup
#[component]
pub fn CodeShowcase(mut page: Signal<LandingController>) -> Element {
    let show_demo = page.read().show_code_demo();
    let editor_class = if show_demo { "editor expanded" } else { "editor" };

    rsx! {
        document::Link { rel: "stylesheet", href: SHOWCASE_CSS }

        section {
            id: "showcase",
            div {
                class: "section-heading",
                h2 { class: "gradient-text", "See It In Action" }
                p { "Real Python scripts, real automation, real results." }
            }

            div {
                class: "{editor_class}",
                div {
                    class: "editor-header",
                    div {
                        class: "terminal-lights",
                        span { class: "light light-red" }
                        span { class: "light light-yellow" }
                        span { class: "light light-green" }
                    }
                    span { class: "editor-file", "file_organizer.py" }
                    div {
                        class: "editor-badges",
                        span { class: "badge badge-blue", "Python" }
                        span { class: "badge badge-green", "Active" }
                    }
                }

                div {
                    class: "editor-body",
                    div {
                        class: "line-numbers",
                        for n in 1..=CODE_LINES {
                            div { key: "{n}", "{n}" }
                        }
                    }
                    CodeSample {}
                }

                if show_demo {
                    div {
                        class: "editor-run",
                        button {
                            class: "btn btn-run",
                            onclick: move |_| page.write().run_code_demo(),
                            "Run Code"
                        }
                    }
                }
            }

            if show_demo {
                div {
                    class: "run-stats",
                    div { class: "run-stat", span { class: "run-stat-value", "1.2s" } span { "Execution Time" } }
                    div { class: "run-stat", span { class: "run-stat-value", "47" } span { "Files Processed" } }
                    div { class: "run-stat", span { class: "run-stat-value", "4" } span { "Folders Created" } }
                }
            }
        }
    }
}

#[component]
fn CodeSample() -> Element {
    rsx! {
        div {
            class: "code",
            div { class: "code-comment", "# PyEveryday - File Organizer" }
            div {
                span { class: "kw", "import " }
                span { class: "name", "os" }
                ", "
                span { class: "name", "shutil" }
            }
            div {
                span { class: "kw", "from " }
                span { class: "name", "pathlib" }
                span { class: "kw", " import " }
                span { class: "name", "Path" }
            }
            br {}
            div {
                span { class: "kw", "def " }
                span { class: "fn", "organize_files" }
                "(directory):"
            }
            div {
                class: "indent",
                div { class: "code-comment", "# Automatically sort files by type" }
                div {
                    span { class: "kw", "for " }
                    "file "
                    span { class: "kw", "in " }
                    "Path(directory).iterdir():"
                }
                div {
                    class: "indent",
                    div {
                        span { class: "kw", "if " }
                        "file.is_file():"
                    }
                    div {
                        class: "indent",
                        div { "extension = file.suffix.lower()" }
                        div { "create_folder_and_move(file, extension)" }
                    }
                }
            }
            br {}
            div { class: "code-comment", "# ✨ Your messy downloads folder becomes organized in seconds!" }
        }
    }
}
