use dioxus::prelude::*;
use pyeveryday_core::site::{FONTS_STYLESHEET, PRECONNECT};
use pyeveryday_core::SITE;

/// Title, SEO, social cards, fonts and structured data
#[component]
pub fn SiteHead() -> Element {
    let title = SITE.title;
    let keywords = SITE.keywords_csv();
    let structured = SITE.structured_data().to_string();

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: SITE.description }
        document::Meta { name: "keywords", content: keywords }
        document::Meta { name: "author", content: SITE.author }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1, shrink-to-fit=no" }
        document::Meta { name: "theme-color", content: SITE.theme_color }
        document::Meta { name: "robots", content: "index, follow" }

        for (property, content) in SITE.social_tags() {
            document::Meta { key: "{property}", property, content }
        }

        for origin in PRECONNECT {
            document::Link { rel: "preconnect", href: origin, crossorigin: "anonymous" }
        }
        document::Link { rel: "stylesheet", href: FONTS_STYLESHEET }

        script {
            r#type: "application/ld+json",
            dangerous_inner_html: "{structured}",
        }
    }
}

/// Accessibility link that jumps past the navigation
#[component]
pub fn SkipLink() -> Element {
    rsx! {
        a { class: "skip-link", href: "#main-content", "Skip to main content" }
    }
}
