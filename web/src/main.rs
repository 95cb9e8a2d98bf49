use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use ui::{SiteHead, SkipLink};
use views::{Home, NotFound};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Logger already installed: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "apple-touch-icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SiteHead {}

        SkipLink {}
        main {
            id: "main-content",
            Router::<Route> {}
        }
    }
}
