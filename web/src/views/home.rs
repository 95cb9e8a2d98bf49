use dioxus::prelude::*;
use ui::LandingPage;

use crate::config::landing_config;

#[component]
pub fn Home() -> Element {
    rsx! {
        LandingPage { config: landing_config() }
    }
}
