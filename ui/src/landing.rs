use dioxus::prelude::*;
use pyeveryday_core::{LandingConfig, LandingController};

use crate::backdrop::{CursorFollower, ParticleLayer};
use crate::categories::CategoryGrid;
use crate::cta::CallToAction;
use crate::footer::Footer;
use crate::hero::Hero;
use crate::navbar::Navbar;
use crate::platform;
use crate::showcase::CodeShowcase;
use crate::stats::StatsDashboard;

const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");

/// The whole landing page. Owns the controller for the lifetime of the view.
#[component]
pub fn LandingPage(config: LandingConfig) -> Element {
    let mut page = use_signal(move || {
        let seed = config.seed.unwrap_or_else(platform::random_seed);
        let mut controller = LandingController::new(config.with_seed(seed));
        controller.start();
        controller
    });

    use_future(move || platform::run_schedule(page));
    use_future(move || platform::run_browser_bridge(page));

    use_future(move || async move {
        let path = page.peek().config().service_worker_path.clone();
        match platform::register_service_worker(&path).await {
            Ok(()) => tracing::info!("ServiceWorker registration successful"),
            Err(e) => tracing::warn!("ServiceWorker registration failed: {}", e),
        }
    });

    use_drop(move || {
        if let Ok(mut controller) = page.try_write() {
            controller.stop();
        }
    });

    let on_pointer = move |evt: MouseEvent| {
        let point = evt.client_coordinates();
        page.write().pointer_moved(point.x, point.y);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }

        div {
            class: "landing",
            onmousemove: on_pointer,

            ParticleLayer { page }
            CursorFollower { page }
            Navbar { page }
            Hero { page }
            CategoryGrid { page }
            CodeShowcase { page }
            StatsDashboard { page }
            CallToAction { page }
            Footer { page }
        }
    }
}
