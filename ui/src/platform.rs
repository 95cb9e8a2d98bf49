use dioxus::prelude::*;
use pyeveryday_core::{BrowserEvent, LandingController, LandingError, Result, BRIDGE_SCRIPT};
use std::time::Duration;

/// Wait on the host's timer facility
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Seed for cosmetic randomness when the config does not pin one
pub fn random_seed() -> u64 {
    #[cfg(feature = "web")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u64 ^ js_sys::Date::now() as u64
    }

    #[cfg(not(feature = "web"))]
    {
        0x5eed
    }
}

/// Drive the controller's schedule until it is stopped
pub async fn run_schedule(mut page: Signal<LandingController>) {
    loop {
        let Some(wait) = page.peek().next_wake() else {
            tracing::debug!("schedule idle, leaving timer loop");
            break;
        };
        sleep(Duration::from_millis(wait)).await;
        page.write().advance(wait);
    }
}

/// Forward scroll offsets and the wall clock from the page into the controller
pub async fn run_browser_bridge(mut page: Signal<LandingController>) {
    let mut eval = document::eval(BRIDGE_SCRIPT);
    loop {
        let value = match eval.recv::<serde_json::Value>().await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Browser bridge closed: {:?}", e);
                break;
            }
        };
        match BrowserEvent::from_value(value) {
            Ok(event) => page.write().apply_browser_event(event),
            Err(e) => tracing::warn!("Ignoring bridge message: {}", e),
        }
    }
}

/// Register the offline worker. Best effort: the caller only logs the outcome.
pub async fn register_service_worker(path: &str) -> Result<()> {
    #[cfg(feature = "web")]
    {
        use pyeveryday_core::{service_worker_script, RegistrationOutcome};

        let script = service_worker_script(path)?;
        let mut eval = document::eval(&script);
        let outcome: RegistrationOutcome = eval
            .recv()
            .await
            .map_err(|e| LandingError::ServiceWorker(format!("{:?}", e)))?;
        outcome.into_result()
    }

    #[cfg(not(feature = "web"))]
    {
        Err(LandingError::ServiceWorker(format!(
            "service workers are not available on this platform ({path})"
        )))
    }
}
