//! Messages posted from the browser back into the controller

use crate::error::{LandingError, Result};
use serde::{Deserialize, Serialize};

/// Script installed in the page. Reports the scroll offset (immediately and on every
/// scroll) and the wall-clock time once a second through `dioxus.send`.
pub const BRIDGE_SCRIPT: &str = r#"
const report = () => dioxus.send({ kind: "scroll", offset: window.scrollY, viewport: window.innerHeight });
const tick = () => dioxus.send({ kind: "clock", time: new Date().toLocaleTimeString() });
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report, { passive: true });
report();
tick();
setInterval(tick, 1000);
await new Promise(() => {});
"#;

/// Script that registers the service worker and reports the outcome.
/// `{path}` is replaced with the configured worker path.
const SERVICE_WORKER_SCRIPT: &str = r#"
if (!("serviceWorker" in navigator)) {
    dioxus.send({ ok: false, error: "service workers are not supported" });
} else {
    navigator.serviceWorker.register("{path}")
        .then(() => dioxus.send({ ok: true, error: null }))
        .catch((err) => dioxus.send({ ok: false, error: String(err) }));
}
"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrowserEvent {
    Scroll { offset: f64, viewport: f64 },
    Clock { time: String },
}

impl BrowserEvent {
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| LandingError::Bridge(e.to_string()))
    }
}

/// Reply from [`service_worker_script`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub ok: bool,
    pub error: Option<String>,
}

impl RegistrationOutcome {
    pub fn into_result(self) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(LandingError::ServiceWorker(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Registration script for the worker served at `path`
pub fn service_worker_script(path: &str) -> Result<String> {
    // JSON string encoding doubles as JS string escaping
    let quoted = serde_json::to_string(path)?;
    Ok(SERVICE_WORKER_SCRIPT.replace("\"{path}\"", &quoted))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_scroll() {
        let event =
            BrowserEvent::from_value(json!({ "kind": "scroll", "offset": 1200.5, "viewport": 800.0 }))
                .unwrap();
        assert_eq!(
            event,
            BrowserEvent::Scroll {
                offset: 1200.5,
                viewport: 800.0
            }
        );
    }

    #[test]
    fn test_parse_clock() {
        let event = BrowserEvent::from_value(json!({ "kind": "clock", "time": "10:42:07 AM" })).unwrap();
        assert_eq!(
            event,
            BrowserEvent::Clock {
                time: "10:42:07 AM".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_a_bridge_error() {
        let err = BrowserEvent::from_value(json!({ "kind": "resize" })).unwrap_err();
        assert!(matches!(err, LandingError::Bridge(_)));
    }

    #[test]
    fn test_registration_outcome() {
        let ok = RegistrationOutcome { ok: true, error: None };
        assert!(ok.into_result().is_ok());

        let failed = RegistrationOutcome {
            ok: false,
            error: Some("SecurityError".to_string()),
        };
        assert_eq!(
            failed.into_result().unwrap_err(),
            LandingError::ServiceWorker("SecurityError".to_string())
        );
    }

    #[test]
    fn test_service_worker_script_quotes_path() {
        let script = service_worker_script("/sw.js").unwrap();
        assert!(script.contains(r#"register("/sw.js")"#));
        assert!(!script.contains("{path}"));
    }
}
