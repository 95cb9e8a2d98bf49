//! PyEveryday Core Library
//!
//! Renderer-independent state for the PyEveryday landing page: the static script
//! catalog, the timer schedule and the controller that animates the page.

pub mod backdrop;
pub mod bridge;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod particles;
pub mod schedule;
pub mod site;
pub mod typewriter;

pub use backdrop::{Backdrop, Bubble, MatrixGlyph};
pub use bridge::{service_worker_script, BrowserEvent, RegistrationOutcome, BRIDGE_SCRIPT};
pub use catalog::{Category, CATEGORIES, TERMINAL_COMMANDS};
pub use config::LandingConfig;
pub use controller::{Follower, LandingController, Stats};
pub use error::{LandingError, Result};
pub use history::TerminalHistory;
pub use particles::{Particle, ParticleField};
pub use schedule::{Scheduler, Timer};
pub use site::{SiteMetadata, SITE};
