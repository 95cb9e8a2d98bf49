//! This crate contains all shared UI for the PyEveryday landing page.

mod backdrop;
mod categories;
mod cta;
mod footer;
mod head;
mod hero;
mod icons;
mod landing;
mod navbar;
mod platform;
mod showcase;
mod stats;
mod terminal;

pub use head::{SiteHead, SkipLink};
pub use landing::LandingPage;
