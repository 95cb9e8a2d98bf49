use dioxus::prelude::*;
use pyeveryday_core::LandingController;

/// Floating dots behind everything
#[component]
pub fn ParticleLayer(page: Signal<LandingController>) -> Element {
    let state = page.read();
    let shift = state.parallax();

    rsx! {
        div {
            class: "particle-layer",
            for particle in state.particles().particles().iter() {
                div {
                    key: "{particle.id}",
                    class: "particle pulse",
                    style: format!(
                        "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; transform: translateY({shift:.2}px);",
                        particle.x, particle.y, particle.size, particle.size, particle.opacity
                    ),
                }
            }
        }
    }
}

/// Ring that trails the pointer and grows over category cards
#[component]
pub fn CursorFollower(page: Signal<LandingController>) -> Element {
    let follower = page.read().follower();

    rsx! {
        div {
            class: "cursor-follower",
            style: format!(
                "left: {}px; top: {}px; transform: scale({}); border-color: {};",
                follower.left, follower.top, follower.scale, follower.border_color
            ),
            div { class: "cursor-follower-core ping" }
        }
    }
}

/// Falling-code glyphs behind the hero terminal
#[component]
pub fn MatrixRain(page: Signal<LandingController>) -> Element {
    let state = page.read();
    let shift = state.parallax();

    rsx! {
        div {
            class: "matrix-rain",
            for (i, glyph) in state.backdrop().glyphs.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "matrix-glyph pulse",
                    style: format!(
                        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s; transform: translateY({shift:.2}px) rotate({:.1}deg);",
                        glyph.left, glyph.top, glyph.delay_s, glyph.duration_s, glyph.rotation_deg
                    ),
                    "{glyph.text}"
                }
            }
        }
    }
}

#[component]
pub fn GlowOrbs() -> Element {
    rsx! {
        div {
            class: "glow-orbs",
            div { class: "orb orb-cyan pulse" }
            div { class: "orb orb-purple pulse", style: "animation-delay: 1s;" }
            div { class: "orb orb-pink pulse", style: "animation-delay: 2s;" }
        }
    }
}
