//! Randomized decorations generated once per page view

use rand::seq::SliceRandom;
use rand::Rng;

const KEYWORDS: [&str; 5] = ["def", "import", "python", "class", "if"];

pub const MATRIX_GLYPHS: usize = 100;
pub const CTA_BUBBLES: usize = 10;

/// A glyph in the hero's falling-code background
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGlyph {
    pub left: f64,
    pub top: f64,
    pub delay_s: f64,
    pub duration_s: f64,
    pub rotation_deg: f64,
    pub text: &'static str,
}

impl MatrixGlyph {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let text = if rng.gen_bool(0.3) {
            KEYWORDS.choose(rng).copied().unwrap_or("def")
        } else if rng.gen_bool(0.5) {
            "1"
        } else {
            "0"
        };
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..10.0),
            duration_s: rng.gen_range(6.0..12.0),
            rotation_deg: rng.gen_range(0.0..360.0),
            text,
        }
    }
}

/// A soft circle floating behind the call-to-action
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub left: f64,
    pub top: f64,
    pub diameter: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Bubble {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            diameter: rng.gen_range(20.0..80.0),
            delay_s: rng.gen_range(0.0..8.0),
            duration_s: rng.gen_range(4.0..8.0),
        }
    }
}

/// All static-per-view decorations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backdrop {
    pub glyphs: Vec<MatrixGlyph>,
    pub bubbles: Vec<Bubble>,
}

impl Backdrop {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            glyphs: (0..MATRIX_GLYPHS).map(|_| MatrixGlyph::random(rng)).collect(),
            bubbles: (0..CTA_BUBBLES).map(|_| Bubble::random(rng)).collect(),
        }
    }
}
