//! Landing page controller
//!
//! Owns every piece of transient UI state and the timer schedule. The renderer reads
//! from it and forwards input events to it; nothing here touches the DOM.

use crate::backdrop::Backdrop;
use crate::bridge::BrowserEvent;
use crate::catalog::{total_scripts, Category, CATEGORIES, COLLAPSED_SCRIPTS, TERMINAL_COMMANDS};
use crate::config::LandingConfig;
use crate::history::TerminalHistory;
use crate::particles::ParticleField;
use crate::schedule::{Scheduler, Timer};
use crate::typewriter::Typewriter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::{debug, info};

const FOLLOWER_RADIUS: f64 = 16.0;
const FOLLOWER_IDLE: &str = "#06b6d4";
const FOLLOWER_HOVER: &str = "#f59e0b";

/// Pointer follower placement and styling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Follower {
    pub left: f64,
    pub top: f64,
    pub scale: f64,
    pub border_color: &'static str,
}

/// Values shown by the stats dashboard counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub scripts: String,
    pub categories: String,
    pub animated: bool,
}

#[derive(Debug, Clone)]
pub struct LandingController {
    config: LandingConfig,
    scheduler: Scheduler,

    active_category: usize,
    current_command: usize,
    typewriter: Typewriter,
    particles: ParticleField,
    backdrop: Backdrop,

    pointer: (f64, f64),
    scroll_offset: f64,
    viewport_height: f64,
    stats_animated: bool,

    selected_category: Option<usize>,
    hovered_category: Option<usize>,
    show_code_demo: bool,
    cursor_visible: bool,
    loaded: bool,

    terminal_input: String,
    terminal_focused: bool,
    history: TerminalHistory,
    clock_label: String,
}

impl Default for LandingController {
    fn default() -> Self {
        Self::new(LandingConfig::default())
    }
}

impl LandingController {
    /// Build a controller; cosmetic randomness is seeded from `config.seed`
    pub fn new(config: LandingConfig) -> Self {
        let seed = config.seed.unwrap_or(0x5eed);
        Self::with_rng(config, &mut SmallRng::seed_from_u64(seed))
    }

    /// Build a controller drawing cosmetic values from `rng`
    pub fn with_rng<R: rand::Rng + ?Sized>(config: LandingConfig, rng: &mut R) -> Self {
        let particles = ParticleField::generate(config.particle_count, rng);
        let backdrop = Backdrop::generate(rng);
        Self {
            config,
            scheduler: Scheduler::new(),
            active_category: 0,
            current_command: 0,
            typewriter: Typewriter::new(TERMINAL_COMMANDS[0]),
            particles,
            backdrop,
            pointer: (0.0, 0.0),
            scroll_offset: 0.0,
            viewport_height: 0.0,
            stats_animated: false,
            selected_category: None,
            hovered_category: None,
            show_code_demo: false,
            cursor_visible: true,
            loaded: false,
            terminal_input: String::new(),
            terminal_focused: false,
            history: TerminalHistory::new(),
            clock_label: String::new(),
        }
    }

    // ---- lifecycle -------------------------------------------------------

    /// Arm every timer. Called when the page mounts.
    pub fn start(&mut self) {
        if self.scheduler.is_running() {
            return;
        }
        self.scheduler.start();
        self.scheduler
            .arm_periodic(Timer::Rotate, self.config.rotate_interval_ms);
        self.scheduler
            .arm_periodic(Timer::Particles, self.config.particle_interval_ms);
        self.scheduler
            .arm_periodic(Timer::CursorBlink, self.config.cursor_blink_ms);
        self.restart_typing();
        self.loaded = true;
        info!(
            particles = self.particles.len(),
            "landing page controller started"
        );
    }

    /// Tear down every timer. Called when the page unmounts.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        info!(clock_ms = self.scheduler.clock_ms(), "landing page controller stopped");
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Milliseconds until the next timer is due
    pub fn next_wake(&self) -> Option<u64> {
        self.scheduler.next_wake()
    }

    /// Move time forward by `elapsed_ms`, applying every timer that fires on the way.
    /// Returns the fired timers in order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Timer> {
        let until = self.scheduler.clock_ms() + elapsed_ms;
        let mut fired = Vec::new();
        while let Some(timer) = self.scheduler.pop_due(until) {
            self.fire(timer);
            fired.push(timer);
        }
        self.scheduler.settle(until);
        fired
    }

    fn fire(&mut self, timer: Timer) {
        match timer {
            Timer::Rotate => self.rotate(),
            Timer::TypeStart => {
                self.scheduler
                    .arm_periodic(Timer::TypeStep, self.config.typing_step_ms);
            }
            Timer::TypeStep => {
                if !self.typewriter.step() {
                    self.scheduler.disarm(Timer::TypeStep);
                }
            }
            Timer::Particles => self.particles.tick(self.scheduler.clock_ms()),
            Timer::CursorBlink => self.cursor_visible = !self.cursor_visible,
        }
    }

    fn rotate(&mut self) {
        self.active_category = (self.active_category + 1) % CATEGORIES.len();
        self.current_command = (self.current_command + 1) % TERMINAL_COMMANDS.len();
        debug!(
            category = self.active_category,
            command = self.current_command,
            "rotated demo"
        );
        self.restart_typing();
    }

    fn restart_typing(&mut self) {
        self.typewriter.restart(TERMINAL_COMMANDS[self.current_command]);
        self.scheduler.disarm(Timer::TypeStep);
        self.scheduler
            .arm_once(Timer::TypeStart, self.config.typing_delay_ms);
    }

    // ---- input events ----------------------------------------------------

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Record the scroll offset. Passing the reveal threshold flips the stats flag for good.
    pub fn scrolled(&mut self, offset: f64, viewport_height: f64) {
        self.scroll_offset = offset;
        self.viewport_height = viewport_height;
        if !self.stats_animated && offset > viewport_height * self.config.stats_threshold {
            debug!(offset, "stats revealed");
            self.stats_animated = true;
        }
    }

    /// Apply a message from the browser bridge
    pub fn apply_browser_event(&mut self, event: BrowserEvent) {
        match event {
            BrowserEvent::Scroll { offset, viewport } => self.scrolled(offset, viewport),
            BrowserEvent::Clock { time } => self.clock_label = time,
        }
    }

    /// Expand a category card, or collapse it if it already is
    pub fn select_category(&mut self, index: usize) {
        if index >= CATEGORIES.len() {
            return;
        }
        self.selected_category = if self.selected_category == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn hover_category(&mut self, index: Option<usize>) {
        self.hovered_category = index.filter(|i| *i < CATEGORIES.len());
    }

    pub fn toggle_code_demo(&mut self) {
        self.show_code_demo = !self.show_code_demo;
    }

    pub fn toggle_terminal_focus(&mut self) {
        self.terminal_focused = !self.terminal_focused;
    }

    pub fn set_terminal_focus(&mut self, focused: bool) {
        self.terminal_focused = focused;
    }

    pub fn set_terminal_input(&mut self, input: impl Into<String>) {
        self.terminal_input = input.into();
    }

    /// Submit the prompt; non-blank input is echoed into the history and cleared
    pub fn submit_terminal(&mut self) {
        if self.history.submit(&self.terminal_input) {
            self.terminal_input.clear();
        }
    }

    /// Click on a chip of the active category in the hero terminal
    pub fn run_active_script(&mut self, script_index: usize) {
        if let Some(script) = self.active_category().scripts.get(script_index) {
            self.history.run_chip(script);
        }
    }

    /// Click on a script listed on a category card
    pub fn run_category_script(&mut self, category_index: usize, script_index: usize) {
        let Some(category) = CATEGORIES.get(category_index) else {
            return;
        };
        if let Some(script) = category.scripts.get(script_index) {
            self.history.run_category_script(category, script);
        }
    }

    /// "Run Code" in the showcase; only offered while the demo is shown
    pub fn run_code_demo(&mut self) {
        if self.show_code_demo {
            self.history.run_demo();
        }
    }

    pub fn reset_history(&mut self) {
        self.history.clear();
    }

    // ---- views -----------------------------------------------------------

    pub fn config(&self) -> &LandingConfig {
        &self.config
    }

    pub fn clock_ms(&self) -> u64 {
        self.scheduler.clock_ms()
    }

    pub fn active_index(&self) -> usize {
        self.active_category
    }

    pub fn active_category(&self) -> &'static Category {
        &CATEGORIES[self.active_category]
    }

    pub fn command_index(&self) -> usize {
        self.current_command
    }

    pub fn current_command(&self) -> &'static str {
        TERMINAL_COMMANDS[self.current_command]
    }

    pub fn typed_text(&self) -> &'static str {
        self.typewriter.text()
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Parallax shift applied to background layers
    pub fn parallax(&self) -> f64 {
        self.scroll_offset * 0.02
    }

    pub fn stats_animated(&self) -> bool {
        self.stats_animated
    }

    pub fn selected_category(&self) -> Option<usize> {
        self.selected_category
    }

    pub fn hovered_category(&self) -> Option<usize> {
        self.hovered_category
    }

    pub fn show_code_demo(&self) -> bool {
        self.show_code_demo
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn terminal_input(&self) -> &str {
        &self.terminal_input
    }

    pub fn terminal_focused(&self) -> bool {
        self.terminal_focused
    }

    pub fn history(&self) -> &TerminalHistory {
        &self.history
    }

    pub fn clock_label(&self) -> &str {
        &self.clock_label
    }

    /// Scripts a category card lists in its current state
    pub fn visible_scripts(&self, index: usize) -> &'static [&'static str] {
        let Some(category) = CATEGORIES.get(index) else {
            return &[];
        };
        if self.selected_category == Some(index) {
            category.scripts
        } else {
            &category.scripts[..category.scripts.len().min(COLLAPSED_SCRIPTS)]
        }
    }

    pub fn follower(&self) -> Follower {
        let hovering = self.hovered_category.is_some();
        Follower {
            left: self.pointer.0 - FOLLOWER_RADIUS,
            top: self.pointer.1 - FOLLOWER_RADIUS,
            scale: match (self.loaded, hovering) {
                (false, _) => 0.0,
                (true, true) => 1.5,
                (true, false) => 1.0,
            },
            border_color: if hovering { FOLLOWER_HOVER } else { FOLLOWER_IDLE },
        }
    }

    pub fn stats(&self) -> Stats {
        let (scripts, categories) = if self.stats_animated {
            (format!("{}+", total_scripts()), CATEGORIES.len().to_string())
        } else {
            ("0".to_string(), "0".to_string())
        };
        Stats {
            scripts,
            categories,
            animated: self.stats_animated,
        }
    }
}
