//! Component-scoped timer schedule
//!
//! The page has a handful of interval and timeout timers. Instead of handing them
//! to the host's global timer facility, the controller owns a [`Scheduler`] with a
//! virtual clock: the host sleeps for [`Scheduler::next_wake`] and then advances the
//! clock, which keeps every transition deterministic under test.

use strum::{EnumCount, IntoEnumIterator};
use tracing::trace;

/// Timers driven by the landing page
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
#[repr(u8)]
pub enum Timer {
    /// Rotates the active category and demo command
    Rotate,
    /// One-shot delay before the typing animation starts
    TypeStart,
    /// Reveals the next character of the demo command
    TypeStep,
    /// Nudges the floating particles
    Particles,
    /// Blinks the prompt cursor
    CursorBlink,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    deadline: Option<u64>,
    period: Option<u64>,
}

/// Virtual-clock timer wheel with explicit start/stop
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    clock: u64,
    running: bool,
    slots: [Slot; Timer::COUNT],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the schedule was created
    pub fn clock_ms(&self) -> u64 {
        self.clock
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Disarm every timer; nothing fires until `start` is called again
    pub fn stop(&mut self) {
        self.running = false;
        self.slots = [Slot::default(); Timer::COUNT];
    }

    /// Fire `timer` every `period_ms`, first after one full period.
    /// Re-arming replaces any pending deadline.
    pub fn arm_periodic(&mut self, timer: Timer, period_ms: u64) {
        let period = period_ms.max(1);
        self.slots[timer as usize] = Slot {
            deadline: Some(self.clock + period),
            period: Some(period),
        };
    }

    /// Fire `timer` once after `delay_ms`. Re-arming replaces any pending deadline.
    pub fn arm_once(&mut self, timer: Timer, delay_ms: u64) {
        self.slots[timer as usize] = Slot {
            deadline: Some(self.clock + delay_ms),
            period: None,
        };
    }

    pub fn disarm(&mut self, timer: Timer) {
        self.slots[timer as usize] = Slot::default();
    }

    pub fn is_armed(&self, timer: Timer) -> bool {
        self.slots[timer as usize].deadline.is_some()
    }

    /// Time until the earliest armed timer fires, `None` when idle or stopped
    pub fn next_wake(&self) -> Option<u64> {
        if !self.running {
            return None;
        }
        self.slots
            .iter()
            .filter_map(|slot| slot.deadline)
            .min()
            .map(|deadline| deadline.saturating_sub(self.clock))
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to its
    /// deadline. Ties go to the timer declared first in [`Timer`].
    pub fn pop_due(&mut self, until: u64) -> Option<Timer> {
        if !self.running {
            return None;
        }
        let (timer, deadline) = Timer::iter()
            .filter_map(|t| self.slots[t as usize].deadline.map(|d| (t, d)))
            .filter(|(_, d)| *d <= until)
            .min_by_key(|(t, d)| (*d, *t as u8))?;

        self.clock = self.clock.max(deadline);
        let slot = &mut self.slots[timer as usize];
        slot.deadline = slot.period.map(|period| deadline + period);
        trace!(%timer, clock = self.clock, "timer fired");
        Some(timer)
    }

    /// Move the clock forward without firing anything
    pub fn settle(&mut self, until: u64) {
        self.clock = self.clock.max(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn drain(scheduler: &mut Scheduler, until: u64) -> Vec<(Timer, u64)> {
        let mut fired = Vec::new();
        while let Some(timer) = scheduler.pop_due(until) {
            fired.push((timer, scheduler.clock_ms()));
        }
        scheduler.settle(until);
        fired
    }

    #[test]
    fn test_periodic_timer_catches_up() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        scheduler.arm_periodic(Timer::CursorBlink, 500);

        let fired = drain(&mut scheduler, 1600);
        assert_eq!(
            fired,
            vec![
                (Timer::CursorBlink, 500),
                (Timer::CursorBlink, 1000),
                (Timer::CursorBlink, 1500),
            ]
        );
        assert_eq!(scheduler.next_wake(), Some(400));
    }

    #[test]
    fn test_ties_follow_declaration_order() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        scheduler.arm_periodic(Timer::CursorBlink, 1000);
        scheduler.arm_periodic(Timer::Rotate, 1000);
        scheduler.arm_once(Timer::TypeStart, 1000);

        let fired: Vec<_> = drain(&mut scheduler, 1000).into_iter().map(|(t, _)| t).collect();
        assert_eq!(fired, vec![Timer::Rotate, Timer::TypeStart, Timer::CursorBlink]);
        assert!(!scheduler.is_armed(Timer::TypeStart));
    }

    #[test]
    fn test_rearming_replaces_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        scheduler.arm_once(Timer::TypeStart, 1000);
        scheduler.settle(900);
        scheduler.arm_once(Timer::TypeStart, 1000);

        assert_eq!(scheduler.pop_due(1500), None);
        assert_eq!(scheduler.next_wake(), Some(1000));
    }

    #[test]
    fn test_stop_disarms_everything() {
        let mut scheduler = Scheduler::new();
        scheduler.start();
        scheduler.arm_periodic(Timer::Particles, 2000);
        scheduler.stop();

        assert_eq!(scheduler.next_wake(), None);
        assert_eq!(scheduler.pop_due(10_000), None);
        assert!(Timer::iter().all(|timer| !scheduler.is_armed(timer)));
    }
}
