//! # Timer-Driven Effects
//!
//! Each effect is a small state machine with private state. The scheduler
//! calls [`Animation::tick`] whenever the effect's timer comes due; the
//! returned [`Tick`] says when to call again, or that the run is over.
//!
//! ```text
//!           restart()                    tick() → After(ms)
//! EffectSlot ──────────► pending handle ──────────────────► pending handle
//!     ▲                        │                                 │
//!     │ stop() cancels ────────┘             tick() → Done ──────┴─► idle
//! ```
//!
//! Effects never touch the terminal. They expose plain getters or
//! declarative shapes (see [`radar::Shape`]) that the TUI turns into widgets.

pub mod alerts;
pub mod clock;
pub mod counter;
pub mod glitch;
pub mod matrix;
pub mod progress;
pub mod radar;
pub mod terminal;
pub mod timeline;
pub mod typewriter;

pub use alerts::AlertTicker;
pub use clock::Clock;
pub use counter::{Counter, CounterSet};
pub use glitch::GlitchText;
pub use matrix::MatrixRain;
pub use progress::ProgressBars;
pub use radar::{RadarChart, Shape};
pub use terminal::TerminalReplay;
pub use timeline::Timeline;
pub use typewriter::Typewriter;

use log::debug;
use rand::Rng;

use crate::core::scheduler::{Scheduler, TaskHandle};
use crate::core::state::Task;

/// What an effect wants after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Call again this many milliseconds after the current due time.
    After(u64),
    /// The run is complete.
    Done,
}

pub trait Animation {
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick;
}

/// Identifies which slot a scheduled `Task::Effect` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Typewriter,
    Glitch,
    Matrix,
    Clock,
    Alerts,
    Timeline,
    Counters,
    Terminal,
    Radar,
    SkillBars,
    CertBars,
}

/// An effect instance plus the handle of its pending timer.
///
/// At most one timer is pending per slot: every (re)start cancels the
/// previous one first.
#[derive(Debug)]
pub struct EffectSlot<A> {
    kind: EffectKind,
    pub state: A,
    handle: Option<TaskHandle>,
}

impl<A: Animation> EffectSlot<A> {
    pub fn new(kind: EffectKind, state: A) -> Self {
        Self {
            kind,
            state,
            handle: None,
        }
    }

    /// Replace the state with a fresh run and schedule its first tick.
    pub fn restart(&mut self, state: A, scheduler: &mut Scheduler<Task>, at_ms: u64) {
        self.state = state;
        self.start(scheduler, at_ms);
    }

    /// Schedule the first tick, keeping the current state.
    pub fn start(&mut self, scheduler: &mut Scheduler<Task>, at_ms: u64) {
        self.stop(scheduler);
        self.handle = Some(scheduler.schedule_at(at_ms, Task::Effect(self.kind)));
    }

    pub fn stop(&mut self, scheduler: &mut Scheduler<Task>) {
        if let Some(handle) = self.handle.take()
            && scheduler.cancel(handle)
        {
            debug!("Cancelled {:?} timer", self.kind);
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Run one tick for the timer identified by `handle` and reschedule.
    ///
    /// Returns `None` if `handle` is not this slot's pending timer.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        handle: TaskHandle,
        due_ms: u64,
        scheduler: &mut Scheduler<Task>,
        rng: &mut R,
    ) -> Option<Tick> {
        if self.handle != Some(handle) {
            return None;
        }
        self.handle = None;
        let tick = self.state.tick(rng);
        if let Tick::After(ms) = tick {
            self.handle = Some(scheduler.schedule_at(due_ms + ms, Task::Effect(self.kind)));
        }
        Some(tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Countdown(u32);

    impl Animation for Countdown {
        fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
            self.0 -= 1;
            if self.0 == 0 { Tick::Done } else { Tick::After(10) }
        }
    }

    fn drain(slot: &mut EffectSlot<Countdown>, scheduler: &mut Scheduler<Task>, now: u64) -> usize {
        let mut rng = StdRng::seed_from_u64(1);
        let mut fired = 0;
        while let Some(due) = scheduler.pop_due(now) {
            if slot.fire(due.handle, due.due_ms, scheduler, &mut rng).is_some() {
                fired += 1;
            }
        }
        fired
    }

    #[test]
    fn runs_until_done() {
        let mut scheduler = Scheduler::new();
        let mut slot = EffectSlot::new(EffectKind::Counters, Countdown(0));
        slot.restart(Countdown(3), &mut scheduler, 0);

        assert_eq!(drain(&mut slot, &mut scheduler, 100), 3);
        assert!(!slot.is_running());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn reschedules_relative_to_due_time() {
        let mut scheduler = Scheduler::new();
        let mut slot = EffectSlot::new(EffectKind::Counters, Countdown(0));
        slot.restart(Countdown(5), &mut scheduler, 0);

        // Ticks at 0, 10, 20 are due by 25
        assert_eq!(drain(&mut slot, &mut scheduler, 25), 3);
        assert_eq!(scheduler.next_due(), Some(30));
    }

    #[test]
    fn restart_cancels_previous_chain() {
        let mut scheduler = Scheduler::new();
        let mut slot = EffectSlot::new(EffectKind::Counters, Countdown(0));
        slot.restart(Countdown(3), &mut scheduler, 0);
        slot.restart(Countdown(3), &mut scheduler, 0);

        assert_eq!(scheduler.len(), 1);
        assert_eq!(drain(&mut slot, &mut scheduler, 100), 3);
    }

    #[test]
    fn stop_prevents_further_ticks() {
        let mut scheduler = Scheduler::new();
        let mut slot = EffectSlot::new(EffectKind::Counters, Countdown(0));
        slot.restart(Countdown(3), &mut scheduler, 0);
        slot.stop(&mut scheduler);

        assert!(!slot.is_running());
        assert_eq!(drain(&mut slot, &mut scheduler, 100), 0);
    }
}
