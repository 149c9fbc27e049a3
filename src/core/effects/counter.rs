//! Stat counters: count from 0 up to a target in 60-ish steps.

use rand::Rng;

use super::{Animation, Tick};

pub const COUNTER_INTERVAL_MS: u64 = 28;
const STEPS: u32 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    target: u32,
    value: u32,
    step: u32,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            value: 0,
            step: target.div_ceil(STEPS),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.value >= self.target
    }

    fn advance(&mut self) {
        // Clamped so rounding up the step never overshoots.
        self.value = (self.value + self.step).min(self.target);
    }
}

impl Animation for Counter {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        self.advance();
        if self.is_done() {
            Tick::Done
        } else {
            Tick::After(COUNTER_INTERVAL_MS)
        }
    }
}

/// All hero counters, ticking in lockstep.
#[derive(Debug, Clone, Default)]
pub struct CounterSet {
    counters: Vec<(String, Counter)>,
}

impl CounterSet {
    pub fn new<'a>(stats: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        Self {
            counters: stats
                .into_iter()
                .map(|(label, target)| (label.to_string(), Counter::new(target)))
                .collect(),
        }
    }

    pub fn counters(&self) -> &[(String, Counter)] {
        &self.counters
    }
}

impl Animation for CounterSet {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        for (_, counter) in self.counters.iter_mut() {
            counter.advance();
        }
        if self.counters.iter().all(|(_, c)| c.is_done()) {
            Tick::Done
        } else {
            Tick::After(COUNTER_INTERVAL_MS)
        }
    }
}
