//! Status-bar clock, refreshed once a second.

use chrono::{DateTime, Utc};
use rand::Rng;

use super::{Animation, Tick};

pub const TICK_MS: u64 = 1_000;

#[derive(Debug, Clone, Default)]
pub struct Clock {
    label: String,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// `Mon, 19 Oct 2026 08:05:09 UTC`
pub fn format_utc(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S UTC").to_string()
}

impl Animation for Clock {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        self.label = format_utc(Utc::now());
        Tick::After(TICK_MS)
    }
}
