//! Alert ticker: the "live" alert count in the status bar. Climbs by one
//! at random intervals and raises the threat level every three alerts.

use rand::Rng;

use super::{Animation, Tick};
use crate::core::content::THREAT_LEVELS;

pub const FIRST_ALERT_MS: u64 = 3_500;
pub const MIN_INTERVAL_MS: u64 = 3_000;
pub const MAX_INTERVAL_MS: u64 = 10_000;
/// Every Nth alert is announced with a toast.
pub const ANNOUNCE_EVERY: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct AlertTicker {
    count: u32,
}

impl AlertTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Index into [`THREAT_LEVELS`].
    pub fn level_index(&self) -> usize {
        ((self.count / 3) as usize).min(THREAT_LEVELS.len() - 1)
    }

    pub fn level(&self) -> &'static str {
        THREAT_LEVELS[self.level_index()]
    }

    /// Whether the latest alert should be announced.
    pub fn should_announce(&self) -> bool {
        self.count > 0 && self.count % ANNOUNCE_EVERY == 0
    }
}

impl Animation for AlertTicker {
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        self.count += 1;
        Tick::After(rng.random_range(MIN_INTERVAL_MS..MAX_INTERVAL_MS))
    }
}
