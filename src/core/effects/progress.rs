//! Progress bars (skills, certifications): reset to empty, then fill
//! toward each bar's target a few points per frame.

use rand::Rng;

use super::{Animation, Tick};

pub const SKILL_BAR_DELAY_MS: u64 = 120;
pub const CERT_BAR_DELAY_MS: u64 = 250;
pub const FILL_FRAME_MS: u64 = 30;
pub const FILL_STEP: u8 = 4;

#[derive(Debug, Clone, Default)]
pub struct ProgressBars {
    targets: Vec<u8>,
    values: Vec<u8>,
}

impl ProgressBars {
    /// Targets are percentages; anything above 100 is clamped.
    pub fn new(targets: impl IntoIterator<Item = u8>) -> Self {
        let targets: Vec<u8> = targets.into_iter().map(|t| t.min(100)).collect();
        Self {
            values: vec![0; targets.len()],
            targets,
        }
    }

    pub fn value(&self, index: usize) -> u8 {
        self.values.get(index).copied().unwrap_or(0)
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn is_full(&self) -> bool {
        self.values == self.targets
    }
}

impl Animation for ProgressBars {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        for (value, &target) in self.values.iter_mut().zip(&self.targets) {
            *value = value.saturating_add(FILL_STEP).min(target);
        }
        if self.is_full() {
            Tick::Done
        } else {
            Tick::After(FILL_FRAME_MS)
        }
    }
}
