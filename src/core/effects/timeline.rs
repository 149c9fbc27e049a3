//! Career timeline slider. Wraps in both directions and auto-advances.

use rand::Rng;

use super::{Animation, Tick};

pub const AUTO_ADVANCE_MS: u64 = 6_000;

#[derive(Debug, Clone)]
pub struct Timeline {
    len: usize,
    index: usize,
}

impl Timeline {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn go_to(&mut self, index: isize) {
        if self.len == 0 {
            return;
        }
        self.index = index.rem_euclid(self.len as isize) as usize;
    }

    pub fn next(&mut self) {
        self.go_to(self.index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.index as isize - 1);
    }

    /// "2 / 4" style position label.
    pub fn label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

impl Animation for Timeline {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        self.next();
        Tick::After(AUTO_ADVANCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_both_ways() {
        let mut timeline = Timeline::new(4);
        timeline.prev();
        assert_eq!(timeline.index(), 3);
        assert_eq!(timeline.label(), "4 / 4");
        timeline.next();
        assert_eq!(timeline.index(), 0);
        assert_eq!(timeline.label(), "1 / 4");
    }

    #[test]
    fn empty_timeline_stays_put() {
        let mut timeline = Timeline::new(0);
        timeline.next();
        timeline.prev();
        assert_eq!(timeline.index(), 0);
    }
}
