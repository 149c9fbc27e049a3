//! Glitch title: every few seconds the owner's name scrambles for a burst
//! of frames, then snaps back.

use rand::Rng;

use super::{Animation, Tick};

pub const INTERVAL_MS: u64 = 4_000;
pub const FRAME_MS: u64 = 60;
/// Frames per burst; the last one restores the original text.
pub const BURST_FRAMES: u32 = 11;
const SCRAMBLE_PROBABILITY: f64 = 0.3;
const GLITCH_CHARS: &[char] = &['X', '#', '@', '!', '$', '%', '&', '*', '?'];

#[derive(Debug, Clone)]
pub struct GlitchText {
    original: String,
    display: String,
    frame: u32,
}

impl GlitchText {
    pub fn new(original: impl Into<String>) -> Self {
        let original = original.into();
        Self {
            display: original.clone(),
            original,
            frame: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.display
    }

    pub fn is_glitching(&self) -> bool {
        self.display != self.original
    }
}

impl Animation for GlitchText {
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        self.frame += 1;
        if self.frame >= BURST_FRAMES {
            self.display = self.original.clone();
            self.frame = 0;
            return Tick::After(INTERVAL_MS - u64::from(BURST_FRAMES - 1) * FRAME_MS);
        }
        self.display = self
            .original
            .chars()
            .map(|c| {
                if rng.random_bool(SCRAMBLE_PROBABILITY) {
                    GLITCH_CHARS[rng.random_range(0..GLITCH_CHARS.len())]
                } else {
                    c
                }
            })
            .collect();
        Tick::After(FRAME_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_restores_original() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut glitch = GlitchText::new("RAHUL MAURYA");
        let mut scrambled = false;
        for _ in 1..BURST_FRAMES {
            assert_eq!(glitch.tick(&mut rng), Tick::After(FRAME_MS));
            assert_eq!(glitch.text().chars().count(), 12);
            scrambled |= glitch.is_glitching();
        }
        assert!(scrambled);

        let pause = glitch.tick(&mut rng);
        assert_eq!(glitch.text(), "RAHUL MAURYA");
        // Bursts start every INTERVAL_MS
        assert_eq!(pause, Tick::After(INTERVAL_MS - 10 * FRAME_MS));
    }

    #[test]
    fn scrambled_chars_come_from_glitch_set() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut glitch = GlitchText::new("aaaaaaaaaaaaaaaaaaaa");
        glitch.tick(&mut rng);
        assert!(
            glitch
                .text()
                .chars()
                .all(|c| c == 'a' || GLITCH_CHARS.contains(&c))
        );
    }
}
