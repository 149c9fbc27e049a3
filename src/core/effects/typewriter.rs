//! Typewriter: types a phrase, pauses, deletes it, moves to the next one.

use rand::Rng;

use super::{Animation, Tick};

pub const START_DELAY_MS: u64 = 1_200;
pub const REVEAL_MS: u64 = 80;
pub const DELETE_MS: u64 = 45;
pub const PAUSE_MS: u64 = 2_200;

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    deleting: bool,
    text: String,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
            text: String::new(),
        }
    }

    /// The currently revealed prefix.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}

impl Animation for Typewriter {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return Tick::Done;
        };
        let len = phrase.chars().count();

        if !self.deleting {
            self.shown = (self.shown + 1).min(len);
            self.text = phrase.chars().take(self.shown).collect();
            if self.shown == len {
                self.deleting = true;
                return Tick::After(PAUSE_MS);
            }
        } else {
            self.shown = self.shown.saturating_sub(1);
            self.text = phrase.chars().take(self.shown).collect();
            if self.shown == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
            }
        }

        Tick::After(if self.deleting { DELETE_MS } else { REVEAL_MS })
    }
}
