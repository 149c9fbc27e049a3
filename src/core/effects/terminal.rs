//! Terminal replay: prints a scripted shell session one line at a time.

use rand::Rng;

use super::{Animation, Tick};
use crate::core::content::{LineKind, ScriptLine};

/// Pause after a command line.
pub const COMMAND_DELAY_MS: u64 = 260;
/// Pause after any other line.
pub const LINE_DELAY_MS: u64 = 90;

#[derive(Debug, Clone, Default)]
pub struct TerminalReplay {
    script: Vec<ScriptLine>,
    printed: usize,
}

impl TerminalReplay {
    pub fn new(script: &[ScriptLine]) -> Self {
        Self {
            script: script.to_vec(),
            printed: 0,
        }
    }

    /// Lines printed so far.
    pub fn lines(&self) -> &[ScriptLine] {
        &self.script[..self.printed]
    }

    pub fn is_finished(&self) -> bool {
        self.printed >= self.script.len()
    }
}

impl Animation for TerminalReplay {
    fn tick<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> Tick {
        let Some(line) = self.script.get(self.printed) else {
            return Tick::Done;
        };
        let delay = match line.kind {
            LineKind::Command => COMMAND_DELAY_MS,
            _ => LINE_DELAY_MS,
        };
        self.printed += 1;
        if self.is_finished() {
            Tick::Done
        } else {
            Tick::After(delay)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::TERMINAL_SCRIPT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prints_one_line_per_tick() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut replay = TerminalReplay::new(TERMINAL_SCRIPT);
        assert!(replay.lines().is_empty());

        // "$ whoami" is a command
        assert_eq!(replay.tick(&mut rng), Tick::After(COMMAND_DELAY_MS));
        assert_eq!(replay.lines().len(), 1);
        // Output line
        assert_eq!(replay.tick(&mut rng), Tick::After(LINE_DELAY_MS));
    }

    #[test]
    fn finishes_after_last_line() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut replay = TerminalReplay::new(TERMINAL_SCRIPT);
        let mut ticks = 1;
        while replay.tick(&mut rng) != Tick::Done {
            ticks += 1;
        }
        assert_eq!(ticks, TERMINAL_SCRIPT.len());
        assert!(replay.is_finished());
        assert_eq!(replay.lines().len(), TERMINAL_SCRIPT.len());
    }
}
