//! # Matrix Rain
//!
//! One falling drop per column. Every tick each drop stamps a random glyph
//! at its row, drops below the bottom edge reset to the top with a 2.5%
//! chance, and every drop moves down one row. Older glyphs fade instead of
//! being cleared, which leaves the trails.

use rand::Rng;

use super::{Animation, Tick};

pub const TICK_MS: u64 = 50;
/// A drop past the bottom resets when `random() > RESET_THRESHOLD`.
pub const RESET_THRESHOLD: f64 = 0.975;
pub const MAX_INTENSITY: u8 = 255;
/// Per-tick fade applied to every lit cell.
const FADE_STEP: u8 = 13;

pub const GLYPHS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '@', '#', '$',
    '%', '^', '&', '*', '!', '<', '>', '{', '}', '[', ']', 'ﾊ', 'ﾐ', 'ﾋ', 'ｰ', 'ｳ', 'ｼ', 'ﾅ', 'ﾓ',
    'ﾆ', 'ｻ', 'ﾜ', 'ﾂ', 'ｵ', 'ﾘ', 'ｱ', 'ﾎ', 'ﾃ', 'ﾏ', 'ｹ', 'ﾒ', 'ｴ', 'ｶ', 'ｷ', 'ﾑ', 'ﾕ', 'ﾗ',
    'ｾ', 'ﾈ', 'ｽ', 'ﾀ', 'ﾇ', 'ﾍ',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub intensity: u8,
}

#[derive(Debug, Clone, Default)]
pub struct MatrixRain {
    cols: u16,
    rows: u16,
    drops: Vec<u32>,
    cells: Vec<Option<Cell>>,
}

impl MatrixRain {
    pub fn new(cols: u16, rows: u16) -> Self {
        let mut rain = Self::default();
        rain.resize(cols, rows);
        rain
    }

    /// Match a new canvas size. Drops restart from the top.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.drops = vec![1; usize::from(cols)];
        self.cells = vec![None; usize::from(cols) * usize::from(rows)];
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    /// Lit cells as `(col, row, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        let cols = usize::from(self.cols.max(1));
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|c| ((i % cols) as u16, (i / cols) as u16, c))
        })
    }

    fn fade(&mut self) {
        for slot in self.cells.iter_mut() {
            if let Some(cell) = slot {
                cell.intensity = cell.intensity.saturating_sub(FADE_STEP);
                if cell.intensity == 0 {
                    *slot = None;
                }
            }
        }
    }
}

impl Animation for MatrixRain {
    fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick {
        self.fade();
        let rows = u32::from(self.rows);
        let cols = usize::from(self.cols);
        for (col, drop) in self.drops.iter_mut().enumerate() {
            let glyph = GLYPHS[rng.random_range(0..GLYPHS.len())];
            if *drop < rows {
                self.cells[*drop as usize * cols + col] = Some(Cell {
                    glyph,
                    intensity: MAX_INTENSITY,
                });
            }
            if *drop > rows && rng.random::<f64>() > RESET_THRESHOLD {
                *drop = 0;
            }
            *drop += 1;
        }
        Tick::After(TICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn drops_always_advance_while_on_screen() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rain = MatrixRain::new(8, 20);
        for _ in 0..5 {
            assert_eq!(rain.tick(&mut rng), Tick::After(TICK_MS));
        }
        assert!(rain.drops().iter().all(|&d| d == 6));
    }

    #[test]
    fn stamps_glyph_at_drop_row() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rain = MatrixRain::new(3, 10);
        rain.tick(&mut rng);
        let lit: Vec<_> = rain.cells().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(lit, vec![(0, 1), (1, 1), (2, 1)]);
        assert!(rain.cells().all(|(_, _, cell)| GLYPHS.contains(&cell.glyph)));
    }

    #[test]
    fn trails_fade_out() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rain = MatrixRain::new(1, 100);
        rain.tick(&mut rng);
        rain.tick(&mut rng);
        let intensities: Vec<u8> = rain.cells().map(|(_, _, c)| c.intensity).collect();
        assert_eq!(intensities, vec![MAX_INTENSITY - FADE_STEP, MAX_INTENSITY]);
    }

    #[test]
    fn drops_past_bottom_eventually_reset() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut rain = MatrixRain::new(4, 2);
        let mut reset_seen = false;
        for _ in 0..2_000 {
            rain.tick(&mut rng);
            if rain.drops().iter().any(|&d| d == 1) {
                reset_seen = true;
            }
        }
        assert!(reset_seen);
        // Never resets while still on screen
        assert!(rain.drops().iter().all(|&d| d >= 1));
    }

    #[test]
    fn resize_restarts_drops() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut rain = MatrixRain::new(2, 5);
        rain.tick(&mut rng);
        rain.resize(4, 6);
        assert_eq!(rain.size(), (4, 6));
        assert_eq!(rain.drops(), &[1, 1, 1, 1]);
        assert_eq!(rain.cells().count(), 0);
    }
}
