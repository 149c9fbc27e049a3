//! # Hero View
//!
//! Landing section: matrix rain fills the pane, with a centred card on top
//! holding the owner's name, the typewriter line and the stat counters.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::core::effects::{Counter, MatrixRain};
use crate::tui::component::SectionView;
use crate::tui::theme::Palette;

const CARD_WIDTH: u16 = 72;
const CARD_HEIGHT: u16 = 10;
const MIN_HEIGHT: u16 = 16;

pub struct HeroView<'a> {
    pub rain: &'a MatrixRain,
    pub name: &'a str,
    pub glitching: bool,
    pub typed: &'a str,
    pub counters: &'a [(String, Counter)],
    pub palette: Palette,
}

impl HeroView<'_> {
    fn render_rain(&self, area: Rect, buf: &mut Buffer) {
        for (col, row, cell) in self.rain.cells() {
            if col >= area.width || row >= area.height {
                continue;
            }
            if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                target
                    .set_char(cell.glyph)
                    .set_fg(self.palette.rain(cell.intensity));
            }
        }
    }

    fn render_counters(&self, area: Rect, buf: &mut Buffer) {
        if self.counters.is_empty() {
            return;
        }
        let columns = Layout::horizontal(
            self.counters
                .iter()
                .map(|_| Constraint::Ratio(1, self.counters.len() as u32)),
        )
        .split(area);

        for ((label, counter), column) in self.counters.iter().zip(columns.iter()) {
            let value = if counter.is_done() {
                format!("{}+", counter.value())
            } else {
                counter.value().to_string()
            };
            Paragraph::new(vec![
                Line::from(Span::styled(value, self.palette.heading())),
                Line::from(Span::styled(label.as_str(), self.palette.muted())),
            ])
            .alignment(Alignment::Center)
            .render(*column, buf);
        }
    }
}

impl Widget for HeroView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        buf.set_style(area, p.base());
        self.render_rain(area, buf);

        let [card] = Layout::vertical([Constraint::Length(CARD_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH)])
            .flex(Flex::Center)
            .areas(card);

        Clear.render(card, buf);
        let block = Block::bordered()
            .border_style(p.border())
            .style(p.base());
        let inner = block.inner(card);
        block.render(card, buf);

        let name_style = if self.glitching {
            Style::default().fg(p.red).add_modifier(Modifier::BOLD)
        } else {
            p.heading()
        };
        let text = vec![
            Line::from(Span::styled("> whoami", p.muted())),
            Line::from(Span::styled(self.name, name_style)),
            Line::default(),
            Line::from(vec![
                Span::styled("> ", p.accent()),
                Span::styled(self.typed, Style::default().fg(p.text)),
                Span::styled("▌", p.accent().add_modifier(Modifier::SLOW_BLINK)),
            ]),
            Line::default(),
        ];
        let [text_area, counter_area] =
            Layout::vertical([Constraint::Length(text.len() as u16), Constraint::Length(2)])
                .areas(inner);

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .render(text_area, buf);
        self.render_counters(counter_area, buf);
    }
}

impl SectionView for HeroView<'_> {
    fn height(&self, _width: u16) -> u16 {
        MIN_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::effects::{Animation, CounterSet};
    use crate::tui::components::test_render::render_view;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn card_shows_name_typed_text_and_counters() {
        let rain = MatrixRain::new(80, MIN_HEIGHT);
        let mut counters = CounterSet::new([("Alerts Triaged", 1500), ("Certifications", 6)]);
        let mut rng = StdRng::seed_from_u64(3);
        while counters.tick(&mut rng) != crate::core::effects::Tick::Done {}

        let view = HeroView {
            rain: &rain,
            name: "RAHUL MAURYA",
            glitching: false,
            typed: "SOC Ana",
            counters: counters.counters(),
            palette: Palette::for_theme(Theme::Dark),
        };
        let text = render_view(view, 80);
        assert!(text.contains("RAHUL MAURYA"));
        assert!(text.contains("SOC Ana"));
        assert!(text.contains("1500+"));
        assert!(text.contains("Certifications"));
    }

    #[test]
    fn rain_glyphs_land_outside_the_card() {
        let mut rain = MatrixRain::new(80, MIN_HEIGHT);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..5 {
            rain.tick(&mut rng);
        }
        let lit: Vec<_> = rain.cells().filter(|(_, row, _)| *row < 3).collect();
        assert!(!lit.is_empty());

        let view = HeroView {
            rain: &rain,
            name: "X",
            glitching: false,
            typed: "",
            counters: &[],
            palette: Palette::for_theme(Theme::Dark),
        };
        let area = Rect::new(0, 0, 80, MIN_HEIGHT);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);

        let (col, row, cell) = lit[0];
        assert_eq!(buf[(col, row)].symbol(), cell.glyph.to_string());
    }
}
