//! # About View
//!
//! ```text
//! ┌ terminal ─────────────────┐┌ skill radar ───────┐
//! │ $ whoami                  ││        ⣀⣀          │
//! │ rahul_maurya - SOC Analyst││     ⡠⠊  ⠑⢄         │
//! │ ...                       ││      ...           │
//! └───────────────────────────┘└────────────────────┘
//! ┌ career timeline ────────────────────── 2 / 4 ┐
//! │ 2022  Junior SOC Analyst @ MSSP              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Side by side on wide terminals, stacked on narrow ones.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::content::{self, LineKind, Milestone, ScriptLine};
use crate::core::effects::radar::{self, Shape};
use crate::tui::component::SectionView;
use crate::tui::theme::Palette;

const RADAR_HEIGHT: u16 = 18;
const TIMELINE_HEIGHT: u16 = 5;
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

pub struct AboutView<'a> {
    pub terminal: &'a [ScriptLine],
    pub radar: Vec<Shape>,
    pub milestone: Option<&'a Milestone>,
    pub timeline_label: String,
    pub palette: Palette,
}

/// Rows the full replay needs, including the border.
fn terminal_height() -> u16 {
    let rows: usize = content::TERMINAL_SCRIPT
        .iter()
        .map(|line| line.text.lines().count().max(1))
        .sum();
    rows as u16 + 2
}

/// Canvas y grows upwards; radar coordinates grow downwards.
fn flip((x, y): (f64, f64)) -> (f64, f64) {
    (x, radar::SIZE - y)
}

impl AboutView<'_> {
    fn side_by_side(width: u16) -> bool {
        width >= SIDE_BY_SIDE_MIN_WIDTH
    }

    fn terminal_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();
        for line in self.terminal {
            let style = match line.kind {
                LineKind::Command => p.accent().add_modifier(Modifier::BOLD),
                LineKind::Output => Style::default().fg(p.text),
                LineKind::Blank => Style::default(),
                LineKind::Prompt => p.accent(),
            };
            if line.kind == LineKind::Prompt {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", line.text), style),
                    Span::styled("▌", p.accent().add_modifier(Modifier::SLOW_BLINK)),
                ]));
                continue;
            }
            if line.text.is_empty() {
                lines.push(Line::default());
            }
            for text in line.text.lines() {
                lines.push(Line::from(Span::styled(text, style)));
            }
        }
        lines
    }

    fn render_terminal(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(" terminal ", self.palette.muted()))
            .border_style(self.palette.border());
        Paragraph::new(self.terminal_lines())
            .block(block)
            .render(area, buf);
    }

    fn render_radar(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let inner_width = area.width.saturating_sub(2).max(1);
        let units_per_cell = radar::SIZE / f64::from(inner_width);

        Canvas::default()
            .block(
                Block::bordered()
                    .title(Span::styled(" skill radar ", p.muted()))
                    .border_style(p.border()),
            )
            .marker(Marker::Braille)
            .background_color(p.background)
            .x_bounds([0.0, radar::SIZE])
            .y_bounds([0.0, radar::SIZE])
            .paint(|ctx| {
                for shape in &self.radar {
                    match shape {
                        Shape::Ring(points) => draw_polygon(ctx, points, p.border),
                        Shape::Spoke { from, to } => {
                            let (x1, y1) = flip(*from);
                            let (x2, y2) = flip(*to);
                            ctx.draw(&CanvasLine::new(x1, y1, x2, y2, p.border));
                        }
                        Shape::Area(points) => draw_polygon(ctx, points, p.accent),
                        Shape::Dot { at } => {
                            ctx.draw(&Points {
                                coords: &[flip(*at)],
                                color: p.accent,
                            });
                        }
                        Shape::Label { at, text } => {
                            let (x, y) = flip(*at);
                            let half = text.width() as f64 * units_per_cell / 2.0;
                            let x = (x - half).clamp(0.0, radar::SIZE);
                            ctx.print(x, y, Span::styled(text.clone(), p.muted()));
                        }
                    }
                }
            })
            .render(area, buf);
    }

    fn render_timeline(&self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::bordered()
            .title(Span::styled(" career timeline ", p.muted()))
            .title(
                Line::from(Span::styled(format!(" ◀ {} ▶ ", self.timeline_label), p.accent()))
                    .right_aligned(),
            )
            .border_style(p.border());

        let text = match self.milestone {
            Some(m) => vec![
                Line::from(vec![
                    Span::styled(format!("{}  ", m.period), p.heading()),
                    Span::styled(m.role, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
                    Span::styled(format!(" @ {}", m.org), p.muted()),
                ]),
                Line::from(Span::styled(m.summary, Style::default().fg(p.text))),
            ],
            None => Vec::new(),
        };
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

fn draw_polygon(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    points: &[(f64, f64)],
    color: ratatui::style::Color,
) {
    for (i, &start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        let (x1, y1) = flip(start);
        let (x2, y2) = flip(end);
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

impl Widget for AboutView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.palette.base());
        let term_height = terminal_height();

        let top_height = if Self::side_by_side(area.width) {
            term_height.max(RADAR_HEIGHT)
        } else {
            term_height + RADAR_HEIGHT
        };
        let [heading, top, _, timeline] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(top_height),
            Constraint::Length(1),
            Constraint::Length(TIMELINE_HEIGHT),
        ])
        .areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled("about", self.palette.heading()),
            Span::styled(" // profile", self.palette.muted()),
        ]))
        .render(heading, buf);

        let (term_area, radar_area) = if Self::side_by_side(area.width) {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                    .areas(top);
            (left, right)
        } else {
            let [upper, lower] = Layout::vertical([
                Constraint::Length(term_height),
                Constraint::Length(RADAR_HEIGHT),
            ])
            .areas(top);
            (upper, lower)
        };

        self.render_terminal(term_area, buf);
        self.render_radar(radar_area, buf);
        self.render_timeline(timeline, buf);
    }
}

impl SectionView for AboutView<'_> {
    fn height(&self, width: u16) -> u16 {
        let top = if Self::side_by_side(width) {
            terminal_height().max(RADAR_HEIGHT)
        } else {
            terminal_height() + RADAR_HEIGHT
        };
        1 + top + 1 + TIMELINE_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::core::effects::{Animation, RadarChart, TerminalReplay, Tick};
    use crate::tui::components::test_render::render_view;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn finished_terminal() -> TerminalReplay {
        let mut replay = TerminalReplay::new(content::TERMINAL_SCRIPT);
        let mut rng = StdRng::seed_from_u64(0);
        while replay.tick(&mut rng) != Tick::Done {}
        replay
    }

    fn view<'a>(terminal: &'a TerminalReplay, radar: &RadarChart) -> AboutView<'a> {
        AboutView {
            terminal: terminal.lines(),
            radar: radar.shapes(),
            milestone: content::TIMELINE.get(1),
            timeline_label: "2 / 4".to_string(),
            palette: Palette::for_theme(Theme::Dark),
        }
    }

    #[test]
    fn renders_replay_and_timeline() {
        let terminal = finished_terminal();
        let radar = RadarChart::new(content::RADAR_METRICS.iter().copied());
        let text = render_view(view(&terminal, &radar), 120);
        assert!(text.contains("$ whoami"));
        assert!(text.contains("$ skills --list"));
        assert!(text.contains("skill radar"));
        assert!(text.contains("2 / 4"));
        assert!(text.contains("Junior SOC Analyst"));
    }

    #[test]
    fn empty_replay_still_renders_frame() {
        let terminal = TerminalReplay::new(content::TERMINAL_SCRIPT);
        let radar = RadarChart::new(content::RADAR_METRICS.iter().copied());
        let text = render_view(view(&terminal, &radar), 120);
        assert!(text.contains("terminal"));
        assert!(!text.contains("$ whoami"));
    }

    #[test]
    fn narrow_layout_stacks_panels() {
        let terminal = TerminalReplay::new(content::TERMINAL_SCRIPT);
        let radar = RadarChart::new(content::RADAR_METRICS.iter().copied());
        let wide = view(&terminal, &radar).height(120);
        let narrow = view(&terminal, &radar).height(60);
        assert!(narrow > wide);
    }

    #[test]
    fn flip_mirrors_vertically() {
        assert_eq!(flip((10.0, 0.0)), (10.0, radar::SIZE));
        assert_eq!(flip(radar::CENTER), radar::CENTER);
    }
}
