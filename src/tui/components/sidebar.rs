//! Navigation links. Docked on wide terminals, a drawer toggled with `m`
//! on narrow ones.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::section::NavLink;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub const SIDEBAR_WIDTH: u16 = 20;

pub struct Sidebar<'a> {
    pub links: &'a [NavLink],
    /// Drawn over the content instead of beside it.
    pub overlay: bool,
    pub palette: Palette,
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        if self.overlay {
            frame.render_widget(Clear, area);
        }

        let lines: Vec<Line> = self
            .links
            .iter()
            .enumerate()
            .map(|(i, link)| {
                let marker = if link.active { "▶ " } else { "  " };
                let style = if link.active {
                    p.heading().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(p.text)
                };
                Line::from(vec![
                    Span::styled(marker, p.accent()),
                    Span::styled(format!("{} ", i + 1), p.muted()),
                    Span::styled(link.target.title(), style),
                ])
            })
            .collect();

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(p.border())
            .title(Span::styled(" NAV ", p.muted()))
            .padding(Padding::vertical(1));

        frame.render_widget(Paragraph::new(lines).block(block).style(p.base()), area);
    }
}
