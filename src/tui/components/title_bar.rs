//! # TitleBar Component
//!
//! Top status bar: the owner's (glitching) name and current section on the
//! left; live alert count, threat level, UTC clock and theme on the right.
//!
//! ```text
//!  RAHUL MAURYA // about          ALERTS 7 │ THREAT ELEVATED │ Mon, 19 Oct 2026 08:05:09 UTC │ dark
//! ```
//!
//! When the terminal is too narrow for both halves, the right half wins:
//! the status readouts matter more than the name.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct TitleBar<'a> {
    pub name: &'a str,
    pub glitching: bool,
    pub section: &'a str,
    pub alert_count: u32,
    pub threat_level: &'a str,
    pub threat_index: usize,
    pub clock: &'a str,
    pub theme: &'a str,
    pub palette: Palette,
}

impl TitleBar<'_> {
    fn status_spans(&self) -> Vec<Span<'_>> {
        let p = &self.palette;
        let sep = Span::styled(" │ ", p.muted());
        let mut spans = vec![
            Span::styled("ALERTS ", p.muted()),
            Span::styled(self.alert_count.to_string(), Style::default().fg(p.amber)),
            sep.clone(),
            Span::styled("THREAT ", p.muted()),
            Span::styled(
                self.threat_level,
                Style::default()
                    .fg(p.threat(self.threat_index))
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if !self.clock.is_empty() {
            spans.push(sep.clone());
            spans.push(Span::styled(self.clock, Style::default().fg(p.text)));
        }
        spans.push(sep);
        spans.push(Span::styled(self.theme, p.muted()));
        spans.push(Span::raw(" "));
        spans
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status = Line::from(self.status_spans());
        let status_width: usize = status.spans.iter().map(|s| s.content.width()).sum();
        let status_width = (status_width as u16).min(area.width);

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);

        let name_style = if self.glitching {
            Style::default().fg(self.palette.red).add_modifier(Modifier::BOLD)
        } else {
            self.palette.heading()
        };
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.name, name_style),
            Span::styled(" // ", self.palette.muted()),
            Span::styled(self.section, Style::default().fg(self.palette.text)),
        ]);

        frame.render_widget(Paragraph::new(title).style(self.palette.base()), left);
        frame.render_widget(Paragraph::new(status).style(self.palette.base()), right);
    }
}
