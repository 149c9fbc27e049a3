//! Certification list with animated completion bars.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::content::Cert;
use crate::core::effects::ProgressBars;
use crate::tui::component::SectionView;
use crate::tui::components::bar;
use crate::tui::theme::Palette;

const BAR_WIDTH: usize = 30;

pub struct CertsView<'a> {
    pub certs: &'a [Cert],
    pub bars: &'a ProgressBars,
    pub palette: Palette,
}

impl CertsView<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("certifications", p.heading()),
                Span::styled(" // credentials", p.muted()),
            ]),
            Line::default(),
        ];
        for (i, cert) in self.certs.iter().enumerate() {
            let (status, status_style) = if cert.progress >= 100 {
                ("✓ VERIFIED", p.accent())
            } else {
                ("◌ IN PROGRESS", Style::default().fg(p.amber))
            };
            lines.push(Line::from(vec![
                Span::styled(cert.name, Style::default().fg(p.text).add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", cert.issuer), p.muted()),
            ]));
            let value = self.bars.value(i);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(bar(value, BAR_WIDTH), Style::default().fg(status_style.fg.unwrap_or(p.accent))),
                Span::styled(format!(" {value:>3}%  "), Style::default().fg(p.text)),
                Span::styled(status, status_style),
            ]));
            lines.push(Line::default());
        }
        lines
    }
}

impl Widget for CertsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .style(self.palette.base())
            .render(area, buf);
    }
}

impl SectionView for CertsView<'_> {
    fn height(&self, _width: u16) -> u16 {
        2 + 3 * self.certs.len() as u16
    }
}
