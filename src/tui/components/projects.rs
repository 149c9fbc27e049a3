//! Project cards and the detail modal opened with Enter.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap};

use crate::core::content::Project;
use crate::tui::component::{Component, SectionView};
use crate::tui::components::centered_rect;
use crate::tui::theme::Palette;

pub struct ProjectsView<'a> {
    pub projects: &'a [Project],
    pub selected: usize,
    pub palette: Palette,
}

fn tag_spans(tags: &[&'static str], palette: Palette) -> Vec<Span<'static>> {
    tags.iter()
        .flat_map(|tag| {
            [
                Span::styled(format!("#{tag}"), palette.muted()),
                Span::raw(" "),
            ]
        })
        .collect()
}

impl ProjectsView<'_> {
    fn paragraph(&self) -> Paragraph<'static> {
        let p = self.palette;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("projects", p.heading()),
                Span::styled(" // case files", p.muted()),
            ]),
            Line::default(),
        ];
        for (i, project) in self.projects.iter().enumerate() {
            let selected = i == self.selected;
            let (marker, title_style) = if selected {
                ("▶ ", p.heading().add_modifier(Modifier::REVERSED))
            } else {
                ("  ", Style::default().fg(p.text).add_modifier(Modifier::BOLD))
            };
            lines.push(Line::from(vec![
                Span::styled(marker, p.accent()),
                Span::styled(project.title, title_style),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(project.summary, Style::default().fg(p.text)),
            ]));
            let mut tags = vec![Span::raw("  ")];
            tags.extend(tag_spans(project.tags, p));
            lines.push(Line::from(tags));
            lines.push(Line::default());
        }
        Paragraph::new(lines)
            .style(p.base())
            .wrap(Wrap { trim: false })
    }
}

impl Widget for ProjectsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}

impl SectionView for ProjectsView<'_> {
    fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }
}

/// Overlay with a project's full write-up.
pub struct ProjectModal<'a> {
    pub project: &'a Project,
    pub palette: Palette,
}

impl Component for ProjectModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let overlay = centered_rect(70, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(p.accent())
            .title(Span::styled(format!(" {} ", self.project.title), p.heading()))
            .title_bottom(Line::from(" Esc Close ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(Span::styled(self.project.summary, p.muted())),
            Line::default(),
            Line::from(Span::styled(self.project.detail, Style::default().fg(p.text))),
            Line::default(),
        ];
        lines.push(Line::from(tag_spans(self.project.tags, p)));

        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .style(p.base())
                .alignment(Alignment::Left)
                .wrap(Wrap { trim: true }),
            overlay,
        );
    }
}
