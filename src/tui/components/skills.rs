//! Skill cards with animated level bars. Cards outside the active filter
//! are dimmed rather than hidden so the layout stays put.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::content::{Skill, SkillCategory};
use crate::core::effects::ProgressBars;
use crate::core::state::SkillFilter;
use crate::tui::component::SectionView;
use crate::tui::components::bar;
use crate::tui::theme::Palette;

const NAME_WIDTH: usize = 24;
const TAG_WIDTH: usize = 8;
const MAX_BAR_WIDTH: usize = 40;

pub struct SkillsView<'a> {
    pub skills: &'a [Skill],
    pub bars: &'a ProgressBars,
    pub filter: SkillFilter,
    pub palette: Palette,
}

fn category_tag(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Soc => "[soc]",
        SkillCategory::Tools => "[tools]",
        SkillCategory::Code => "[code]",
    }
}

impl SkillsView<'_> {
    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let p = self.palette;
        let bar_width = usize::from(width)
            .saturating_sub(NAME_WIDTH + TAG_WIDTH + 6)
            .clamp(4, MAX_BAR_WIDTH);

        let filters = [
            SkillFilter::All,
            SkillFilter::Soc,
            SkillFilter::Tools,
            SkillFilter::Code,
        ];
        let mut filter_spans = vec![Span::styled("filter ", p.muted())];
        for filter in filters {
            let style = if filter == self.filter {
                p.heading().add_modifier(Modifier::REVERSED)
            } else {
                p.muted()
            };
            filter_spans.push(Span::styled(format!(" {} ", filter.label()), style));
            filter_spans.push(Span::raw(" "));
        }
        filter_spans.push(Span::styled("(f)", p.muted()));

        let mut lines = vec![
            Line::from(vec![
                Span::styled("skills", p.heading()),
                Span::styled(" // arsenal", p.muted()),
            ]),
            Line::from(filter_spans),
            Line::default(),
        ];

        for (i, skill) in self.skills.iter().enumerate() {
            let matched = self.filter.matches(skill.category);
            let value = self.bars.value(i);
            let (name_style, bar_style) = if matched {
                (Style::default().fg(p.text), p.accent())
            } else {
                (p.muted().add_modifier(Modifier::DIM), p.muted().add_modifier(Modifier::DIM))
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{:<width$}", skill.name, width = NAME_WIDTH), name_style),
                Span::styled(format!("{:<width$}", category_tag(skill.category), width = TAG_WIDTH), p.muted()),
                Span::styled(bar(value, bar_width), bar_style),
                Span::styled(format!(" {value:>3}%"), name_style),
            ]));
        }
        lines
    }
}

impl Widget for SkillsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines(area.width))
            .style(self.palette.base())
            .render(area, buf);
    }
}

impl SectionView for SkillsView<'_> {
    fn height(&self, _width: u16) -> u16 {
        3 + self.skills.len() as u16
    }
}
