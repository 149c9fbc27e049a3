//! Bottom line: key hints for the visible section and the back-to-top mark.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::section::SectionId;
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const BACK_TO_TOP: &str = " ⇡ Home ";

pub struct Footer {
    pub section: Option<SectionId>,
    pub editing_form: bool,
    pub back_to_top: bool,
    pub palette: Palette,
}

impl Footer {
    fn hints(&self) -> &'static str {
        if self.editing_form {
            return " Tab next field · Enter submit/choose · Space consent · Esc leave form";
        }
        match self.section {
            Some(SectionId::About) => " 1-6 jump · ←/→ timeline · r replay · t theme · m menu · q quit",
            Some(SectionId::Skills) => " 1-6 jump · f filter · ↑/↓ scroll · t theme · m menu · q quit",
            Some(SectionId::Projects) => {
                " 1-6 jump · ↑/↓ select · Enter details · Esc close · t theme · q quit"
            }
            Some(SectionId::Contact) => " 1-6 jump · Enter/Tab edit form · t theme · m menu · q quit",
            _ => " 1-6 jump · Tab next · ↑/↓ scroll · t theme · m menu · q quit",
        }
    }
}

impl Component for Footer {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let [hints_area, top_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(BACK_TO_TOP.chars().count() as u16),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(self.hints(), p.muted()))).style(p.base()),
            hints_area,
        );

        let top_style = if self.back_to_top {
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
        } else {
            p.muted().add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(BACK_TO_TOP, top_style)).style(p.base()),
            top_area,
        );
    }
}
