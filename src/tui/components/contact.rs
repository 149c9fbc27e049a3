//! # Contact View
//!
//! ```text
//! contact // secure channel
//!
//! ▸ Name     Ada Lovelace▌
//!   Email    ada@example
//!            Enter a valid email address
//!   Subject  Select inquiry type...  ▾
//!   Message  Hello
//!                                      5 / 500
//!   [x] I consent to be contacted
//!
//!   [ TRANSMIT MESSAGE ]
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::core::form::{ContactForm, Field, MAX_MESSAGE_LEN, Subject, SubmitStatus};
use crate::tui::component::SectionView;
use crate::tui::theme::Palette;

const LABEL_WIDTH: usize = 9;
const INDENT: &str = "           ";

pub struct ContactView<'a> {
    pub form: &'a ContactForm,
    pub palette: Palette,
}

impl ContactView<'_> {
    fn focused(&self, field: Field) -> bool {
        self.form.editing && self.form.focus() == field
    }

    fn label(&self, field: Field) -> Vec<Span<'static>> {
        let p = self.palette;
        let (marker, style) = if self.focused(field) {
            ("▸ ", p.heading())
        } else {
            ("  ", p.muted())
        };
        vec![
            Span::styled(marker, p.accent()),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                style,
            ),
        ]
    }

    fn text_field(&self, field: Field, value: &str) -> Line<'static> {
        let mut spans = self.label(field);
        spans.push(Span::styled(value.to_string(), Style::default().fg(self.palette.text)));
        if self.focused(field) {
            spans.push(Span::styled(
                "▌",
                self.palette.accent().add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }

    fn error_line(&self, field: Field) -> Option<Line<'static>> {
        self.form.error(field).map(|error| {
            Line::from(vec![
                Span::raw(INDENT),
                Span::styled(error.to_string(), Style::default().fg(self.palette.red)),
            ])
        })
    }

    fn subject_lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut spans = self.label(Field::Subject);
        match self.form.subject {
            Some(subject) => spans.push(Span::styled(subject.label(), Style::default().fg(p.text))),
            None => spans.push(Span::styled("Select inquiry type...", p.muted())),
        }
        let open = self.form.dropdown();
        spans.push(Span::styled(if open.is_some() { "  ▴" } else { "  ▾" }, p.accent()));
        let mut lines = vec![Line::from(spans)];

        if let Some(highlighted) = open {
            for (i, option) in Subject::ALL.iter().enumerate() {
                let style = if i == highlighted {
                    p.heading().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(p.text)
                };
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(format!(" {} ", option.label()), style),
                ]));
            }
        }
        lines
    }

    fn counter_line(&self) -> Line<'static> {
        let p = self.palette;
        let style = if self.form.near_limit() {
            Style::default().fg(p.amber)
        } else {
            p.muted()
        };
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{} / {}", self.form.char_count(), MAX_MESSAGE_LEN),
                style,
            ),
        ])
    }

    fn consent_line(&self) -> Line<'static> {
        let p = self.palette;
        let (marker, style) = if self.focused(Field::Consent) {
            ("▸ ", p.heading())
        } else {
            ("  ", Style::default().fg(p.text))
        };
        let check = if self.form.consent { "[x]" } else { "[ ]" };
        Line::from(vec![
            Span::styled(marker, p.accent()),
            Span::styled(format!("{check} I consent to be contacted"), style),
        ])
    }

    fn button_line(&self) -> Line<'static> {
        let p = self.palette;
        let (text, style) = match self.form.status {
            SubmitStatus::Idle => ("[ TRANSMIT MESSAGE ]", p.heading()),
            SubmitStatus::Submitting => (
                "[ TRANSMITTING... ]",
                Style::default().fg(p.amber).add_modifier(Modifier::BOLD),
            ),
            SubmitStatus::Sent => ("[ MESSAGE SENT ✓ ]", p.accent().add_modifier(Modifier::BOLD)),
        };
        Line::from(vec![Span::raw("  "), Span::styled(text, style)])
    }

    fn paragraph(&self) -> Paragraph<'static> {
        let p = self.palette;
        let mut lines = vec![
            Line::from(vec![
                Span::styled("contact", p.heading()),
                Span::styled(" // secure channel", p.muted()),
            ]),
            Line::default(),
        ];

        lines.push(self.text_field(Field::Name, &self.form.name));
        lines.extend(self.error_line(Field::Name));
        lines.push(self.text_field(Field::Email, &self.form.email));
        lines.extend(self.error_line(Field::Email));
        lines.extend(self.subject_lines());
        lines.extend(self.error_line(Field::Subject));
        lines.push(self.text_field(Field::Message, &self.form.message));
        lines.push(self.counter_line());
        lines.extend(self.error_line(Field::Message));
        lines.push(self.consent_line());
        lines.extend(self.error_line(Field::Consent));
        lines.push(Line::default());
        lines.push(self.button_line());

        Paragraph::new(lines)
            .style(p.base())
            .wrap(Wrap { trim: false })
    }
}

impl Widget for ContactView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paragraph().render(area, buf);
    }
}

impl SectionView for ContactView<'_> {
    fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;
    use crate::tui::components::test_render::render_view;

    fn render(form: &ContactForm) -> String {
        render_view(
            ContactView {
                form,
                palette: Palette::for_theme(Theme::Dark),
            },
            80,
        )
    }

    #[test]
    fn blank_form_shows_placeholders() {
        let text = render(&ContactForm::new());
        assert!(text.contains("Select inquiry type..."));
        assert!(text.contains("0 / 500"));
        assert!(text.contains("[ ] I consent to be contacted"));
        assert!(text.contains("TRANSMIT MESSAGE"));
        assert!(!text.contains('▸'));
    }

    #[test]
    fn errors_appear_under_their_fields() {
        let mut form = ContactForm::new();
        form.validate_all();
        let text = render(&form);
        assert!(text.contains("Name is required"));
        assert!(text.contains("Please select a subject"));
        assert!(text.contains("You must consent to proceed"));
    }

    #[test]
    fn open_dropdown_lists_every_subject() {
        let mut form = ContactForm::new();
        form.begin_editing();
        form.focus_next();
        form.focus_next();
        form.toggle_dropdown();
        let text = render(&form);
        for subject in Subject::ALL {
            assert!(text.contains(subject.label()));
        }
        assert!(text.contains("▸ Subject"));
    }

    #[test]
    fn button_follows_submit_status() {
        let mut form = ContactForm::new();
        form.status = SubmitStatus::Submitting;
        assert!(render(&form).contains("TRANSMITTING..."));
        form.status = SubmitStatus::Sent;
        assert!(render(&form).contains("MESSAGE SENT ✓"));
    }
}
