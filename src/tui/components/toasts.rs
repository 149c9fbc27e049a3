//! Toast stack in the top-right corner, newest at the bottom.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::toast::{Toast, ToastStage};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 48;

pub struct ToastStack<'a> {
    pub toasts: &'a [Toast],
    pub palette: Palette,
}

impl Component for ToastStack<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let fits = usize::from(area.height / TOAST_HEIGHT);
        let skip = self.toasts.len().saturating_sub(fits);

        for (slot, toast) in self.toasts.iter().skip(skip).enumerate() {
            let text_width = toast.message.width() as u16 + 4;
            let width = text_width.min(MAX_TOAST_WIDTH).min(area.width);
            let rect = Rect {
                x: area.right().saturating_sub(width),
                y: area.y + slot as u16 * TOAST_HEIGHT,
                width,
                height: TOAST_HEIGHT,
            };

            let mut style = Style::default().fg(self.palette.severity(toast.severity));
            if toast.stage == ToastStage::Fading {
                style = style.add_modifier(Modifier::DIM);
            }
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(toast.message.as_str())
                    .style(self.palette.base().patch(style))
                    .block(Block::bordered().border_style(style)),
                rect,
            );
        }
    }
}
