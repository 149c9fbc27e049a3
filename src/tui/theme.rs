//! Colour palettes for the two themes.

use ratatui::style::{Color, Modifier, Style};

use crate::Theme;
use crate::core::toast::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub amber: Color,
    pub red: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(5, 10, 5),
                text: Color::Rgb(200, 208, 192),
                muted: Color::Rgb(96, 110, 90),
                accent: Color::Rgb(57, 255, 20),
                amber: Color::Rgb(255, 176, 0),
                red: Color::Rgb(255, 59, 59),
                border: Color::Rgb(30, 70, 30),
            },
            Theme::Light => Self {
                background: Color::Rgb(240, 244, 238),
                text: Color::Rgb(24, 32, 24),
                muted: Color::Rgb(110, 120, 106),
                accent: Color::Rgb(16, 128, 40),
                amber: Color::Rgb(176, 110, 0),
                red: Color::Rgb(190, 30, 30),
                border: Color::Rgb(150, 180, 150),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn heading(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.accent,
            Severity::Warn => self.amber,
            Severity::Critical => self.red,
        }
    }

    /// Threat level index 0..=4 mapped from green through amber to red.
    pub fn threat(&self, level: usize) -> Color {
        match level {
            0 | 1 => self.accent,
            2 | 3 => self.amber,
            _ => self.red,
        }
    }

    /// Matrix glyph colour at the given intensity.
    pub fn rain(&self, intensity: u8) -> Color {
        let Color::Rgb(r, g, b) = self.accent else {
            return self.accent;
        };
        let (br, bg, bb) = match self.background {
            Color::Rgb(r, g, b) => (r, g, b),
            _ => (0, 0, 0),
        };
        let mix = |fg: u8, back: u8| -> u8 {
            let t = u16::from(intensity);
            ((u16::from(fg) * t + u16::from(back) * (255 - t)) / 255) as u8
        };
        Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
    }
}
