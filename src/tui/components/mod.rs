//! # TUI Components
//!
//! Two kinds of component live here:
//!
//! - Frame components (`Component`): chrome drawn straight onto the frame.
//!   `TitleBar`, `Sidebar`, `Footer`, `ToastStack`, `ProjectModal`.
//! - Section views (`SectionView`): one per portfolio section, rendered into
//!   the scrollable content pane. `HeroView`, `AboutView`, `SkillsView`,
//!   `ProjectsView`, `CertsView`, `ContactView`.
//!
//! Every component receives its data as props borrowed from `App` plus a
//! `Palette`, and never mutates core state.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file + shared helpers)
//! ├── title_bar.rs  (glitch name, alerts, threat level, clock)
//! ├── sidebar.rs    (nav links / drawer)
//! ├── footer.rs     (key hints, back-to-top)
//! ├── toasts.rs     (toast stack)
//! ├── hero.rs       (matrix rain, typewriter, counters)
//! ├── about.rs      (terminal replay, radar, timeline)
//! ├── skills.rs
//! ├── projects.rs   (cards + modal)
//! ├── certs.rs
//! └── contact.rs    (form)
//! ```

mod about;
mod certs;
mod contact;
mod footer;
mod hero;
mod projects;
mod sidebar;
mod skills;
mod title_bar;
mod toasts;

pub use about::AboutView;
pub use certs::CertsView;
pub use contact::ContactView;
pub use footer::Footer;
pub use hero::HeroView;
pub use projects::{ProjectModal, ProjectsView};
pub use sidebar::{SIDEBAR_WIDTH, Sidebar};
pub use skills::SkillsView;
pub use title_bar::TitleBar;
pub use toasts::ToastStack;

use ratatui::layout::{Constraint, Layout, Rect};

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// A text progress bar `width` cells wide for a percentage in 0..=100.
pub fn bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width).div_ceil(100).min(width);
    let mut out = String::with_capacity(width * 3);
    out.extend(std::iter::repeat_n(BAR_FILLED, filled));
    out.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    out
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0, 4), "░░░░");
        assert_eq!(bar(50, 4), "██░░");
        assert_eq!(bar(100, 4), "████");
        assert_eq!(bar(200, 4), "████");
    }

    #[test]
    fn bar_rounds_partial_cells_up() {
        assert_eq!(bar(1, 10), "█░░░░░░░░░");
    }

    #[test]
    fn centered_rect_sits_inside_outer() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
