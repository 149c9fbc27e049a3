//! Frame layout: title bar, sidebar, scrollable section pane, footer, and
//! the overlays (drawer, project modal, toasts) drawn on top.

use crate::core::content;
use crate::core::section::SectionId;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::{Component, SectionView};
use crate::tui::components::{
    AboutView, CertsView, ContactView, Footer, HeroView, ProjectModal, ProjectsView,
    SIDEBAR_WIDTH, Sidebar, SkillsView, TitleBar, ToastStack,
};
use crate::tui::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::widgets::Block;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

/// Below this width the sidebar becomes a drawer toggled with `m`.
pub const DOCKED_SIDEBAR_MIN_WIDTH: u16 = 80;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let palette = Palette::for_theme(app.theme);
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    let [title_area, body_area, footer_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let effects = &app.effects;
    let visible = app.registry.visible();
    TitleBar {
        name: effects.glitch.state.text(),
        glitching: effects.glitch.state.is_glitching(),
        section: visible.map(SectionId::title).unwrap_or_default(),
        alert_count: effects.alerts.state.count(),
        threat_level: effects.alerts.state.level(),
        threat_index: effects.alerts.state.level_index(),
        clock: effects.clock.state.label(),
        theme: app.theme.label(),
        palette,
    }
    .render(frame, title_area);

    let docked = body_area.width >= DOCKED_SIDEBAR_MIN_WIDTH;
    let content_area = if docked {
        let [sidebar_area, content_area] =
            Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);
        Sidebar {
            links: app.registry.links(),
            overlay: false,
            palette,
        }
        .render(frame, sidebar_area);
        content_area
    } else {
        body_area
    };

    if let Some(section) = visible {
        draw_section(frame, content_area, app, section, palette, tui);
    }

    if !docked && app.drawer_open {
        let [drawer_area, _] =
            Layout::horizontal([Length(SIDEBAR_WIDTH), Min(0)]).areas(body_area);
        Sidebar {
            links: app.registry.links(),
            overlay: true,
            palette,
        }
        .render(frame, drawer_area);
    }

    Footer {
        section: visible,
        editing_form: app.form.editing,
        back_to_top: app.back_to_top_lit(),
        palette,
    }
    .render(frame, footer_area);

    if let Some(project) = app.open_modal.and_then(|i| content::PROJECTS.get(i)) {
        ProjectModal { project, palette }.render(frame, body_area);
    }

    ToastStack {
        toasts: app.toasts.toasts(),
        palette,
    }
    .render(frame, body_area);
}

fn draw_section(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    section: SectionId,
    palette: Palette,
    tui: &mut TuiState,
) {
    let effects = &app.effects;
    match section {
        SectionId::Hero => {
            tui.matrix_size = (area.width.saturating_sub(1), area.height);
            let view = HeroView {
                rain: &effects.matrix.state,
                name: effects.glitch.state.text(),
                glitching: effects.glitch.state.is_glitching(),
                typed: effects.typewriter.state.text(),
                counters: effects.counters.state.counters(),
                palette,
            };
            render_scrolled(frame, area, view, app.scroll, tui);
        }
        SectionId::About => {
            let view = AboutView {
                terminal: effects.terminal.state.lines(),
                radar: effects.radar.state.shapes(),
                milestone: content::TIMELINE.get(effects.timeline.state.index()),
                timeline_label: effects.timeline.state.label(),
                palette,
            };
            render_scrolled(frame, area, view, app.scroll, tui);
        }
        SectionId::Skills => {
            let view = SkillsView {
                skills: content::SKILLS,
                bars: &effects.skill_bars.state,
                filter: app.skill_filter,
                palette,
            };
            render_scrolled(frame, area, view, app.scroll, tui);
        }
        SectionId::Projects => {
            let view = ProjectsView {
                projects: content::PROJECTS,
                selected: app.selected_project,
                palette,
            };
            render_scrolled(frame, area, view, app.scroll, tui);
        }
        SectionId::Certs => {
            let view = CertsView {
                certs: content::CERTS,
                bars: &effects.cert_bars.state,
                palette,
            };
            render_scrolled(frame, area, view, app.scroll, tui);
        }
        SectionId::Contact => {
            let view = ContactView {
                form: &app.form,
                palette,
            };
            render_scrolled(frame, area, view, app.scroll, tui);
        }
    }
}

/// Render a section view into a scroll buffer and record how far it can scroll.
fn render_scrolled<V: SectionView>(
    frame: &mut Frame,
    area: Rect,
    view: V,
    scroll: u16,
    tui: &mut TuiState,
) {
    let content_width = area.width.saturating_sub(1);
    let total_height = view.height(content_width).max(area.height);
    tui.scroll_limit = total_height.saturating_sub(area.height);

    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    scroll_view.render_widget(view, Rect::new(0, 0, content_width, total_height));

    let mut state = ScrollViewState::with_offset(Position::new(0, scroll.min(tui.scroll_limit)));
    frame.render_stateful_widget(scroll_view, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::quiet_app;
    use crate::tui::components::test_render::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, width: u16, height: u16) -> (String, TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        (buffer_text(terminal.backend().buffer()), tui)
    }

    #[test]
    fn wide_layout_docks_sidebar() {
        let app = quiet_app();
        let (text, tui) = draw(&app, 120, 40);
        assert!(text.contains("5 Certifications"));
        assert!(text.contains("whoami"));
        assert_eq!(tui.matrix_size, (120 - SIDEBAR_WIDTH - 1, 38));
    }

    #[test]
    fn narrow_layout_hides_sidebar_until_drawer_opens() {
        let mut app = quiet_app();
        let (text, _) = draw(&app, 60, 30);
        assert!(!text.contains(" NAV "));

        update(&mut app, Action::ToggleDrawer);
        let (text, _) = draw(&app, 60, 30);
        assert!(text.contains(" NAV "));
        assert!(text.contains("5 Certifications"));
    }

    #[test]
    fn tall_section_reports_scroll_limit() {
        let mut app = quiet_app();
        update(&mut app, Action::Navigate("contact".to_string()));
        let (_, tui) = draw(&app, 100, 10);
        assert!(tui.scroll_limit > 0);

        let (_, tui) = draw(&app, 100, 60);
        assert_eq!(tui.scroll_limit, 0);
    }

    #[test]
    fn open_modal_is_drawn_over_projects() {
        let mut app = quiet_app();
        update(&mut app, Action::Navigate("projects".to_string()));
        update(&mut app, Action::OpenModal);
        let (text, _) = draw(&app, 120, 40);
        assert!(text.contains("Esc Close"));
    }

    #[test]
    fn toasts_render_on_top() {
        let mut app = quiet_app();
        update(&mut app, Action::ToggleTheme);
        let (text, _) = draw(&app, 120, 40);
        assert!(text.contains("Light mode activated"));
    }
}
