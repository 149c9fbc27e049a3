//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! User presses `2`? That's `Action::Navigate("about")`.
//! Wall clock moves on? That's `Action::Tick(now_ms)`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state in place. No terminal I/O here; the TUI does that.
//!
//! ```text
//! App + Action  →  update()  →  App' + Command
//! ```
//!
//! The returned `Command` tells the event loop if it has anything left to do.

use log::{debug, info, warn};

use crate::Theme;
use crate::core::content;
use crate::core::form::{SUBMIT_DELAY_MS, SubmitStatus};
use crate::core::section::{Activation, SectionId};
use crate::core::state::{App, Task};
use crate::core::toast::Severity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(String),
    NextSection,
    PreviousSection,
    /// Advance the virtual clock to this many ms since start.
    Tick(u64),
    ToggleTheme,
    ToggleDrawer,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    /// The view reports the largest useful scroll offset.
    ScrollLimit(u16),
    TimelinePrev,
    TimelineNext,
    RerunTerminal,
    CycleSkillFilter,
    SelectPrevProject,
    SelectNextProject,
    OpenModal,
    CloseModals,
    CanvasResized { cols: u16, rows: u16 },
    Form(FormAction),
    SubmitForm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Begin,
    End,
    Input(char),
    Backspace,
    NextField,
    PrevField,
    ToggleDropdown,
    CloseDropdown,
    DropdownUp,
    DropdownDown,
    ChooseSubject,
    ToggleConsent,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Command {
    if !matches!(action, Action::Tick(_)) {
        debug!("Action: {:?}", action);
    }

    match action {
        Action::Navigate(id) => {
            if let Err(e) = app.navigate(&id) {
                debug!("Navigate failed: {e}");
                app.notify(format!("Unknown section: {id}"), Severity::Warn);
            }
        }
        Action::NextSection => {
            app.next_section();
        }
        Action::PreviousSection => {
            app.previous_section();
        }
        Action::Tick(now_ms) => app.tick(now_ms),
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            info!("Theme switched to {}", app.theme.label());
            let message = match app.theme {
                Theme::Light => "☀ Light mode activated",
                Theme::Dark => "● Dark mode activated",
            };
            app.notify(message, Severity::Info);
        }
        Action::ToggleDrawer => app.drawer_open = !app.drawer_open,
        Action::ScrollUp => app.scroll = app.scroll.saturating_sub(1),
        Action::ScrollDown => app.scroll = app.scroll.saturating_add(1).min(app.scroll_limit),
        Action::ScrollToTop => app.scroll = 0,
        Action::ScrollLimit(limit) => {
            app.scroll_limit = limit;
            app.scroll = app.scroll.min(limit);
        }
        Action::TimelinePrev => {
            if app.registry.is_visible(SectionId::About) {
                app.effects.timeline.state.prev();
            }
        }
        Action::TimelineNext => {
            if app.registry.is_visible(SectionId::About) {
                app.effects.timeline.state.next();
            }
        }
        Action::RerunTerminal => {
            if app.registry.is_visible(SectionId::About) {
                app.activate(Activation::TerminalReplay);
            }
        }
        Action::CycleSkillFilter => {
            if app.registry.is_visible(SectionId::Skills) {
                app.skill_filter = app.skill_filter.next();
            }
        }
        Action::SelectPrevProject => {
            let len = content::PROJECTS.len();
            app.selected_project = (app.selected_project + len - 1) % len;
        }
        Action::SelectNextProject => {
            app.selected_project = (app.selected_project + 1) % content::PROJECTS.len();
        }
        Action::OpenModal => {
            if app.registry.is_visible(SectionId::Projects) {
                app.open_modal = Some(app.selected_project);
            }
        }
        Action::CloseModals => app.open_modal = None,
        Action::CanvasResized { cols, rows } => app.resize_matrix(cols, rows),
        Action::Form(form_action) => apply_form_action(app, form_action),
        Action::SubmitForm => {
            app.submit_form();
        }
        Action::Quit => {
            app.shutdown();
            return Command::Quit;
        }
    }
    Command::None
}

fn apply_form_action(app: &mut App, action: FormAction) {
    let form = &mut app.form;
    match action {
        FormAction::Begin => form.begin_editing(),
        FormAction::End => form.end_editing(),
        FormAction::Input(c) => form.input_char(c),
        FormAction::Backspace => form.backspace(),
        FormAction::NextField => form.focus_next(),
        FormAction::PrevField => form.focus_previous(),
        FormAction::ToggleDropdown => form.toggle_dropdown(),
        FormAction::CloseDropdown => form.close_dropdown(),
        FormAction::DropdownUp => form.move_dropdown(-1),
        FormAction::DropdownDown => form.move_dropdown(1),
        FormAction::ChooseSubject => form.choose_highlighted(),
        FormAction::ToggleConsent => form.toggle_consent(),
    }
}

impl App {
    /// Validate the contact form and, if it passes, start the send sequence.
    ///
    /// Returns whether the form was accepted. A rejected form raises one
    /// aggregate toast; the per-field messages live on the form itself.
    pub fn submit_form(&mut self) -> bool {
        if self.form.status != SubmitStatus::Idle {
            debug!("Submit ignored while {:?}", self.form.status);
            return false;
        }
        if !self.form.validate_all() {
            warn!("Contact form rejected");
            self.notify("⚠ Please fix the errors in the form", Severity::Critical);
            return false;
        }
        info!("Contact form accepted, transmitting");
        self.form.status = SubmitStatus::Submitting;
        self.form.end_editing();
        self.scheduler
            .schedule_at(self.now_ms + SUBMIT_DELAY_MS, Task::FormSent);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form::{Field, FieldError, RESET_DELAY_MS, Subject};
    use crate::core::state::SkillFilter;
    use crate::test_support::quiet_app;

    fn fill_valid_form(app: &mut App) {
        app.form.name = "Ada".to_string();
        app.form.email = "ada@example.com".to_string();
        app.form.subject = Some(Subject::JobOpportunity);
        app.form.message = "Let's talk".to_string();
        app.form.consent = true;
    }

    #[test]
    fn unknown_navigation_raises_warn_toast() {
        let mut app = quiet_app();
        update(&mut app, Action::Navigate("blog".to_string()));
        assert_eq!(app.registry.visible(), Some(SectionId::Hero));
        assert_eq!(app.toasts.len(), 1);
        let toast = &app.toasts.toasts()[0];
        assert_eq!(toast.severity, Severity::Warn);
        assert_eq!(toast.message, "Unknown section: blog");
    }

    #[test]
    fn theme_toggle_flips_and_announces() {
        let mut app = quiet_app();
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.toasts.toasts()[0].message, "☀ Light mode activated");
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.toasts.toasts()[1].message, "● Dark mode activated");
    }

    #[test]
    fn scroll_is_clamped_to_reported_limit() {
        let mut app = quiet_app();
        update(&mut app, Action::ScrollLimit(2));
        for _ in 0..5 {
            update(&mut app, Action::ScrollDown);
        }
        assert_eq!(app.scroll, 2);
        update(&mut app, Action::ScrollLimit(1));
        assert_eq!(app.scroll, 1);
        update(&mut app, Action::ScrollToTop);
        assert_eq!(app.scroll, 0);
        update(&mut app, Action::ScrollUp);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn back_to_top_lights_past_threshold() {
        let mut app = quiet_app();
        app.scroll = 10;
        assert!(!app.back_to_top_lit());
        update(&mut app, Action::ScrollDown);
        assert!(app.back_to_top_lit());
    }

    #[test]
    fn drawer_toggles_and_navigation_closes_it() {
        let mut app = quiet_app();
        update(&mut app, Action::ToggleDrawer);
        assert!(app.drawer_open);
        update(&mut app, Action::Navigate("certs".to_string()));
        assert!(!app.drawer_open);
    }

    #[test]
    fn timeline_keys_only_work_on_about() {
        let mut app = quiet_app();
        update(&mut app, Action::TimelineNext);
        assert_eq!(app.effects.timeline.state.index(), 0);

        update(&mut app, Action::Navigate("about".to_string()));
        update(&mut app, Action::TimelinePrev);
        let last = content::TIMELINE.len() - 1;
        assert_eq!(app.effects.timeline.state.index(), last);
        update(&mut app, Action::TimelineNext);
        assert_eq!(app.effects.timeline.state.index(), 0);
    }

    #[test]
    fn skill_filter_only_cycles_on_skills() {
        let mut app = quiet_app();
        update(&mut app, Action::CycleSkillFilter);
        assert_eq!(app.skill_filter, SkillFilter::All);
        update(&mut app, Action::Navigate("skills".to_string()));
        update(&mut app, Action::CycleSkillFilter);
        assert_eq!(app.skill_filter, SkillFilter::Soc);
    }

    #[test]
    fn project_modal_opens_selected_and_escape_closes() {
        let mut app = quiet_app();
        update(&mut app, Action::Navigate("projects".to_string()));
        update(&mut app, Action::SelectPrevProject);
        assert_eq!(app.selected_project, content::PROJECTS.len() - 1);
        update(&mut app, Action::SelectNextProject);
        update(&mut app, Action::SelectNextProject);
        update(&mut app, Action::OpenModal);
        assert_eq!(app.open_modal, Some(1));
        update(&mut app, Action::CloseModals);
        assert_eq!(app.open_modal, None);
        // Escape with nothing open is harmless
        update(&mut app, Action::CloseModals);
        assert_eq!(app.open_modal, None);
    }

    #[test]
    fn rerun_terminal_restarts_replay() {
        let mut app = quiet_app();
        update(&mut app, Action::Navigate("about".to_string()));
        update(&mut app, Action::Tick(5_000));
        assert!(app.effects.terminal.state.is_finished());

        update(&mut app, Action::RerunTerminal);
        assert!(app.effects.terminal.state.lines().is_empty());
        assert!(app.effects.terminal.is_running());
    }

    #[test]
    fn consent_unchecked_gives_exactly_one_toast() {
        let mut app = quiet_app();
        fill_valid_form(&mut app);
        app.form.consent = false;

        assert!(!app.submit_form());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts.toasts()[0].severity, Severity::Critical);
        assert_eq!(app.form.error(Field::Consent), Some(FieldError::UncheckedConsent));
        assert_eq!(app.form.error(Field::Name), None);
        assert_eq!(app.form.status, SubmitStatus::Idle);
    }

    #[test]
    fn empty_form_annotates_every_field_with_one_toast() {
        let mut app = quiet_app();
        update(&mut app, Action::SubmitForm);
        assert_eq!(app.toasts.len(), 1);
        for field in Field::ALL {
            assert!(app.form.error(field).is_some(), "{field:?} not annotated");
        }
    }

    #[test]
    fn valid_form_sends_then_resets() {
        let mut app = quiet_app();
        fill_valid_form(&mut app);

        assert!(app.submit_form());
        assert_eq!(app.form.status, SubmitStatus::Submitting);
        assert!(app.toasts.is_empty());

        // A second submit while transmitting is ignored
        assert!(!app.submit_form());

        update(&mut app, Action::Tick(SUBMIT_DELAY_MS));
        assert_eq!(app.form.status, SubmitStatus::Sent);
        assert_eq!(app.toasts.len(), 2);
        assert!(app.toasts.toasts().iter().all(|t| t.severity == Severity::Info));

        update(&mut app, Action::Tick(SUBMIT_DELAY_MS + RESET_DELAY_MS));
        assert_eq!(app.form.status, SubmitStatus::Idle);
        assert!(app.form.name.is_empty());
        assert_eq!(app.form.subject, None);
        assert!(!app.form.consent);
    }

    #[test]
    fn form_actions_edit_the_focused_field() {
        let mut app = quiet_app();
        update(&mut app, Action::Form(FormAction::Begin));
        for c in "Al".chars() {
            update(&mut app, Action::Form(FormAction::Input(c)));
        }
        update(&mut app, Action::Form(FormAction::Backspace));
        assert_eq!(app.form.name, "A");

        // Leaving an empty email field flags it
        update(&mut app, Action::Form(FormAction::NextField));
        update(&mut app, Action::Form(FormAction::NextField));
        assert_eq!(app.form.error(Field::Email), Some(FieldError::MissingRequired(Field::Email)));

        assert_eq!(app.form.focus(), Field::Subject);
        update(&mut app, Action::Form(FormAction::ToggleDropdown));
        update(&mut app, Action::Form(FormAction::DropdownDown));
        update(&mut app, Action::Form(FormAction::ChooseSubject));
        assert_eq!(app.form.subject, Some(Subject::Collaboration));
        assert_eq!(app.form.dropdown(), None);
    }

    #[test]
    fn quit_returns_quit_command() {
        let mut app = quiet_app();
        assert_eq!(update(&mut app, Action::Quit), Command::Quit);
        assert!(!app.effects.typewriter.is_running());
        assert_eq!(update(&mut app, Action::ToggleDrawer), Command::None);
    }
}
