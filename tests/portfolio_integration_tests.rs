use folio::Theme;
use folio::core::action::{Action, Command, update};
use folio::core::config::ResolvedConfig;
use folio::core::effects::typewriter::{REVEAL_MS, START_DELAY_MS};
use folio::core::form::{RESET_DELAY_MS, SUBMIT_DELAY_MS, Subject, SubmitStatus};
use folio::core::nav::NavigationError;
use folio::core::section::SectionId;
use folio::core::state::App;
use folio::core::toast::{DISPLAY_MS, FADE_MS, Severity};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ============================================================================
// Helper Functions
// ============================================================================

fn quiet_config() -> ResolvedConfig {
    ResolvedConfig {
        notifications: false,
        greeting: false,
        phrases: vec!["SOC".to_string()],
        ..ResolvedConfig::default()
    }
}

fn started(config: &ResolvedConfig) -> App {
    let mut app = App::new(config, StdRng::seed_from_u64(42));
    app.start(0);
    app
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn exactly_one_section_is_visible_after_every_navigation() {
    let mut app = started(&quiet_config());
    for id in ["about", "skills", "projects", "certs", "contact", "hero", "skills"] {
        update(&mut app, Action::Navigate(id.to_string()));
        assert_eq!(app.registry.visible_count(), 1);
        assert_eq!(app.registry.visible().map(SectionId::as_str), Some(id));
    }
}

#[test]
fn unknown_section_leaves_state_untouched() {
    let mut app = started(&quiet_config());
    update(&mut app, Action::Navigate("skills".to_string()));
    let result = app.navigate("blog");
    assert_eq!(
        result,
        Err(NavigationError::UnknownSection("blog".to_string()))
    );
    assert_eq!(app.registry.visible(), Some(SectionId::Skills));
}

#[test]
fn configured_start_section_is_shown_first() {
    let config = ResolvedConfig {
        start_section: "certs".to_string(),
        ..quiet_config()
    };
    let app = started(&config);
    assert_eq!(app.registry.visible(), Some(SectionId::Certs));
}

// ============================================================================
// Effects on the virtual clock
// ============================================================================

#[test]
fn typewriter_reveals_one_character_per_step() {
    let mut app = started(&quiet_config());
    update(&mut app, Action::Tick(START_DELAY_MS - 1));
    assert_eq!(app.effects.typewriter.state.text(), "");

    update(&mut app, Action::Tick(START_DELAY_MS));
    assert_eq!(app.effects.typewriter.state.text(), "S");

    update(&mut app, Action::Tick(START_DELAY_MS + 2 * REVEAL_MS));
    assert_eq!(app.effects.typewriter.state.text(), "SOC");
}

#[test]
fn toast_fades_then_disappears() {
    let mut app = started(&quiet_config());
    update(&mut app, Action::ToggleTheme);
    assert_eq!(app.theme, Theme::Light);
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts.toasts()[0].severity, Severity::Info);

    update(&mut app, Action::Tick(DISPLAY_MS + FADE_MS - 1));
    assert_eq!(app.toasts.len(), 1);

    update(&mut app, Action::Tick(DISPLAY_MS + FADE_MS));
    assert!(app.toasts.is_empty());
}

// ============================================================================
// Contact form
// ============================================================================

#[test]
fn contact_form_submits_then_resets() {
    let mut app = started(&quiet_config());
    update(&mut app, Action::Navigate("contact".to_string()));
    app.form.name = "Ada".to_string();
    app.form.email = "ada@example.com".to_string();
    app.form.subject = Some(Subject::Consulting);
    app.form.message = "Need a threat hunt".to_string();
    app.form.consent = true;

    update(&mut app, Action::SubmitForm);
    assert_eq!(app.form.status, SubmitStatus::Submitting);

    update(&mut app, Action::Tick(SUBMIT_DELAY_MS));
    assert_eq!(app.form.status, SubmitStatus::Sent);
    assert_eq!(app.toasts.len(), 2);

    update(&mut app, Action::Tick(SUBMIT_DELAY_MS + RESET_DELAY_MS));
    assert_eq!(app.form.status, SubmitStatus::Idle);
    assert!(app.form.name.is_empty());
    assert!(app.form.subject.is_none());
}

#[test]
fn invalid_form_raises_one_critical_toast() {
    let mut app = started(&quiet_config());
    update(&mut app, Action::Navigate("contact".to_string()));
    app.form.email = "not-an-email".to_string();

    update(&mut app, Action::SubmitForm);
    assert_eq!(app.form.status, SubmitStatus::Idle);
    assert!(app.form.has_errors());
    assert_eq!(app.toasts.len(), 1);
    assert_eq!(app.toasts.toasts()[0].severity, Severity::Critical);
}

#[test]
fn quit_cancels_every_effect_timer() {
    let mut app = started(&quiet_config());
    assert_eq!(update(&mut app, Action::Quit), Command::Quit);
    assert!(!app.effects.typewriter.is_running());
    assert!(!app.effects.matrix.is_running());
    assert!(!app.effects.clock.is_running());
    assert!(app.scheduler.is_empty());
}

#[test]
fn quit_drops_pending_form_submission() {
    let mut app = started(&quiet_config());
    update(&mut app, Action::Navigate("contact".to_string()));
    app.form.name = "Ada".to_string();
    app.form.email = "ada@example.com".to_string();
    app.form.subject = Some(Subject::Consulting);
    app.form.message = "Need a threat hunt".to_string();
    app.form.consent = true;
    update(&mut app, Action::SubmitForm);

    assert_eq!(update(&mut app, Action::Quit), Command::Quit);
    assert!(app.scheduler.is_empty());
    update(&mut app, Action::Tick(SUBMIT_DELAY_MS + RESET_DELAY_MS));
    assert_eq!(app.form.status, SubmitStatus::Submitting);
    assert!(app.toasts.is_empty());
}
