//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. Core
//! never sees a key code: `action_for` maps events to actions, and the
//! view reports back what only it can measure (scroll extent, hero canvas
//! size) as actions too.
//!
//! ## Frame Loop
//!
//! Every effect is timer-driven, so the loop redraws on a fixed cadence:
//!
//! 1. `Tick(elapsed_ms)` advances the virtual clock and fires due timers.
//! 2. Draw. The view records `scroll_limit` and `matrix_size` in `TuiState`.
//! 3. Feed changed measurements back as `ScrollLimit` / `CanvasResized`.
//! 4. Poll input for up to `FRAME_MS`, then drain whatever else is queued.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Command, FormAction, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::Field;
use crate::core::section::SectionId;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Render loop period (25 fps).
const FRAME_MS: u64 = 40;

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    /// Largest scroll offset for the visible section, measured at draw time.
    pub scroll_limit: u16,
    /// Hero pane size in cells, measured at draw time.
    pub matrix_size: (u16, u16),
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Map a terminal event to the action it means in the current state.
pub fn action_for(event: TuiEvent, app: &App) -> Option<Action> {
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }
    if app.form.editing {
        return form_action_for(event, app).map(Action::Form).or_else(|| {
            (event == TuiEvent::Enter).then_some(Action::SubmitForm)
        });
    }

    let section = app.registry.visible();
    let action = match event {
        TuiEvent::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            Action::Navigate(SectionId::ALL[index].as_str().to_string())
        }
        TuiEvent::Char('q') => Action::Quit,
        TuiEvent::Char('t') => Action::ToggleTheme,
        TuiEvent::Char('m') => Action::ToggleDrawer,
        TuiEvent::Char('r') => Action::RerunTerminal,
        TuiEvent::Char('f') => Action::CycleSkillFilter,
        TuiEvent::Tab if section == Some(SectionId::Contact) => Action::Form(FormAction::Begin),
        TuiEvent::Tab => Action::NextSection,
        TuiEvent::BackTab => Action::PreviousSection,
        TuiEvent::Left => Action::TimelinePrev,
        TuiEvent::Right => Action::TimelineNext,
        TuiEvent::Up if section == Some(SectionId::Projects) => Action::SelectPrevProject,
        TuiEvent::Down if section == Some(SectionId::Projects) => Action::SelectNextProject,
        TuiEvent::Up => Action::ScrollUp,
        TuiEvent::Down => Action::ScrollDown,
        TuiEvent::Home => Action::ScrollToTop,
        TuiEvent::Enter => match section {
            Some(SectionId::Projects) => Action::OpenModal,
            Some(SectionId::Contact) => Action::Form(FormAction::Begin),
            _ => return None,
        },
        TuiEvent::Escape => Action::CloseModals,
        TuiEvent::Char(_) | TuiEvent::Backspace | TuiEvent::Resize | TuiEvent::ForceQuit => {
            return None;
        }
    };
    Some(action)
}

/// Keys while the contact form holds focus. `None` for Enter outside the
/// subject field means "submit".
fn form_action_for(event: TuiEvent, app: &App) -> Option<FormAction> {
    let form = &app.form;
    let dropdown_open = form.dropdown().is_some();
    let action = match event {
        TuiEvent::Char(c) => FormAction::Input(c),
        TuiEvent::Backspace => FormAction::Backspace,
        TuiEvent::Tab | TuiEvent::Down if !dropdown_open => FormAction::NextField,
        TuiEvent::BackTab | TuiEvent::Up if !dropdown_open => FormAction::PrevField,
        TuiEvent::Up => FormAction::DropdownUp,
        TuiEvent::Down => FormAction::DropdownDown,
        TuiEvent::Tab | TuiEvent::BackTab => FormAction::CloseDropdown,
        TuiEvent::Enter if form.focus() == Field::Subject => {
            if dropdown_open {
                FormAction::ChooseSubject
            } else {
                FormAction::ToggleDropdown
            }
        }
        TuiEvent::Escape if dropdown_open => FormAction::CloseDropdown,
        TuiEvent::Escape => FormAction::End,
        TuiEvent::Enter
        | TuiEvent::Left
        | TuiEvent::Right
        | TuiEvent::Home
        | TuiEvent::Resize
        | TuiEvent::ForceQuit => return None,
    };
    Some(action)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    app.start(0);

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut app));
    ratatui::restore();

    match &result {
        Ok(()) => info!("Folio exited cleanly"),
        Err(e) => warn!("Folio exited with error: {}", e),
    }
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    let mut tui = TuiState::new();
    let start_time = Instant::now();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        update(app, Action::Tick(start_time.elapsed().as_millis() as u64));

        terminal.draw(|f| ui::draw_ui(f, app, &mut tui))?;

        if tui.scroll_limit != app.scroll_limit {
            update(app, Action::ScrollLimit(tui.scroll_limit));
        }
        if app.registry.visible() == Some(SectionId::Hero)
            && tui.matrix_size != app.effects.matrix.state.size()
        {
            let (cols, rows) = tui.matrix_size;
            update(app, Action::CanvasResized { cols, rows });
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(frame)?;
        while let Some(event) = pending {
            if let Some(action) = action_for(event, app) {
                debug!("{:?} -> {:?}", event, action);
                if update(app, action) == Command::Quit {
                    return Ok(());
                }
            }
            pending = poll_event_immediate()?;
        }
    }
}
