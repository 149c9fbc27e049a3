//! # Application State
//!
//! Everything the portfolio knows, in one owned struct. No globals: the TUI
//! loop owns the `App` and lends it to `update()`.
//!
//! ```text
//! App
//! ├── registry: SectionRegistry      // sections + nav links
//! ├── now_ms: u64                    // virtual clock, advanced by Tick
//! ├── scroll / scroll_limit          // content viewport
//! ├── drawer_open: bool              // mobile nav drawer
//! ├── theme: Theme                   // dark / light
//! ├── effects: Effects               // every timer-driven effect slot
//! ├── toasts: ToastEmitter           // transient notifications
//! ├── form: ContactForm              // contact form fields + errors
//! ├── skill_filter / selected_project / open_modal
//! ├── scheduler: Scheduler<Task>     // every pending timer
//! └── rng: StdRng                    // shared by the random effects
//! ```
//!
//! State changes happen through `update(app, action)` in action.rs, or
//! through the navigation controller in nav.rs.

use chrono::{Local, Timelike};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Theme;
use crate::core::config::ResolvedConfig;
use crate::core::content::{self, SkillCategory};
use crate::core::effects::{
    AlertTicker, Clock, CounterSet, EffectKind, EffectSlot, GlitchText, MatrixRain, ProgressBars,
    RadarChart, TerminalReplay, Tick, Timeline, Typewriter, alerts, glitch, timeline, typewriter,
};
use crate::core::form::{ContactForm, RESET_DELAY_MS, SubmitStatus};
use crate::core::scheduler::{DueTask, Scheduler};
use crate::core::section::{SectionId, SectionRegistry};
use crate::core::toast::{Severity, ToastEmitter};

/// Rows scrolled before the back-to-top indicator lights up.
pub const BACK_TO_TOP_THRESHOLD: u16 = 10;

/// Everything that can sit in the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Effect(EffectKind),
    /// Entry of the scripted notification feed.
    Notify(usize),
    Greeting,
    FormSent,
    FormReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Soc,
    Tools,
    Code,
}

impl SkillFilter {
    pub fn next(self) -> Self {
        match self {
            SkillFilter::All => SkillFilter::Soc,
            SkillFilter::Soc => SkillFilter::Tools,
            SkillFilter::Tools => SkillFilter::Code,
            SkillFilter::Code => SkillFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillFilter::All => "all",
            SkillFilter::Soc => "soc",
            SkillFilter::Tools => "tools",
            SkillFilter::Code => "code",
        }
    }

    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Soc => category == SkillCategory::Soc,
            SkillFilter::Tools => category == SkillCategory::Tools,
            SkillFilter::Code => category == SkillCategory::Code,
        }
    }
}

/// Every effect slot. Page-lifetime effects first, then section-scoped ones.
#[derive(Debug)]
pub struct Effects {
    pub typewriter: EffectSlot<Typewriter>,
    pub glitch: EffectSlot<GlitchText>,
    pub matrix: EffectSlot<MatrixRain>,
    pub clock: EffectSlot<Clock>,
    pub alerts: EffectSlot<AlertTicker>,
    pub timeline: EffectSlot<Timeline>,
    pub counters: EffectSlot<CounterSet>,
    pub terminal: EffectSlot<TerminalReplay>,
    pub radar: EffectSlot<RadarChart>,
    pub skill_bars: EffectSlot<ProgressBars>,
    pub cert_bars: EffectSlot<ProgressBars>,
}

impl Effects {
    fn new(owner: &str, phrases: Vec<String>) -> Self {
        Self {
            typewriter: EffectSlot::new(EffectKind::Typewriter, Typewriter::new(phrases)),
            glitch: EffectSlot::new(EffectKind::Glitch, GlitchText::new(owner.to_uppercase())),
            matrix: EffectSlot::new(EffectKind::Matrix, MatrixRain::new(0, 0)),
            clock: EffectSlot::new(EffectKind::Clock, Clock::new()),
            alerts: EffectSlot::new(EffectKind::Alerts, AlertTicker::new()),
            timeline: EffectSlot::new(
                EffectKind::Timeline,
                Timeline::new(content::TIMELINE.len()),
            ),
            counters: EffectSlot::new(
                EffectKind::Counters,
                CounterSet::new(content::STATS.iter().copied()),
            ),
            terminal: EffectSlot::new(EffectKind::Terminal, TerminalReplay::default()),
            radar: EffectSlot::new(
                EffectKind::Radar,
                RadarChart::new(content::RADAR_METRICS.iter().copied()),
            ),
            skill_bars: EffectSlot::new(
                EffectKind::SkillBars,
                ProgressBars::new(content::SKILLS.iter().map(|s| s.level)),
            ),
            cert_bars: EffectSlot::new(
                EffectKind::CertBars,
                ProgressBars::new(content::CERTS.iter().map(|c| c.progress)),
            ),
        }
    }

    /// Route a due effect timer to its slot.
    fn fire(
        &mut self,
        kind: EffectKind,
        due: &DueTask<Task>,
        scheduler: &mut Scheduler<Task>,
        rng: &mut StdRng,
    ) -> Option<Tick> {
        let (handle, at) = (due.handle, due.due_ms);
        match kind {
            EffectKind::Typewriter => self.typewriter.fire(handle, at, scheduler, rng),
            EffectKind::Glitch => self.glitch.fire(handle, at, scheduler, rng),
            EffectKind::Matrix => self.matrix.fire(handle, at, scheduler, rng),
            EffectKind::Clock => self.clock.fire(handle, at, scheduler, rng),
            EffectKind::Alerts => self.alerts.fire(handle, at, scheduler, rng),
            EffectKind::Timeline => self.timeline.fire(handle, at, scheduler, rng),
            EffectKind::Counters => self.counters.fire(handle, at, scheduler, rng),
            EffectKind::Terminal => self.terminal.fire(handle, at, scheduler, rng),
            EffectKind::Radar => self.radar.fire(handle, at, scheduler, rng),
            EffectKind::SkillBars => self.skill_bars.fire(handle, at, scheduler, rng),
            EffectKind::CertBars => self.cert_bars.fire(handle, at, scheduler, rng),
        }
    }

    fn stop_all(&mut self, scheduler: &mut Scheduler<Task>) {
        self.typewriter.stop(scheduler);
        self.glitch.stop(scheduler);
        self.matrix.stop(scheduler);
        self.clock.stop(scheduler);
        self.alerts.stop(scheduler);
        self.timeline.stop(scheduler);
        self.counters.stop(scheduler);
        self.terminal.stop(scheduler);
        self.radar.stop(scheduler);
        self.skill_bars.stop(scheduler);
        self.cert_bars.stop(scheduler);
    }
}

pub struct App {
    pub registry: SectionRegistry,
    pub now_ms: u64,
    pub scroll: u16,
    /// Largest useful scroll offset, reported by the view.
    pub scroll_limit: u16,
    pub drawer_open: bool,
    pub theme: Theme,
    pub owner: String,
    pub effects: Effects,
    pub toasts: ToastEmitter,
    pub form: ContactForm,
    pub skill_filter: SkillFilter,
    pub selected_project: usize,
    pub open_modal: Option<usize>,
    pub scheduler: Scheduler<Task>,
    pub(crate) rng: StdRng,
    start_section: String,
    notifications: bool,
    greeting: bool,
}

impl App {
    pub fn new(config: &ResolvedConfig, rng: StdRng) -> Self {
        Self {
            registry: SectionRegistry::new(),
            now_ms: 0,
            scroll: 0,
            scroll_limit: u16::MAX,
            drawer_open: false,
            theme: config.theme,
            owner: config.owner.clone(),
            effects: Effects::new(&config.owner, config.phrases.clone()),
            toasts: ToastEmitter::new(),
            form: ContactForm::new(),
            skill_filter: SkillFilter::default(),
            selected_project: 0,
            open_modal: None,
            scheduler: Scheduler::new(),
            rng,
            start_section: config.start_section.clone(),
            notifications: config.notifications,
            greeting: config.greeting,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config, StdRng::from_os_rng())
    }

    /// Kick off the page-lifetime effects and show the start section.
    pub fn start(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let scheduler = &mut self.scheduler;
        let effects = &mut self.effects;
        effects.clock.start(scheduler, now_ms);
        effects.matrix.start(scheduler, now_ms);
        effects
            .typewriter
            .start(scheduler, now_ms + typewriter::START_DELAY_MS);
        effects.glitch.start(scheduler, now_ms + glitch::INTERVAL_MS);
        effects.alerts.start(scheduler, now_ms + alerts::FIRST_ALERT_MS);
        effects
            .timeline
            .start(scheduler, now_ms + timeline::AUTO_ADVANCE_MS);

        if self.greeting {
            scheduler.schedule_at(now_ms + content::GREETING_DELAY_MS, Task::Greeting);
        }
        if self.notifications {
            for (index, (delay, _, _)) in content::NOTIFICATIONS.iter().enumerate() {
                scheduler.schedule_at(now_ms + delay, Task::Notify(index));
            }
        }

        let start = self.start_section.clone();
        if self.navigate(&start).is_err() {
            // Config is validated on resolve, so this only guards hand-built configs.
            self.show_section(SectionId::Hero);
        }
        info!("Started at {}ms, {} timers pending", now_ms, self.scheduler.len());
    }

    /// Advance the virtual clock and run everything that came due.
    ///
    /// Tasks run at their own due time, so a late tick still stamps toasts
    /// with when they should have appeared. Toast expiry is applied last.
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;
        while let Some(due) = self.scheduler.pop_due(now) {
            self.run_task(due);
        }
        self.toasts.advance(now);
    }

    fn run_task(&mut self, due: DueTask<Task>) {
        let at = due.due_ms;
        match due.task {
            Task::Effect(kind) => {
                let fired =
                    self.effects
                        .fire(kind, &due, &mut self.scheduler, &mut self.rng);
                if kind == EffectKind::Alerts
                    && fired.is_some()
                    && self.effects.alerts.state.should_announce()
                {
                    let count = self.effects.alerts.state.count();
                    self.notify_at(
                        at,
                        format!("⚠ {count} active alerts - threat level updated"),
                        Severity::Warn,
                    );
                }
            }
            Task::Notify(index) => {
                if let Some((_, message, severity)) = content::NOTIFICATIONS.get(index) {
                    self.notify_at(at, *message, *severity);
                }
            }
            Task::Greeting => {
                let message = content::greeting(Local::now().hour(), &self.owner);
                self.notify_at(at, message, Severity::Info);
            }
            Task::FormSent => {
                self.form.status = SubmitStatus::Sent;
                self.notify_at(at, "✓ Message transmitted successfully!", Severity::Info);
                self.notify_at(
                    at,
                    format!("✉ {} will respond within 24h", self.owner),
                    Severity::Info,
                );
                self.scheduler.schedule_at(at + RESET_DELAY_MS, Task::FormReset);
            }
            Task::FormReset => {
                debug!("Contact form reset");
                self.form.reset();
            }
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.toasts.notify(message, severity, self.now_ms);
    }

    /// Raise a toast stamped with `at_ms` rather than the current time.
    fn notify_at(&mut self, at_ms: u64, message: impl Into<String>, severity: Severity) {
        self.toasts.notify(message, severity, at_ms);
    }

    /// Resize the matrix canvas; a no-op when the size is unchanged.
    pub fn resize_matrix(&mut self, cols: u16, rows: u16) {
        if self.effects.matrix.state.size() != (cols, rows) {
            debug!("Matrix canvas resized to {}x{}", cols, rows);
            self.effects.matrix.state.resize(cols, rows);
        }
    }

    pub fn back_to_top_lit(&self) -> bool {
        self.scroll > BACK_TO_TOP_THRESHOLD
    }

    /// Cancel every pending timer.
    pub fn shutdown(&mut self) {
        self.effects.stop_all(&mut self.scheduler);
        let dropped = self.scheduler.len();
        self.scheduler.clear();
        info!("Shut down, dropped {} pending tasks", dropped);
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("section", &self.registry.visible())
            .field("now_ms", &self.now_ms)
            .field("scroll", &self.scroll)
            .field("theme", &self.theme)
            .field("pending_timers", &self.scheduler.len())
            .finish_non_exhaustive()
    }
}
