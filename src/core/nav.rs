//! # Navigation Controller
//!
//! Swaps the visible section and fires the new section's activations.
//!
//! ```text
//! navigate("about")
//!   ├── parse id ──────────────► Err(UnknownSection) → nothing changes
//!   ├── stop effects of the section being left
//!   ├── hide all sections, clear all nav links
//!   ├── show "about", highlight its links
//!   ├── scroll = 0, drawer closed
//!   └── fire activations in table order: TerminalReplay, RadarChart
//! ```
//!
//! Calling it again with the same id restarts the activations; each restart
//! cancels the previous run's timer first.

use std::fmt;

use log::{debug, info, warn};

use crate::core::content;
use crate::core::effects::progress::{CERT_BAR_DELAY_MS, SKILL_BAR_DELAY_MS};
use crate::core::effects::counter::COUNTER_INTERVAL_MS;
use crate::core::effects::{CounterSet, ProgressBars, RadarChart, TerminalReplay};
use crate::core::section::{Activation, SectionId};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    UnknownSection(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::UnknownSection(id) => write!(f, "unknown section: {id:?}"),
        }
    }
}

impl std::error::Error for NavigationError {}

impl App {
    /// Show the section named `id`.
    ///
    /// Unknown ids are rejected before any state changes, so the previously
    /// visible section stays visible.
    pub fn navigate(&mut self, id: &str) -> Result<SectionId, NavigationError> {
        let target: SectionId = id.parse().inspect_err(|e| warn!("Navigation rejected: {e}"))?;
        self.show_section(target);
        Ok(target)
    }

    pub fn show_section(&mut self, target: SectionId) {
        if let Some(previous) = self.registry.visible()
            && previous != target
        {
            for &activation in previous.activations() {
                self.deactivate(activation);
            }
        }

        self.registry.show(target);
        self.scroll = 0;
        self.drawer_open = false;
        info!("Navigated to {}", target);

        for &activation in target.activations() {
            self.activate(activation);
        }
    }

    pub fn next_section(&mut self) -> SectionId {
        let target = self.registry.visible().unwrap_or(SectionId::Hero).next();
        self.show_section(target);
        target
    }

    pub fn previous_section(&mut self) -> SectionId {
        let target = self
            .registry
            .visible()
            .unwrap_or(SectionId::Hero)
            .previous();
        self.show_section(target);
        target
    }

    /// Start a fresh run of an activation's effect.
    pub(crate) fn activate(&mut self, activation: Activation) {
        debug!("Activating {:?}", activation);
        let now = self.now_ms;
        let scheduler = &mut self.scheduler;
        let effects = &mut self.effects;
        match activation {
            Activation::StatCounters => effects.counters.restart(
                CounterSet::new(content::STATS.iter().copied()),
                scheduler,
                now + COUNTER_INTERVAL_MS,
            ),
            Activation::TerminalReplay => effects.terminal.restart(
                TerminalReplay::new(content::TERMINAL_SCRIPT),
                scheduler,
                now,
            ),
            Activation::RadarChart => effects.radar.restart(
                RadarChart::new(content::RADAR_METRICS.iter().copied()),
                scheduler,
                now,
            ),
            Activation::SkillBars => effects.skill_bars.restart(
                ProgressBars::new(content::SKILLS.iter().map(|s| s.level)),
                scheduler,
                now + SKILL_BAR_DELAY_MS,
            ),
            Activation::CertBars => effects.cert_bars.restart(
                ProgressBars::new(content::CERTS.iter().map(|c| c.progress)),
                scheduler,
                now + CERT_BAR_DELAY_MS,
            ),
        }
    }

    fn deactivate(&mut self, activation: Activation) {
        let scheduler = &mut self.scheduler;
        let effects = &mut self.effects;
        match activation {
            Activation::StatCounters => effects.counters.stop(scheduler),
            Activation::TerminalReplay => effects.terminal.stop(scheduler),
            Activation::RadarChart => effects.radar.stop(scheduler),
            Activation::SkillBars => effects.skill_bars.stop(scheduler),
            Activation::CertBars => effects.cert_bars.stop(scheduler),
        }
    }
}
