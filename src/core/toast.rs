//! # Toast Emitter
//!
//! Transient notifications. Append-only: no queue, no cap, no dedupe.
//!
//! ```text
//! notify(T) ──► Visible ──(T+3500)──► Fading ──(T+3900)──► removed
//! ```
//!
//! The emitter keeps its own [`Scheduler`] for expiry so each toast's
//! lifetime is independent of every other toast and of the app's effects.

use log::debug;

use crate::core::scheduler::Scheduler;

/// How long a toast stays fully visible.
pub const DISPLAY_MS: u64 = 3_500;
/// Fade-out duration after the display period.
pub const FADE_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Green
    Info,
    /// Amber
    Warn,
    /// Red
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStage {
    Visible,
    Fading,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub created_ms: u64,
    pub stage: ToastStage,
}

impl Toast {
    /// 0.0 while visible, rising to 1.0 at removal time.
    pub fn fade_progress(&self, now_ms: u64) -> f32 {
        match self.stage {
            ToastStage::Visible => 0.0,
            ToastStage::Fading => {
                let fade_start = self.created_ms + DISPLAY_MS;
                let elapsed = now_ms.saturating_sub(fade_start).min(FADE_MS);
                elapsed as f32 / FADE_MS as f32
            }
        }
    }
}

#[derive(Debug)]
enum Expiry {
    Fade(ToastId),
    Remove(ToastId),
}

#[derive(Debug, Default)]
pub struct ToastEmitter {
    next_id: u64,
    toasts: Vec<Toast>,
    timers: Scheduler<Expiry>,
}

impl ToastEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let message = message.into();
        debug!("Toast {:?} ({:?}): {}", id, severity, message);
        self.toasts.push(Toast {
            id,
            message,
            severity,
            created_ms: now_ms,
            stage: ToastStage::Visible,
        });
        self.timers.schedule_at(now_ms + DISPLAY_MS, Expiry::Fade(id));
        self.timers
            .schedule_at(now_ms + DISPLAY_MS + FADE_MS, Expiry::Remove(id));
        id
    }

    /// Apply every fade and removal due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        while let Some(due) = self.timers.pop_due(now_ms) {
            match due.task {
                Expiry::Fade(id) => {
                    if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
                        toast.stage = ToastStage::Fading;
                    }
                }
                Expiry::Remove(id) => self.toasts.retain(|t| t.id != id),
            }
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
