//! # Core Application Logic
//!
//! The portfolio as a headless state machine. Nothing here knows about
//! ratatui or crossterm.
//!
//! ```text
//!     key press ─► Action ─► update(&mut App) ─► Command
//!                               │
//!     Tick(now) ─► scheduler ───┴─► effects, toasts, form timers
//!                                          │
//!                                          ▼
//!                                   view-models read by the TUI
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all portfolio state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`nav`]: The navigation controller (section swap + activations)
//! - [`effects`]: Timer-driven animations
//! - [`scheduler`]: Virtual-clock timer queue with cancellable handles
//! - [`toast`]: Transient notifications
//! - [`form`]: Contact form fields and validators
//! - [`config`]: `~/.folio/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod content;
pub mod effects;
pub mod form;
pub mod nav;
pub mod scheduler;
pub mod section;
pub mod state;
pub mod toast;
