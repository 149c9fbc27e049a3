//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// Fixed seed so glitch, matrix and alert timings repeat across runs.
pub const TEST_SEED: u64 = 0x5EC0;

/// Creates an unstarted App with default config and a seeded RNG.
pub fn test_app() -> App {
    App::new(&ResolvedConfig::default(), StdRng::seed_from_u64(TEST_SEED))
}

/// Creates an App started at t = 0, showing the hero section.
pub fn started_app() -> App {
    let mut app = test_app();
    app.start(0);
    app
}

/// Same as [`started_app`] but with the notification feed and greeting off,
/// so toast counts only reflect what a test triggers.
pub fn quiet_app() -> App {
    let config = ResolvedConfig {
        notifications: false,
        greeting: false,
        ..ResolvedConfig::default()
    };
    let mut app = App::new(&config, StdRng::seed_from_u64(TEST_SEED));
    app.start(0);
    app
}
