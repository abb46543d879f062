//! Log backend setup
//!
//! Everything in the crate logs through the `log` facade. The host picks the
//! backend once at startup: the browser console on wasm32, `env_logger`
//! everywhere else.

use serde::{Deserialize, Serialize};

/// Logging preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    /// Emit utility logs (asset/entity loading, ignored setup calls)
    pub enabled: bool,
    /// Maximum level name ("error", "warn", "info", "debug", "trace")
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LogSettings {
    /// Effective level filter (`Off` when logging is disabled)
    pub fn level_filter(&self) -> log::LevelFilter {
        if !self.enabled {
            return log::LevelFilter::Off;
        }
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Install the platform log backend. Safe to call more than once.
#[cfg(target_arch = "wasm32")]
pub fn init(settings: &LogSettings) {
    console_error_panic_hook::set_once();
    let filter = settings.level_filter();
    if let Some(level) = filter.to_level() {
        if console_log::init_with_level(level).is_ok() {
            log::info!("Utility logs are now enabled");
        }
    }
    log::set_max_level(filter);
}

/// Install the platform log backend. Safe to call more than once.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(settings: &LogSettings) {
    let filter = settings.level_filter();
    let installed = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init()
        .is_ok();
    if installed {
        log::info!("Utility logs are now enabled");
    }
}
