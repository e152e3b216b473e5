//! Configuration structures and constants for the timebar-core library.
//!
//! This module provides the configuration of a countdown session: where
//! agendas are looked up, the clock period, the transition sound switch and
//! the labels the engine emits.

mod builder;
pub mod utils;

use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

pub use builder::CoreConfigBuilder;

use utils::{get_env_bool, get_env_path, get_env_string, get_env_u64};

// Default constants

/// Clock period in milliseconds. Each tick consumes `TICK_MS` of agenda time.
pub const DEFAULT_TICK_MS: u64 = 10;

/// Directory searched for `<name>.json` agenda documents.
pub const DEFAULT_AGENDA_DIR: &str = ".";

/// Subtitle emitted once the last sequence has elapsed.
pub const DEFAULT_FINISHED_LABEL: &str = "Finished !";

/// chrono format of the date header emitted at agenda load.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Environment variable overriding the agenda directory.
pub const ENV_AGENDA_DIR: &str = "TIMEBAR_AGENDA_DIR";

/// Environment variable overriding the clock period.
pub const ENV_TICK_MS: &str = "TIMEBAR_TICK_MS";

/// Environment variable enabling or disabling the transition sound.
pub const ENV_SOUND: &str = "TIMEBAR_SOUND";

/// Environment variable overriding the finished subtitle.
pub const ENV_FINISHED_LABEL: &str = "TIMEBAR_FINISHED_LABEL";

/// Main configuration structure for the timebar-core library.
///
/// The tick period is fixed for the lifetime of a session; it is read once
/// when the engine is constructed.
///
/// # Examples
///
/// ```rust
/// use timebar_core::config::CoreConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = CoreConfigBuilder::new()
///     .agenda_dir(PathBuf::from("agendas"))
///     .tick_ms(10)
///     .sound_enabled(false)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreConfig {
    /// Directory containing agenda documents
    pub agenda_dir: PathBuf,

    /// Clock period in milliseconds
    pub tick_ms: u64,

    /// Whether automatic boundary crossings request the transition sound
    pub sound_enabled: bool,

    /// Subtitle emitted when the agenda is finished
    pub finished_label: String,

    /// chrono format string of the date header
    pub date_format: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            agenda_dir: PathBuf::from(DEFAULT_AGENDA_DIR),
            tick_ms: DEFAULT_TICK_MS,
            sound_enabled: true,
            finished_label: DEFAULT_FINISHED_LABEL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl CoreConfig {
    /// Builds a configuration from defaults overridden by `TIMEBAR_*`
    /// environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            agenda_dir: get_env_path(ENV_AGENDA_DIR, defaults.agenda_dir),
            tick_ms: get_env_u64(ENV_TICK_MS, defaults.tick_ms),
            sound_enabled: get_env_bool(ENV_SOUND, defaults.sound_enabled),
            finished_label: get_env_string(ENV_FINISHED_LABEL, defaults.finished_label),
            date_format: defaults.date_format,
        }
    }

    /// Checks the configuration for values the engine cannot run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_ms == 0 {
            return Err(CoreError::Config(
                "tick period must be greater than zero".to_string(),
            ));
        }
        if self.date_format.trim().is_empty() {
            return Err(CoreError::Config("date format must not be empty".to_string()));
        }
        Ok(())
    }
}
