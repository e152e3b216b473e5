// ============================================================================
// timebar-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig with the library defaults filled in.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::CoreConfig;

/// Builder for creating CoreConfig instances.
///
/// # Examples
///
/// ```rust
/// use timebar_core::config::CoreConfigBuilder;
///
/// let config = CoreConfigBuilder::new()
///     .tick_ms(20)
///     .finished_label("Done")
///     .build();
/// assert_eq!(config.tick_ms, 20);
/// assert_eq!(config.finished_label, "Done");
/// ```
#[derive(Debug, Clone)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl Default for CoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreConfigBuilder {
    /// Creates a new CoreConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            config: CoreConfig::default(),
        }
    }

    /// Starts from an existing configuration, e.g. one read from the environment.
    pub fn from_config(config: CoreConfig) -> Self {
        Self { config }
    }

    /// Sets the directory containing agenda documents.
    pub fn agenda_dir(mut self, agenda_dir: PathBuf) -> Self {
        self.config.agenda_dir = agenda_dir;
        self
    }

    /// Sets the clock period in milliseconds.
    pub fn tick_ms(mut self, tick_ms: u64) -> Self {
        self.config.tick_ms = tick_ms;
        self
    }

    /// Sets whether automatic transitions request the transition sound.
    pub fn sound_enabled(mut self, enabled: bool) -> Self {
        self.config.sound_enabled = enabled;
        self
    }

    /// Sets the subtitle emitted once the agenda is finished.
    pub fn finished_label(mut self, label: &str) -> Self {
        self.config.finished_label = label.to_string();
        self
    }

    /// Sets the chrono format string of the date header.
    pub fn date_format(mut self, format: &str) -> Self {
        self.config.date_format = format.to_string();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> CoreConfig {
        self.config
    }
}
