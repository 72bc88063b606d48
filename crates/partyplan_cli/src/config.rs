//! CLI configuration.
//!
//! Sources, later ones winning: built-in defaults, `partyplan.toml` (or the
//! file given with `--config`), then `PARTYPLAN_`-prefixed environment
//! variables. Nested keys use `__`, e.g. `PARTYPLAN_TIMELINE__START=15:30`.

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use partyplan_core::layout::window::DEFAULT_PIXELS_PER_MINUTE;
use partyplan_core::{TimelineLayout, TimelineWindow, WindowError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "partyplan.toml";
const ENV_PREFIX: &str = "PARTYPLAN_";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeline: TimelineConfig,
    pub log_level: Option<String>,
    /// Enables file logging when set.
    pub log_dir: Option<PathBuf>,
    /// JSON dataset used instead of the built-in seed.
    pub data: Option<PathBuf>,
}

/// `[timeline]` table: window keys plus the pixel scale.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    #[serde(flatten)]
    pub window: TimelineWindow,
    pub pixels_per_minute: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window: TimelineWindow::default(),
            pixels_per_minute: DEFAULT_PIXELS_PER_MINUTE,
        }
    }
}

impl TimelineConfig {
    /// Builds the layout; the window itself was validated on load.
    pub fn layout(&self) -> Result<TimelineLayout, WindowError> {
        TimelineLayout::new(self.window, self.pixels_per_minute)
    }
}

impl Config {
    /// Loads configuration from `path` (or `partyplan.toml`) and the
    /// environment. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::extract(
            Figment::new()
                .merge(Toml::file(file))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    fn extract(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}
