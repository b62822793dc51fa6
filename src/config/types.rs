use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::menu::Course;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Items loaded into the menu when a session starts.
    #[serde(default)]
    pub seed: Vec<SeedItem>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Heading on the home screen (default: "BIG CHEF").
    #[serde(default = "default_title")]
    pub title: String,
    /// Symbol printed before prices (default: "$").
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Defaults to `<cache_dir>/chefmenu/chefmenu.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// A menu entry declared in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub course: Course,
    pub price: f64,
}

fn default_title() -> String {
    "BIG CHEF".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            currency: default_currency(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
