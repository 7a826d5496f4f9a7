//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Look and feel of the counter card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between ticks driving the hover transition.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Duration of the idle <-> hover color transition.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "default_true")]
    pub mouse: bool,
    #[serde(default = "default_button_color")]
    pub button_color: String,
    #[serde(default = "default_button_hover_color")]
    pub button_hover_color: String,
    #[serde(default = "default_label_color")]
    pub label_color: String,
    #[serde(default = "default_true")]
    pub shadow: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            transition_ms: default_transition_ms(),
            mouse: true,
            button_color: default_button_color(),
            button_hover_color: default_button_hover_color(),
            label_color: default_label_color(),
            shadow: true,
        }
    }
}

/// Diagnostic log settings. The log never goes to the terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_transition_ms() -> u64 {
    150
}

fn default_button_color() -> String {
    "#2563eb".into()
}

fn default_button_hover_color() -> String {
    "#1d4ed8".into()
}

fn default_label_color() -> String {
    "white".into()
}

fn default_log_dir() -> String {
    "~/.local/share/countercard/logs".into()
}

fn default_log_level() -> String {
    "info".into()
}
