//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box.

use crate::greeter::local::DEFAULT_TEMPLATE;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Local,
    Http,
}

/// Where greetings come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_kind")]
    pub kind: ServiceKind,
    /// Base URL of a JSON greeting service (`POST {endpoint}/{method}`).
    /// A canister replica does not speak this directly; put an adapter in
    /// front of it.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Remote method name, appended to `endpoint`.
    #[serde(default = "default_method")]
    pub method: String,
    /// Used by the local greeter; `{name}` is replaced with the input.
    #[serde(default = "default_template")]
    pub template: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            endpoint: default_endpoint(),
            method: default_method(),
            template: default_template(),
        }
    }
}

fn default_kind() -> ServiceKind {
    ServiceKind::Local
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8080".into()
}

fn default_method() -> String {
    "greet".into()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Redraw interval in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_title() -> String {
    "greetform".into()
}

fn default_tick_rate() -> u64 {
    50
}

/// Diagnostic log file settings. `RUST_LOG` overrides `level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/greetform/logs".into()
}

fn default_level() -> String {
    "info".into()
}
