use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Sizing of the state engine's channels and remote pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Catalog page size used by dish sync (default: 10).
    #[serde(default = "default_dishes_page_size")]
    pub dishes_page_size: usize,
    /// Reviews requested when a dish screen opens (default: 10).
    #[serde(default = "default_reviews_page_size")]
    pub reviews_page_size: usize,
    /// Buffered UI notifications before emitters wait (default: 16).
    #[serde(default = "default_notification_buffer")]
    pub notification_buffer: usize,
    /// Buffered host commands before emitters wait (default: 4).
    #[serde(default = "default_command_buffer")]
    pub command_buffer: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_dishes_page_size() -> usize {
    10
}

fn default_reviews_page_size() -> usize {
    10
}

fn default_notification_buffer() -> usize {
    16
}

fn default_command_buffer() -> usize {
    4
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dishes_page_size: default_dishes_page_size(),
            reviews_page_size: default_reviews_page_size(),
            notification_buffer: default_notification_buffer(),
            command_buffer: default_command_buffer(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}
