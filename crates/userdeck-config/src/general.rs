use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    #[serde(alias = "theme-mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250, theme_mode: ThemeMode::Dark }
    }
}

/// Where the user directory is fetched from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub endpoint: String,
    #[serde(alias = "user-agent")]
    pub user_agent: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.into(), user_agent: "userdeck".into() }
    }
}
