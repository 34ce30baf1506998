pub mod general;
pub mod keybindings;
pub mod theme;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use general::{DirectoryConfig, GeneralConfig, DEFAULT_ENDPOINT};
pub use keybindings::{check_collisions, validate_keybindings, KeybindingsConfig};
pub use theme::{ThemeConfig, ThemeMode, ThemePalette};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

pub const DEFAULT_CONFIG: &str = include_str!("defaults.toml");

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded defaults must parse")
    }
}

impl AppConfig {
    /// Defaults merged with the user file, plus a warning for each problem
    /// that made the user file be ignored.
    pub fn load() -> (Self, Vec<String>) {
        match Self::user_config_path() {
            Some(path) => Self::load_or_default(&path),
            None => (Self::default(), Vec::new()),
        }
    }

    fn load_or_default(path: &Path) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<AppConfig>(&contents) {
                    Ok(user) => config.merge(user),
                    Err(e) => warnings.push(format!("invalid config at {}: {e}", path.display())),
                },
                Err(e) => warnings.push(format!("could not read {}: {e}", path.display())),
            }
        }

        (config, warnings)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let contents = std::fs::read_to_string(path)?;
        let user: AppConfig = toml::from_str(&contents)?;
        config.merge(user);
        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("userdeck").join("config.toml")
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = Self::default_path();
        if path.exists() {
            anyhow::bail!("Config already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, DEFAULT_CONFIG)?;
        Ok(path)
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("userdeck").join("config.toml"))
    }

    fn merge(&mut self, user: AppConfig) {
        self.general = user.general;
        self.directory = user.directory;
        self.theme = user.theme;

        // Keybindings: merge per-key (user overrides, defaults preserved)
        for (k, v) in user.keybindings.global {
            self.keybindings.global.insert(k, v);
        }
        for (k, v) in user.keybindings.browse {
            self.keybindings.browse.insert(k, v);
        }
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.general.tick_rate_ms
    }
}
