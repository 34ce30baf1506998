use serde::{Deserialize, Deserializer, Serialize};

/// The process-wide dark/light flag. Only the toggle command flips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemePalette {
    pub accent: String,
    pub bg: String,
    pub fg: String,
    pub header_bg: String,
    pub header_fg: String,
    pub border: String,
    pub border_active: String,
    pub text_dim: String,
    pub error: String,
    pub disabled: String,
}

impl ThemePalette {
    pub fn dark() -> Self {
        Self {
            accent: "#89b4fa".into(),
            bg: "default".into(),
            fg: "#cdd6f4".into(),
            header_bg: "#1e1e2e".into(),
            header_fg: "#cdd6f4".into(),
            border: "#585b70".into(),
            border_active: "#89b4fa".into(),
            text_dim: "#6c7086".into(),
            error: "#f38ba8".into(),
            disabled: "#45475a".into(),
        }
    }

    pub fn light() -> Self {
        Self {
            accent: "#1e66f5".into(),
            bg: "#eff1f5".into(),
            fg: "#4c4f69".into(),
            header_bg: "#dce0e8".into(),
            header_fg: "#4c4f69".into(),
            border: "#9ca0b0".into(),
            border_active: "#1e66f5".into(),
            text_dim: "#7c7f93".into(),
            error: "#d20f39".into(),
            disabled: "#bcc0cc".into(),
        }
    }

    fn overlay(mut self, overrides: PaletteOverrides) -> Self {
        let PaletteOverrides {
            accent,
            bg,
            fg,
            header_bg,
            header_fg,
            border,
            border_active,
            text_dim,
            error,
            disabled,
        } = overrides;
        let fields = [
            (&mut self.accent, accent),
            (&mut self.bg, bg),
            (&mut self.fg, fg),
            (&mut self.header_bg, header_bg),
            (&mut self.header_fg, header_fg),
            (&mut self.border, border),
            (&mut self.border_active, border_active),
            (&mut self.text_dim, text_dim),
            (&mut self.error, error),
            (&mut self.disabled, disabled),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        self
    }
}

/// A user palette table: only the keys present replace the mode's defaults.
#[derive(Debug, Default, Deserialize)]
struct PaletteOverrides {
    accent: Option<String>,
    bg: Option<String>,
    fg: Option<String>,
    #[serde(alias = "header-bg")]
    header_bg: Option<String>,
    #[serde(alias = "header-fg")]
    header_fg: Option<String>,
    border: Option<String>,
    #[serde(alias = "border-active")]
    border_active: Option<String>,
    #[serde(alias = "text-dim")]
    text_dim: Option<String>,
    error: Option<String>,
    disabled: Option<String>,
}

fn dark_overlay<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ThemePalette, D::Error> {
    PaletteOverrides::deserialize(deserializer).map(|o| ThemePalette::dark().overlay(o))
}

fn light_overlay<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ThemePalette, D::Error> {
    PaletteOverrides::deserialize(deserializer).map(|o| ThemePalette::light().overlay(o))
}

/// Colours for both modes. Each table is applied over that mode's built-in palette.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "dark_overlay")]
    pub dark: ThemePalette,
    #[serde(deserialize_with = "light_overlay")]
    pub light: ThemePalette,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { dark: ThemePalette::dark(), light: ThemePalette::light() }
    }
}

impl ThemeConfig {
    pub fn palette(&self, mode: ThemeMode) -> &ThemePalette {
        match mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }
}
