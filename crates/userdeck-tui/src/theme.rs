use ratatui::style::{Color, Style};
use userdeck_config::{ThemeConfig, ThemeMode, ThemePalette};

#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ThemeMode,
    pub accent: Color,
    pub bg: Color,
    pub fg: Color,
    pub header: Style,
    pub status_bar: Style,
    pub border: Style,
    pub border_active: Style,
    pub text_dim: Style,
    pub error: Style,
    pub disabled: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default(), ThemeMode::Dark)
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig, mode: ThemeMode) -> Self {
        Self::from_palette(config.palette(mode), mode)
    }

    pub fn from_palette(palette: &ThemePalette, mode: ThemeMode) -> Self {
        let accent = parse_color_or_default(&palette.accent);
        let bg = parse_color_or_default(&palette.bg);
        let fg = parse_color_or_default(&palette.fg);
        let header_bg = parse_color_or_default(&palette.header_bg);
        let header_fg = parse_color_or_default(&palette.header_fg);

        Self {
            mode,
            accent,
            bg,
            fg,
            header: Style::default().fg(header_fg).bg(header_bg),
            status_bar: Style::default().fg(header_fg).bg(header_bg),
            border: Style::default().fg(parse_color_or_default(&palette.border)),
            border_active: Style::default().fg(parse_color_or_default(&palette.border_active)),
            text_dim: Style::default().fg(parse_color_or_default(&palette.text_dim)),
            error: Style::default().fg(parse_color_or_default(&palette.error)),
            disabled: Style::default().fg(parse_color_or_default(&palette.disabled)),
        }
    }

    /// The same palette set rebuilt for the other mode.
    pub fn toggled(&self, config: &ThemeConfig) -> Self {
        Self::from_config(config, self.mode.toggle())
    }
}

fn parse_color_or_default(s: &str) -> Color {
    parse_color(s).unwrap_or(Color::Reset)
}

/// Parse a color string into a ratatui `Color`.
///
/// Supported formats:
/// - `"#89b4fa"`: hex RGB
/// - `"rgb(137,180,250)"`: functional RGB
/// - `"red"`, `"blue"`, etc.: named colors
/// - `"default"`: terminal default (`Color::Reset`)
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("invalid hex color \"{s}\": expected 6 hex digits after '#'");
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad {name} component"))
        };
        return Ok(Color::Rgb(channel(0..2, "red")?, channel(2..4, "green")?, channel(4..6, "blue")?));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b] = *parts.as_slice() else {
            anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)");
        };
        let value = |v: &str, name: &str| {
            v.parse::<u8>().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad {name} value"))
        };
        return Ok(Color::Rgb(value(r, "red")?, value(g, "green")?, value(b, "blue")?));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "white" => Ok(Color::White),
        _ => anyhow::bail!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a named color (red, blue, ...), or \"default\""
        ),
    }
}
