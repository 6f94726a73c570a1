//! Theme system for the editing surface
//!
//! Provides YAML-based theming with compile-time embedded light and dark
//! themes plus user-defined themes from the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/lesson-editor/themes/{id}.yaml`
//! 2. Embedded: built-in themes compiled into the binary

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize, Serializer};

use crate::syntax::HighlightClass;

pub const LIGHT_YAML: &str = include_str!("../themes/light.yaml");
pub const DARK_YAML: &str = include_str!("../themes/dark.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    pub id: &'static str,
    pub yaml: &'static str,
}

pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "light",
        yaml: LIGHT_YAML,
    },
    BuiltinTheme {
        id: "dark",
        yaml: DARK_YAML,
    },
];

/// Which theme the lesson step asked for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorThemeMode {
    Light,
    Dark,
    /// Follow the environment's color scheme preference
    #[default]
    System,
}

impl EditorThemeMode {
    pub fn is_dark(self, prefers_dark: bool) -> bool {
        match self {
            EditorThemeMode::Light => false,
            EditorThemeMode::Dark => true,
            EditorThemeMode::System => prefers_dark,
        }
    }

    /// Theme id to load for this mode
    pub fn theme_id(self, prefers_dark: bool) -> &'static str {
        if self.is_dark(prefers_dark) {
            "dark"
        } else {
            "light"
        }
    }
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Resolve the theme for a mode. Falls back to the embedded theme when a
/// user theme fails to parse.
pub fn theme_for_mode(mode: EditorThemeMode, prefers_dark: bool) -> Theme {
    let id = mode.theme_id(prefers_dark);
    match load_theme(id) {
        Ok(theme) => theme,
        Err(e) => {
            tracing::warn!("Failed to load theme '{}': {}, using builtin", id, e);
            if mode.is_dark(prefers_dark) {
                Theme::default_dark()
            } else {
                Theme::default_light()
            }
        }
    }
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with the given alpha
    pub const fn with_alpha_of(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Composite this color over an opaque background
    pub fn over(&self, background: Color) -> Color {
        let alpha = self.a as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * alpha + bg as u32 * (255 - alpha)) / 255) as u8;
        Color::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub ui: UiThemeData,
    /// Highlight class name → color
    #[serde(default)]
    pub syntax: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiThemeData {
    pub editor: EditorThemeData,
    pub gutter: GutterThemeData,
    pub toolbar: ToolbarThemeData,
    #[serde(default)]
    pub hint: Option<HintThemeData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub background: String,
    pub foreground: String,
    pub highlighted_line_background: String,
    pub cursor_color: String,
    #[serde(default)]
    pub selection_background: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GutterThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolbarThemeData {
    pub background: String,
    pub foreground: String,
    #[serde(default)]
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HintThemeData {
    pub background: String,
    pub foreground: String,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub gutter: GutterTheme,
    pub toolbar: ToolbarTheme,
    pub hint: HintTheme,
    #[serde(skip)]
    syntax: HashMap<HighlightClass, Color>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    /// Background for lines listed in `highlightLines`
    pub highlighted_line_background: Color,
    pub cursor_color: Color,
    pub selection_background: Color,
}

#[derive(Debug, Clone, Serialize)]
pub struct GutterTheme {
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolbarTheme {
    pub background: Color,
    pub foreground: Color,
    pub border_color: Color,
}

#[derive(Debug, Clone, Serialize)]
pub struct HintTheme {
    pub background: Color,
    pub foreground: Color,
}

fn optional_color(value: &Option<String>, fallback: Color) -> Result<Color, String> {
    value
        .as_deref()
        .map(Color::from_hex)
        .transpose()
        .map(|c| c.unwrap_or(fallback))
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let cursor_color = Color::from_hex(&data.ui.editor.cursor_color)?;
        let default_selection = cursor_color.with_alpha_of(0x40);

        let mut syntax = HashMap::new();
        for (name, value) in &data.syntax {
            match HighlightClass::from_name(name) {
                Some(class) => {
                    syntax.insert(class, Color::from_hex(value)?);
                }
                None => tracing::warn!("Theme '{}': unknown syntax class '{}'", data.name, name),
            }
        }

        let hint = match &data.ui.hint {
            Some(hint) => HintTheme {
                background: Color::from_hex(&hint.background)?,
                foreground: Color::from_hex(&hint.foreground)?,
            },
            None => HintTheme {
                background: cursor_color,
                foreground: Color::rgb(0xFF, 0xFF, 0xFF),
            },
        };

        Ok(Theme {
            name: data.name,
            editor: EditorTheme {
                background: Color::from_hex(&data.ui.editor.background)?,
                foreground: Color::from_hex(&data.ui.editor.foreground)?,
                highlighted_line_background: Color::from_hex(
                    &data.ui.editor.highlighted_line_background,
                )?,
                cursor_color,
                selection_background: optional_color(
                    &data.ui.editor.selection_background,
                    default_selection,
                )?,
            },
            gutter: GutterTheme {
                background: Color::from_hex(&data.ui.gutter.background)?,
                foreground: Color::from_hex(&data.ui.gutter.foreground)?,
                border_color: optional_color(
                    &data.ui.gutter.border_color,
                    Color::rgb(0x44, 0x44, 0x44),
                )?,
            },
            toolbar: ToolbarTheme {
                background: Color::from_hex(&data.ui.toolbar.background)?,
                foreground: Color::from_hex(&data.ui.toolbar.foreground)?,
                border_color: optional_color(
                    &data.ui.toolbar.border_color,
                    Color::rgb(0x44, 0x44, 0x44),
                )?,
            },
            hint,
            syntax,
        })
    }

    /// Foreground for a token. Unclassified text and classes the theme does
    /// not color use the editor foreground.
    pub fn token_color(&self, class: Option<HighlightClass>) -> Color {
        class
            .and_then(|c| self.syntax.get(&c).copied())
            .unwrap_or(self.editor.foreground)
    }

    /// Embedded light theme with a hardcoded fallback
    pub fn default_light() -> Self {
        Theme::from_yaml(LIGHT_YAML).unwrap_or_else(|_| Self::fallback(false))
    }

    /// Embedded dark theme with a hardcoded fallback
    pub fn default_dark() -> Self {
        Theme::from_yaml(DARK_YAML).unwrap_or_else(|_| Self::fallback(true))
    }

    fn fallback(dark: bool) -> Self {
        let primary = Color::rgb(0x19, 0x76, 0xD2);
        let (background, foreground, gutter_bg, gutter_fg, toolbar_bg, line_bg) = if dark {
            (
                Color::rgb(0x1E, 0x1E, 0x1E),
                Color::rgb(0xD4, 0xD4, 0xD4),
                Color::rgb(0x25, 0x25, 0x25),
                Color::rgb(0x85, 0x85, 0x85),
                Color::rgb(0x2D, 0x2D, 0x2D),
                Color::rgba(0xFF, 0xFF, 0xFF, 0x1A),
            )
        } else {
            (
                Color::rgb(0xFF, 0xFF, 0xFF),
                Color::rgb(0x33, 0x33, 0x33),
                Color::rgb(0xF0, 0xF0, 0xF0),
                Color::rgb(0x99, 0x99, 0x99),
                Color::rgb(0xF5, 0xF5, 0xF5),
                Color::rgba(0x00, 0x00, 0x00, 0x0D),
            )
        };
        let border = Color::rgb(0x44, 0x44, 0x44);
        Theme {
            name: if dark { "Lesson Dark" } else { "Lesson Light" }.to_string(),
            editor: EditorTheme {
                background,
                foreground,
                highlighted_line_background: line_bg,
                cursor_color: primary,
                selection_background: primary.with_alpha_of(0x40),
            },
            gutter: GutterTheme {
                background: gutter_bg,
                foreground: gutter_fg,
                border_color: border,
            },
            toolbar: ToolbarTheme {
                background: toolbar_bg,
                foreground,
                border_color: border,
            },
            hint: HintTheme {
                background: primary,
                foreground: Color::rgb(0xFF, 0xFF, 0xFF),
            },
            syntax: HashMap::new(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_parse() {
        for builtin in BUILTIN_THEMES {
            let theme = Theme::from_yaml(builtin.yaml)
                .unwrap_or_else(|e| panic!("theme {} failed: {}", builtin.id, e));
            for class in HighlightClass::ALL {
                assert!(
                    theme.syntax.contains_key(class),
                    "theme {} missing {}",
                    builtin.id,
                    class.name()
                );
            }
        }
    }

    #[test]
    fn test_color_hex_round_trip() {
        let c = Color::from_hex("#1976D240").unwrap();
        assert_eq!(c, Color::rgba(0x19, 0x76, 0xD2, 0x40));
        assert_eq!(c.to_hex(), "#1976D240");
        assert_eq!(Color::from_hex("ffffff").unwrap().to_hex(), "#FFFFFF");
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_alpha_compositing() {
        let white = Color::rgb(255, 255, 255);
        assert_eq!(Color::rgba(0, 0, 0, 0).over(white), white);
        assert_eq!(Color::rgb(10, 20, 30).over(white), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(EditorThemeMode::Light.theme_id(true), "light");
        assert_eq!(EditorThemeMode::Dark.theme_id(false), "dark");
        assert_eq!(EditorThemeMode::System.theme_id(true), "dark");
        assert_eq!(EditorThemeMode::System.theme_id(false), "light");
    }

    #[test]
    fn test_token_color_falls_back_to_foreground() {
        let theme = Theme::default_dark();
        assert_eq!(theme.token_color(None), theme.editor.foreground);
        assert_eq!(
            theme.token_color(Some(HighlightClass::Keyword)),
            Color::from_hex("#569CD6").unwrap()
        );
    }

    #[test]
    fn test_minimal_theme_uses_defaults() {
        let yaml = r##"
version: 1
name: Minimal
ui:
  editor:
    background: "#000000"
    foreground: "#EEEEEE"
    highlighted_line_background: "#FFFFFF10"
    cursor_color: "#FF0000"
  gutter:
    background: "#000000"
    foreground: "#888888"
  toolbar:
    background: "#111111"
    foreground: "#EEEEEE"
"##;
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.editor.selection_background, Color::rgba(0xFF, 0, 0, 0x40));
        assert_eq!(theme.hint.background, Color::rgb(0xFF, 0, 0));
        assert_eq!(
            theme.token_color(Some(HighlightClass::Comment)),
            theme.editor.foreground
        );
    }

    #[test]
    fn test_unknown_builtin() {
        assert!(Theme::from_builtin("solarized").is_err());
    }
}
