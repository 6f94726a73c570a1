//! Surface configuration
//!
//! The options a lesson step passes to the editing surface. Every field is
//! defaulted, so an empty YAML/JSON document is a valid config.

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{Position, SelectionRange};
use crate::syntax::LanguageId;
use crate::theme::EditorThemeMode;

/// Layout size: a bare number is pixels, a string is any CSS length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(f64),
    Css(String),
}

impl Dimension {
    /// Pixel value when the dimension is absolute (`320` or `"320px"`)
    pub fn as_pixels(&self) -> Option<f64> {
        match self {
            Dimension::Pixels(px) => Some(*px),
            Dimension::Css(s) => s.trim().strip_suffix("px")?.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Pixels(px) => write!(f, "{}px", px),
            Dimension::Css(s) => write!(f, "{}", s),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_height() -> Dimension {
    Dimension::Css("300px".to_string())
}

fn default_width() -> Dimension {
    Dimension::Css("100%".to_string())
}

/// Everything the lesson host configures on a surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurfaceConfig {
    pub initial_content: String,
    pub language: LanguageId,
    pub theme: EditorThemeMode,
    pub read_only: bool,
    #[serde(default = "default_true")]
    pub line_numbers: bool,
    /// Zero-based line indices drawn with a highlighted background
    pub highlight_lines: Vec<usize>,
    pub initial_cursor_position: Option<Position>,
    /// Takes precedence over `initial_cursor_position`
    pub initial_selection: Option<SelectionRange>,
    #[serde(default = "default_true")]
    pub show_toolbar: bool,
    #[serde(default = "default_height")]
    pub height: Dimension,
    #[serde(default = "default_width")]
    pub width: Dimension,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            initial_content: String::new(),
            language: LanguageId::default(),
            theme: EditorThemeMode::default(),
            read_only: false,
            line_numbers: true,
            highlight_lines: Vec::new(),
            initial_cursor_position: None,
            initial_selection: None,
            show_toolbar: true,
            height: default_height(),
            width: default_width(),
        }
    }
}

impl SurfaceConfig {
    /// Config with just content and language set
    pub fn with_content(content: impl Into<String>, language: LanguageId) -> Self {
        Self {
            initial_content: content.into(),
            language,
            ..Self::default()
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse surface config YAML")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse surface config JSON")
    }

    /// Load from a `.yaml`/`.yml` or `.json` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let config = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            other => bail!(
                "Unsupported config extension {:?} for {}",
                other.unwrap_or(""),
                path.display()
            ),
        }
        .with_context(|| format!("Invalid config {}", path.display()))?;

        tracing::info!("Loaded surface config from {}", path.display());
        Ok(config)
    }

    pub fn is_line_highlighted(&self, line: usize) -> bool {
        self.highlight_lines.contains(&line)
    }
}
