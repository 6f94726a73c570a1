//! Command-line argument parsing for the lesson-editor binary
//!
//! Supports:
//! - Loading a surface config (YAML/JSON) or just a content file
//! - Overriding language, theme and read-only mode
//! - Scripting a selection and a key sequence before rendering
//! - ANSI or JSON output

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::config::SurfaceConfig;
use crate::config_paths;
use crate::keymap::parse_key_sequence;
use crate::messages::{Msg, UiMsg};
use crate::syntax::LanguageId;
use crate::theme::EditorThemeMode;

/// Render a lesson editing step in the terminal
#[derive(Parser, Debug)]
#[command(
    name = "lesson-editor",
    version,
    about = "Render a lesson editing step in the terminal"
)]
pub struct CliArgs {
    /// Surface config file (.yaml, .yml or .json)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read initial content from a file
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Language tag, e.g. javascript, css, json
    #[arg(long, value_name = "TAG")]
    pub language: Option<String>,

    /// Initial selection as anchor:focus character offsets
    #[arg(long, value_name = "A:B", value_parser = parse_selection)]
    pub select: Option<(usize, usize)>,

    /// Comma-separated keys to press, e.g. "Shift+ArrowRight,Ctrl+A"
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Copy the selection after the keys run
    #[arg(long)]
    pub copy: bool,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Disable editing
    #[arg(long)]
    pub read_only: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ansi)]
    pub format: OutputFormat,

    /// Use the system clipboard instead of an in-memory one
    #[arg(long)]
    pub system_clipboard: bool,

    /// Print host callbacks to stderr
    #[arg(long)]
    pub events: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for EditorThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => EditorThemeMode::Light,
            ThemeArg::Dark => EditorThemeMode::Dark,
            ThemeArg::System => EditorThemeMode::System,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ansi,
    Json,
}

/// What the binary should mount and replay
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub surface: SurfaceConfig,
    /// Messages dispatched in order after mounting
    pub script: Vec<Msg>,
    pub format: OutputFormat,
    pub system_clipboard: bool,
    pub print_events: bool,
}

fn parse_selection(s: &str) -> Result<(usize, usize), String> {
    let (anchor, focus) = s
        .split_once(':')
        .ok_or_else(|| format!("Expected anchor:focus, got '{}'", s))?;
    let anchor = anchor
        .trim()
        .parse()
        .map_err(|_| format!("Invalid anchor offset '{}'", anchor))?;
    let focus = focus
        .trim()
        .parse()
        .map_err(|_| format!("Invalid focus offset '{}'", focus))?;
    Ok((anchor, focus))
}

/// Interpret a `COLORFGBG` value (`"fg;bg"`, sometimes `"fg;default;bg"`).
/// Background colors 0-6 and 8 are dark.
pub fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg < 7 || bg == 8)
}

/// Best guess at whether the terminal has a dark background
pub fn terminal_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .map(|v| colorfgbg_is_dark(&v))
        .unwrap_or(false)
}

impl CliArgs {
    /// Resolve files and flags into a startup configuration
    pub fn into_config(self) -> Result<StartupConfig> {
        let mut surface = match &self.config {
            Some(path) => SurfaceConfig::load(path)?,
            None => match config_paths::default_surface_file().filter(|p| p.exists()) {
                Some(path) => SurfaceConfig::load(&path)?,
                None => SurfaceConfig::default(),
            },
        };

        if let Some(path) = &self.content {
            surface.initial_content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read content {}", path.display()))?;
        }
        if let Some(tag) = &self.language {
            surface.language = LanguageId::from_tag_or_plain(tag);
        }
        if let Some(theme) = self.theme {
            surface.theme = theme.into();
        }
        if self.read_only {
            surface.read_only = true;
        }

        let mut script = Vec::new();
        if let Some((anchor, focus)) = self.select {
            script.push(Msg::set_selection(anchor, focus));
        }
        if let Some(keys) = &self.keys {
            let presses = parse_key_sequence(keys)
                .with_context(|| format!("Invalid --keys '{}'", keys))?;
            script.extend(presses.into_iter().map(Msg::key));
        }
        if self.copy {
            script.push(Msg::Ui(UiMsg::Copy));
        }

        Ok(StartupConfig {
            surface,
            script,
            format: self.format,
            system_clipboard: self.system_clipboard,
            print_events: self.events,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyPress, Modifiers};

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["lesson-editor"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("3:7"), Ok((3, 7)));
        assert_eq!(parse_selection(" 7 : 3 "), Ok((7, 3)));
        assert!(parse_selection("3").is_err());
        assert!(parse_selection("a:1").is_err());
    }

    #[test]
    fn test_select_and_keys_become_script() {
        let config = args(&["--select", "0:2", "--keys", "Shift+ArrowRight, ctrl+c"])
            .into_config()
            .unwrap();
        assert_eq!(
            config.script,
            vec![
                Msg::set_selection(0, 2),
                Msg::key(KeyPress::new("ArrowRight", Modifiers::SHIFT)),
                Msg::key(KeyPress::new("c", Modifiers::CTRL)),
            ]
        );
    }

    #[test]
    fn test_bad_keys_are_an_error() {
        assert!(args(&["--keys", "Ctrl+Bogus"]).into_config().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = args(&[
            "--language",
            "ts",
            "--theme",
            "dark",
            "--read-only",
            "--format",
            "json",
            "--copy",
        ])
        .into_config()
        .unwrap();
        assert_eq!(config.surface.language, LanguageId::TypeScript);
        assert_eq!(config.surface.theme, EditorThemeMode::Dark);
        assert!(config.surface.read_only);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.script, vec![Msg::Ui(UiMsg::Copy)]);
    }

    #[test]
    fn test_unknown_language_is_plaintext() {
        let config = args(&["--language", "cobol"]).into_config().unwrap();
        assert_eq!(config.surface.language, LanguageId::PlainText);
    }

    #[test]
    fn test_colorfgbg() {
        assert!(colorfgbg_is_dark("15;0"));
        assert!(colorfgbg_is_dark("15;default;8"));
        assert!(!colorfgbg_is_dark("0;15"));
        assert!(!colorfgbg_is_dark("garbage"));
    }
}
