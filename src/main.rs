use anyhow::Result;
use clap::Parser;

use lesson_editor::cli::{terminal_prefers_dark, CliArgs, OutputFormat, StartupConfig};
use lesson_editor::editable::{Position, SelectionRange};
use lesson_editor::keymap::KeyPressEvent;
use lesson_editor::runtime::{Clipboard, MemoryClipboard, Surface, SurfaceHost, SystemClipboard};
use lesson_editor::view::{render_ansi, render_json};

/// Host for terminal runs: records callbacks as printable lines
struct TerminalHost {
    prefers_dark: bool,
    events: Vec<String>,
}

impl SurfaceHost for TerminalHost {
    fn on_change(&mut self, content: &str) {
        self.events
            .push(format!("change: {} chars", content.chars().count()));
    }

    fn on_cursor_change(&mut self, position: Position) {
        self.events.push(format!(
            "cursor: line {} column {}",
            position.line, position.column
        ));
    }

    fn on_selection_change(&mut self, range: Option<SelectionRange>) {
        let line = match range {
            Some(r) => format!(
                "selection: {}:{} - {}:{}",
                r.start().line,
                r.start().column,
                r.end().line,
                r.end().column
            ),
            None => "selection: none".to_string(),
        };
        self.events.push(line);
    }

    fn on_key_press(&mut self, event: &KeyPressEvent) {
        self.events.push(format!(
            "key: {} ctrl={} shift={} alt={}",
            event.key, event.ctrl_key, event.shift_key, event.alt_key
        ));
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }
}

fn run<C: Clipboard>(startup: StartupConfig, clipboard: C) -> Result<()> {
    let host = TerminalHost {
        prefers_dark: terminal_prefers_dark(),
        events: Vec::new(),
    };
    let mut surface = Surface::new(startup.surface, host, clipboard);

    for msg in startup.script {
        surface.dispatch(msg);
    }

    if startup.print_events {
        for event in &surface.host().events {
            eprintln!("{}", event);
        }
    }

    let frame = surface.frame();
    match startup.format {
        OutputFormat::Ansi => print!("{}", render_ansi(&frame)),
        OutputFormat::Json => println!("{}", render_json(&frame)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    lesson_editor::tracing::init();

    let startup = CliArgs::parse().into_config()?;
    if startup.system_clipboard {
        run(startup, SystemClipboard)
    } else {
        run(startup, MemoryClipboard::default())
    }
}
