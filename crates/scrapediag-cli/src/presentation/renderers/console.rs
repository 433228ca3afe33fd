use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write as _;

use super::traits::Renderer;
use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, StatusLevel};

pub struct ConsoleRenderer {
    json_mode: bool,
    palette: Palette,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, palette: Palette) -> Self {
        Self { json_mode, palette }
    }

    /// The exact text `render` writes to stdout.
    pub fn format<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(serde_json::to_string_pretty(result)? + "\n");
        }

        let p = self.palette;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            let label = match badge.level {
                StatusLevel::Warning => p.paint(&badge.label, owo_colors::Style::new().bold().yellow()),
                StatusLevel::Error => p.error(&badge.label),
                StatusLevel::Success | StatusLevel::Info => p.heading(&badge.label),
            };
            writeln!(out, "{} {}", badge.icon(), label)?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(p))?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", p.tip("💡 Tips:"))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", p.command(cmd))?;
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let text = self.format(&result)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
