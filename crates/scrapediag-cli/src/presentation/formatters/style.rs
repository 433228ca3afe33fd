use owo_colors::{OwoColorize, Style};
use std::fmt::Display;

/// Styling switch handed to every view. Styles are applied only when
/// color was resolved on for the stream being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, text: impl Display, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: impl Display) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn ok(&self, text: impl Display) -> String {
        self.paint(text, Style::new().green())
    }

    pub fn warn(&self, text: impl Display) -> String {
        self.paint(text, Style::new().yellow())
    }

    pub fn error(&self, text: impl Display) -> String {
        self.paint(text, Style::new().red().bold())
    }

    pub fn dim(&self, text: impl Display) -> String {
        self.paint(text, Style::new().dimmed())
    }

    pub fn command(&self, text: impl Display) -> String {
        self.paint(text, Style::new().cyan())
    }

    pub fn tip(&self, text: impl Display) -> String {
        self.paint(text, Style::new().yellow().bold())
    }
}
