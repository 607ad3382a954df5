//! Terminal rendering module for rich markdown output
//!
//! Task headings carry a status marker (`○`, `➤`, `✓`); in rich mode the
//! whole heading is tinted by status, and every other line goes through
//! termimad's inline markdown renderer.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// ANSI colours for task headings, by status marker.
const HEADING_COLORS: [(&str, &str); 3] = [
    ("✓", "\x1b[32m"),
    ("➤", "\x1b[33m"),
    ("○", "\x1b[36m"),
];

/// Default heading colour (blue).
const HEADING_DEFAULT: &str = "\x1b[34m";

const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("{}{line}{RESET}", heading_color(line));
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn heading_color(line: &str) -> &'static str {
    HEADING_COLORS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map_or(HEADING_DEFAULT, |(_, color)| color)
}
