//! Theme configuration for the player and CLI output
//!
//! Provides both ratatui styles (for the player) and ANSI escape codes
//! (for CLI output). Setting `NO_COLOR` switches to a colorless theme.

use ratatui::style::{Color, Modifier, Style};

/// Colors used across the player and CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (transcript text)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, segments without a start time)
    pub text_secondary: Color,
    /// Accent color for keys and the progress bar
    pub accent: Color,
    /// Highlighted segment color
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::reader()
    }
}

impl Theme {
    /// Default theme: gray text, yellow highlight, green accents.
    pub fn reader() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// No colors at all; emphasis comes from modifiers only.
    pub fn plain() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            highlight: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the segment carrying the highlight marker.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the segment under the selection cursor.
    pub fn selected_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI color helpers for CLI output

    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    match color_to_ansi(color) {
        "" => text.to_string(),
        code => format!("{}{}{}", code, text, ANSI_RESET),
    }
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        // Reset, RGB and indexed colors print unstyled
        _ => "",
    }
}

/// Theme for the current environment.
pub fn current_theme() -> Theme {
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        Theme::plain()
    } else {
        Theme::default()
    }
}
