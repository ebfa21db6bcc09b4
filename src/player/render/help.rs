//! Help overlay for the terminal player.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Key bindings shown in the overlay, grouped by heading.
pub const KEY_BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Playback",
        &[
            ("Space", "Play / pause"),
            ("s", "Stop and rewind"),
            ("+/-", "Rate up / down"),
            ("a", "Toggle stop after current"),
        ],
    ),
    (
        "Segments",
        &[
            ("\u{2190}/\u{2192}", "Select previous / next"),
            ("Enter", "Play from selected"),
        ],
    ),
    ("General", &[("?", "Show this help"), ("q", "Quit")]),
];

fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (heading, keys) in KEY_BINDINGS {
        lines.push(Line::from(Span::styled(
            heading.to_string(),
            theme.text_secondary_style(),
        )));
        for (key, desc) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", key), theme.accent_style()),
                Span::raw(desc.to_string()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}

/// Render the help overlay centered in `area`.
pub fn render_help_modal(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = build_help_text(theme);
    let modal_width = 44.min(area.width.saturating_sub(4));
    let modal_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(" Help "),
    );
    frame.render_widget(help, modal_area);
}
