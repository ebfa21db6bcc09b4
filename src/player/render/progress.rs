//! Progress bar with segment start ticks.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::theme::Theme;

/// Format a duration in seconds as MM:SS.
pub fn format_duration(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the bar characters.
///
/// Returns the characters and the number of filled positions. The playhead
/// is `⏺`, segment starts are `◆`.
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    segment_starts: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let filled = (bar_width as f64 * progress) as usize;
    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    for &start in segment_starts {
        let pos = if total_duration > 0.0 {
            ((start / total_duration) * bar_width as f64) as usize
        } else {
            0
        };
        if pos < bar_width && bar[pos] != '⏺' {
            bar[pos] = '◆';
        }
    }

    (bar, filled)
}

/// Progress bar line followed by ` MM:SS/MM:SS`.
pub fn progress_line(
    width: u16,
    current_time: f64,
    total_duration: f64,
    segment_starts: &[f64],
    theme: &Theme,
) -> Line<'static> {
    let time_display = format!(
        " {}/{}",
        format_duration(current_time),
        format_duration(total_duration)
    );
    let bar_width = (width as usize).saturating_sub(time_display.len() + 1);
    let (bar, filled) =
        build_progress_bar_chars(bar_width, current_time, total_duration, segment_starts);

    let played: String = bar[..filled.min(bar_width)]
        .iter()
        .map(|&c| if c == '◆' { '◆' } else { '━' })
        .collect();
    let remaining: String = bar[filled.min(bar_width)..].iter().collect();

    Line::from(vec![
        Span::raw(" "),
        Span::styled(played, theme.accent_style()),
        Span::styled(remaining, theme.text_secondary_style()),
        Span::styled(time_display, Style::default().fg(theme.text_primary)),
    ])
}
