//! Frame rendering for the terminal player.
//!
//! Layout, top to bottom: transcript, progress bar, status line, footer.

pub mod help;
pub mod progress;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::state::PlayerState;
use crate::source::PlaybackSource;
use crate::sync::{PlayState, PlaybackState, Synchronizer};
use crate::theme::Theme;
use crate::transcript::{Segment, SegmentId, TranscriptView};

pub use progress::format_duration;

const FOOTER: &str = "space: play/pause | s: stop | \u{2190}\u{2192}: select | enter: seek | ?: help | q: quit";

/// Draw one frame.
pub fn draw<S, V>(
    frame: &mut Frame,
    sync: &Synchronizer<S, V>,
    player: &PlayerState,
    duration: f64,
    theme: &Theme,
) where
    S: PlaybackSource,
    V: TranscriptView,
{
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let segments = sync.view().map(|v| v.segments()).unwrap_or(&[]);
    let highlighted = sync.highlighted();
    render_transcript(frame, chunks[0], segments, highlighted, player.selected, theme);

    let position = sync.source().map(|s| s.current_time()).unwrap_or(0.0);
    let starts: Vec<f64> = segments.iter().filter_map(|s| s.start).collect();
    frame.render_widget(
        Paragraph::new(progress::progress_line(
            chunks[1].width,
            position,
            duration,
            &starts,
            theme,
        )),
        chunks[1],
    );

    if let Some(state) = sync.state() {
        let status = status_line(state, player.message.as_deref(), theme);
        frame.render_widget(Paragraph::new(status), chunks[2]);
    }

    frame.render_widget(
        Paragraph::new(FOOTER)
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center),
        chunks[3],
    );

    if player.show_help {
        help::render_help_modal(frame, area, theme);
    }
}

fn render_transcript(
    frame: &mut Frame,
    area: Rect,
    segments: &[Segment],
    highlighted: Option<SegmentId>,
    selected: Option<SegmentId>,
    theme: &Theme,
) {
    let lines: Vec<Line> = segments
        .iter()
        .map(|segment| segment_line(segment, highlighted, selected, theme))
        .collect();

    let focus = selected.or(highlighted).map(|id| id.index()).unwrap_or(0);
    let scroll = scroll_offset(focus, area.height as usize, lines.len());
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), area);
}

fn segment_line<'a>(
    segment: &'a Segment,
    highlighted: Option<SegmentId>,
    selected: Option<SegmentId>,
    theme: &Theme,
) -> Line<'a> {
    let time = match segment.start {
        Some(start) => format!("{:>6} ", format_duration(start)),
        None => format!("{:>6} ", "--:--"),
    };
    let mut text_style = if Some(segment.id) == highlighted {
        theme.highlight_style()
    } else if segment.start.is_none() {
        theme.text_secondary_style()
    } else {
        theme.text_style()
    };
    if Some(segment.id) == selected {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }
    let pointer = if Some(segment.id) == highlighted { "\u{25b6} " } else { "  " };

    Line::from(vec![
        Span::styled(pointer, theme.highlight_style()),
        Span::styled(time, theme.text_secondary_style()),
        Span::styled(segment.text.as_str(), text_style),
    ])
}

/// First visible row so that `focus` sits mid-screen where possible.
pub fn scroll_offset(focus: usize, height: usize, total: usize) -> usize {
    if total <= height {
        return 0;
    }
    focus
        .saturating_sub(height / 2)
        .min(total.saturating_sub(height))
}

fn status_line(state: &PlaybackState, message: Option<&str>, theme: &Theme) -> Line<'static> {
    let (icon, label) = match state.play_state {
        PlayState::Playing => ("\u{25b6}", "playing"),
        PlayState::Paused => ("\u{23f8}", "paused"),
        PlayState::Stopped => ("\u{25a0}", "stopped"),
    };
    let mut spans = vec![
        Span::styled(format!(" {icon} {label}"), theme.accent_bold_style()),
        Span::styled(
            format!("  {:.2}x  at {}", state.playback_rate, state.current),
            theme.text_style(),
        ),
    ];
    if let Some(id) = state.highlighted {
        spans.push(Span::styled(format!("  segment {id}"), theme.text_style()));
    }
    if state.stop_after_current {
        spans.push(Span::styled("  [stop after current]", theme.accent_style()));
    }
    if let Some(message) = message {
        spans.push(Span::styled(
            format!("  {message}"),
            theme.text_secondary_style(),
        ));
    }
    Line::from(spans)
}
