//! Keyboard input handling for the terminal player.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{InputResult, PlayerState};
use crate::source::PlaybackSource;
use crate::sync::{PlayState, Synchronizer};
use crate::transcript::TranscriptView;

/// Playback rate change per `+`/`-` press.
pub const RATE_STEP: f64 = 0.25;
pub const MIN_RATE: f64 = 0.25;
pub const MAX_RATE: f64 = 4.0;

/// A player command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    Stop,
    SelectPrevious,
    SelectNext,
    Activate,
    RateUp,
    RateDown,
    ToggleStopAfterCurrent,
    ToggleHelp,
    Quit,
}

/// Map a key to its action, if it has one.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(' ') => Action::TogglePlay,
        KeyCode::Char('s') => Action::Stop,
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Enter => Action::Activate,
        KeyCode::Char('+') | KeyCode::Char('=') => Action::RateUp,
        KeyCode::Char('-') | KeyCode::Char('_') => Action::RateDown,
        KeyCode::Char('a') => Action::ToggleStopAfterCurrent,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}

/// Handle a key press. While help is showing, any key closes it.
pub fn handle_key<S, V>(
    key: KeyEvent,
    sync: &mut Synchronizer<S, V>,
    state: &mut PlayerState,
) -> InputResult
where
    S: PlaybackSource,
    V: TranscriptView,
{
    if state.show_help {
        state.show_help = false;
        return InputResult::Continue;
    }
    match action_for_key(key) {
        Some(action) => apply(action, sync, state),
        None => InputResult::Continue,
    }
}

/// Carry out `action` against the synchronizer.
pub fn apply<S, V>(action: Action, sync: &mut Synchronizer<S, V>, state: &mut PlayerState) -> InputResult
where
    S: PlaybackSource,
    V: TranscriptView,
{
    let count = sync.view().map(|v| v.segments().len()).unwrap_or(0);

    match action {
        Action::Quit => return InputResult::Quit,
        Action::TogglePlay => {
            if sync.play_state() == PlayState::Playing {
                sync.pause();
            } else {
                sync.play();
            }
        }
        Action::Stop => sync.stop(),
        Action::SelectPrevious => state.select_previous(sync.highlighted(), count),
        Action::SelectNext => state.select_next(sync.highlighted(), count),
        Action::Activate => {
            let touch = sync.options().is_some_and(|o| o.touch_to_seek);
            match state.selected {
                Some(_) if !touch => state.set_message("touch-to-seek is off"),
                Some(id) => {
                    let has_start = sync
                        .view()
                        .and_then(|v| v.segment(id))
                        .is_some_and(|s| s.start.is_some());
                    if has_start {
                        sync.activate_segment(id);
                    } else {
                        state.set_message(format!("segment {id} has no start time"));
                    }
                }
                None => state.set_message("no segment selected"),
            }
        }
        Action::RateUp | Action::RateDown => {
            let current = sync.state().map(|s| s.playback_rate).unwrap_or(1.0);
            let next = if action == Action::RateUp {
                (current + RATE_STEP).min(MAX_RATE)
            } else {
                (current - RATE_STEP).max(MIN_RATE)
            };
            match sync.try_set_playback_rate(&next) {
                Ok(()) => state.set_message(format!("rate {next:.2}x")),
                Err(err) => state.set_message(err.to_string()),
            }
        }
        Action::ToggleStopAfterCurrent => {
            let enabled = !sync.state().is_some_and(|s| s.stop_after_current);
            sync.set_stop_after_current(enabled);
            let label = if enabled { "on" } else { "off" };
            state.set_message(format!("stop after current {label}"));
        }
        Action::ToggleHelp => state.toggle_help(),
    }
    InputResult::Continue
}
