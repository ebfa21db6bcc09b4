//! Scripted playback source.
//!
//! Position only changes when told to, either by the synchronizer's
//! commands or by `report`. Every command is logged so callers can check
//! what the synchronizer asked of the media.

use super::{MediaEvent, PlaybackSource};

/// A command received from the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceCommand {
    SetCurrentTime(f64),
    SetPlaybackRate(f64),
    Play,
    Pause,
}

#[derive(Debug, Clone)]
pub struct ScriptedSource {
    position: f64,
    rate: f64,
    paused: bool,
    duration: Option<f64>,
    events: Vec<MediaEvent>,
    commands: Vec<SourceCommand>,
}

impl ScriptedSource {
    pub fn new(duration: Option<f64>) -> Self {
        Self {
            position: 0.0,
            rate: 1.0,
            paused: true,
            duration,
            events: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Report a new position, as a playing media element would.
    pub fn report(&mut self, secs: f64) {
        self.position = secs;
        self.events.push(MediaEvent::TimeUpdate);
    }

    /// Report the end of the media.
    pub fn finish(&mut self) {
        if let Some(duration) = self.duration {
            self.position = duration;
        }
        self.paused = true;
        self.events.push(MediaEvent::Pause);
        self.events.push(MediaEvent::Ended);
    }

    /// Make the duration known, as metadata loading would.
    pub fn load_duration(&mut self, duration: f64) {
        self.duration = Some(duration);
        self.events.push(MediaEvent::DurationChange);
    }

    /// Commands received so far, oldest first.
    pub fn commands(&self) -> &[SourceCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl PlaybackSource for ScriptedSource {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.commands.push(SourceCommand::SetCurrentTime(secs));
        self.position = secs;
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.commands.push(SourceCommand::SetPlaybackRate(rate));
        self.rate = rate;
    }

    fn play(&mut self) {
        self.commands.push(SourceCommand::Play);
        if self.paused {
            self.paused = false;
            self.events.push(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        self.commands.push(SourceCommand::Pause);
        if !self.paused {
            self.paused = true;
            self.events.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn drain_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.events)
    }
}
