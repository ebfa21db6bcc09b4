//! Shared helpers for integration tests

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use assert_cmd::Command;
use tempfile::TempDir;

use readalong::source::{MediaEvent, PlaybackSource};
use readalong::sync::SyncEvent;
use readalong::transcript::{Segment, SegmentId, TranscriptView};

/// Directory holding test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// readalong binary with colors off and a config path inside `config_dir`
/// (the file does not need to exist).
pub fn readalong(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readalong").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("READALONG_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("READALONG_LOG");
    cmd
}

/// Collects every notification a synchronizer emits.
pub fn recorder() -> (Rc<RefCell<Vec<SyncEvent>>>, impl FnMut(&SyncEvent) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |event: &SyncEvent| sink.borrow_mut().push(*event))
}

/// A marker operation seen by [`FakeView`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOp {
    Marker(SegmentId, String, bool),
    Pressed(SegmentId, bool),
}

/// Transcript view that records every change made to it.
#[derive(Debug, Default)]
pub struct FakeView {
    pub segments: Vec<Segment>,
    pub ops: Vec<ViewOp>,
}

impl FakeView {
    pub fn new(starts: &[f64]) -> Self {
        Self {
            segments: starts
                .iter()
                .enumerate()
                .map(|(i, &start)| Segment::new(i, start, format!("segment {i}")))
                .collect(),
            ops: Vec::new(),
        }
    }

    /// Segments whose last recorded marker op turned `marker` on.
    pub fn marked(&self, marker: &str) -> Vec<SegmentId> {
        self.segments
            .iter()
            .map(|s| s.id)
            .filter(|id| {
                self.ops
                    .iter()
                    .rev()
                    .find_map(|op| match op {
                        ViewOp::Marker(op_id, name, on) if op_id == id && name == marker => Some(*on),
                        _ => None,
                    })
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn pressed(&self, id: SegmentId) -> Option<bool> {
        self.ops.iter().rev().find_map(|op| match op {
            ViewOp::Pressed(op_id, pressed) if *op_id == id => Some(*pressed),
            _ => None,
        })
    }
}

impl TranscriptView for FakeView {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn set_marker(&mut self, id: SegmentId, marker: &str, on: bool) {
        self.ops.push(ViewOp::Marker(id, marker.to_string(), on));
    }

    fn set_pressed(&mut self, id: SegmentId, pressed: bool) {
        self.ops.push(ViewOp::Pressed(id, pressed));
    }
}

/// Minimal media element: reports time updates only, never play/pause
/// notifications.
#[derive(Debug, Default)]
pub struct FakeSource {
    pub position: f64,
    pub rate: f64,
    pub paused: bool,
    pub duration: Option<f64>,
    pub events: Vec<MediaEvent>,
}

impl FakeSource {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            rate: 1.0,
            paused: true,
            duration: Some(duration),
            ..Default::default()
        }
    }

    pub fn tick(&mut self, position: f64) {
        self.position = position;
        self.events.push(MediaEvent::TimeUpdate);
    }
}

impl PlaybackSource for FakeSource {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        self.position = secs;
        self.events.push(MediaEvent::TimeUpdate);
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
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
