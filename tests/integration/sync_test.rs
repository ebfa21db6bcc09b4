//! Integration tests for the synchronizer against fake collaborators

use super::helpers::{fixture, recorder, FakeSource, FakeView};
use readalong::source::ScriptedSource;
use readalong::sync::{quantize, PlayState, SegmentIndex, SyncEvent, SyncOptions, Synchronizer};
use readalong::transcript::{SegmentId, Transcript, DEFAULT_TIME_ATTRIBUTE};

const MARKER: &str = "highlighted";

fn fake_sync(starts: &[f64], options: SyncOptions) -> Synchronizer<FakeSource, FakeView> {
    Synchronizer::new(FakeSource::with_duration(10.0), FakeView::new(starts), options)
}

fn tick(sync: &mut Synchronizer<FakeSource, FakeView>, position: f64) {
    sync.source_mut().unwrap().tick(position);
    sync.pump();
}

// ============================================================================
// Quantization and index
// ============================================================================

#[test]
fn quantize_stays_within_a_quarter_second() {
    for i in -2000..2000 {
        let t = i as f64 * 0.037;
        let q = quantize(t).unwrap();
        assert_eq!((q * 2.0).fract(), 0.0, "{q} is not a multiple of 0.5");
        assert!((q - t).abs() <= 0.25 + 1e-12, "quantize({t}) = {q}");
    }
}

#[test]
fn index_build_is_deterministic_and_first_wins() {
    let pairs = [
        (0.0, SegmentId(0)),
        (1.1, SegmentId(1)),
        (0.9, SegmentId(2)),
        (3.0, SegmentId(3)),
    ];
    let first = SegmentIndex::build(pairs);
    let second = SegmentIndex::build(pairs);

    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        second.iter().collect::<Vec<_>>()
    );
    assert_eq!(first.shadowed(), &[SegmentId(2)]);
    assert_eq!(first.len(), 3);
}

// ============================================================================
// Highlighting
// ============================================================================

#[test]
fn at_most_one_segment_is_marked() {
    let mut sync = fake_sync(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], SyncOptions::default());
    sync.play();
    sync.pump();

    // Deterministic jumpy sequence, forwards and backwards
    let mut seed: u64 = 7;
    for _ in 0..200 {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let position = (seed >> 33) as f64 % 90.0 / 10.0;
        tick(&mut sync, position);
        if sync.play_state() == PlayState::Stopped {
            sync.play();
            sync.pump();
        }
        assert!(sync.view().unwrap().marked(MARKER).len() <= 1);
    }
}

#[test]
fn pressed_indicator_follows_highlight() {
    let mut sync = fake_sync(&[0.0, 2.0, 4.0], SyncOptions::default());
    sync.play();
    tick(&mut sync, 2.0);

    let view = sync.view().unwrap();
    assert_eq!(view.pressed(SegmentId(1)), Some(true));
    assert_eq!(view.pressed(SegmentId(0)), Some(false));
    assert_eq!(view.pressed(SegmentId(2)), Some(false));
}

#[test]
fn no_pressed_indicator_without_touch() {
    let sync = fake_sync(
        &[0.0, 2.0],
        SyncOptions {
            touch_to_seek: false,
            ..Default::default()
        },
    );
    assert_eq!(sync.view().unwrap().pressed(SegmentId(0)), None);
}

#[test]
fn custom_marker_name_is_used() {
    let mut sync = fake_sync(
        &[0.0, 2.0],
        SyncOptions {
            highlight_marker: "reading".into(),
            ..Default::default()
        },
    );
    sync.play();
    tick(&mut sync, 2.0);

    let view = sync.view().unwrap();
    assert_eq!(view.marked("reading"), vec![SegmentId(1)]);
    assert!(view.marked(MARKER).is_empty());
}

// ============================================================================
// Transport
// ============================================================================

#[test]
fn source_without_play_events_still_transitions() {
    let mut sync = fake_sync(&[0.0, 2.0], SyncOptions::default());
    let (log, listener) = recorder();
    sync.subscribe(listener);

    sync.play();
    sync.pump();
    assert_eq!(sync.play_state(), PlayState::Playing);
    sync.pause();
    assert_eq!(sync.play_state(), PlayState::Paused);

    let states: Vec<PlayState> = log
        .borrow()
        .iter()
        .filter(|e| matches!(e, SyncEvent::PlayStateChanged(_)))
        .map(|e| e.state().play_state)
        .collect();
    assert_eq!(states, vec![PlayState::Playing, PlayState::Paused]);
}

#[test]
fn stop_rewinds_to_clip_begin() {
    let mut sync = fake_sync(
        &[0.0, 2.0, 4.0],
        SyncOptions {
            clip_begin: 2.0,
            ..Default::default()
        },
    );
    sync.play();
    tick(&mut sync, 4.1);
    sync.stop();
    sync.pump();

    let state = sync.state().unwrap();
    assert_eq!(state.current.as_secs(), 2.0);
    assert_eq!(state.highlighted, None);
    assert_eq!(sync.source().unwrap().position, 2.0);
    assert!(sync.source().unwrap().paused);
    assert!(sync.view().unwrap().marked(MARKER).is_empty());
}

#[test]
fn stop_after_current_halts_at_next_segment() {
    let mut sync = fake_sync(
        &[0.0, 2.0, 4.0],
        SyncOptions {
            stop_after_current: true,
            ..Default::default()
        },
    );
    sync.seek_to_segment(2.0);
    sync.pump();
    assert_eq!(sync.highlighted(), Some(SegmentId(1)));

    tick(&mut sync, 3.0);
    assert_eq!(sync.play_state(), PlayState::Playing);
    tick(&mut sync, 4.0);
    assert_eq!(sync.play_state(), PlayState::Stopped);
    assert!(sync.view().unwrap().marked(MARKER).is_empty());
}

#[test]
fn non_numeric_rate_leaves_playback_untouched() {
    let mut sync = fake_sync(&[0.0, 2.0], SyncOptions::default());
    sync.set_playback_rate("1.5");
    assert_eq!(sync.source().unwrap().rate, 1.5);

    assert!(sync.try_set_playback_rate("fast").is_err());
    assert!(sync.try_set_playback_rate(&f64::NAN).is_err());
    sync.set_playback_rate("");

    assert_eq!(sync.state().unwrap().playback_rate, 1.5);
    assert_eq!(sync.source().unwrap().rate, 1.5);
}

#[test]
fn any_numeric_rate_is_applied() {
    let mut sync = fake_sync(&[0.0, 2.0], SyncOptions::default());

    sync.set_playback_rate("0");
    assert_eq!(sync.state().unwrap().playback_rate, 0.0);
    assert_eq!(sync.source().unwrap().rate, 0.0);

    sync.set_playback_rate("-2");
    assert_eq!(sync.state().unwrap().playback_rate, -2.0);
    assert_eq!(sync.source().unwrap().rate, -2.0);
}

#[test]
fn unsubscribed_listener_hears_nothing() {
    let mut sync = fake_sync(&[0.0, 2.0], SyncOptions::default());
    let (log, listener) = recorder();
    let id = sync.subscribe(listener);
    assert!(sync.unsubscribe(id));

    sync.play();
    tick(&mut sync, 2.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn missing_view_disables_everything() {
    let mut sync: Synchronizer<FakeSource, FakeView> = Synchronizer::attach(
        Some(FakeSource::with_duration(5.0)),
        None,
        SyncOptions::default(),
    );
    let (log, listener) = recorder();
    sync.subscribe(listener);

    sync.play();
    sync.seek_to_segment(1.0);
    sync.set_playback_rate("2");
    sync.stop();

    assert!(!sync.is_enabled());
    assert!(sync.source().is_none());
    assert!(log.borrow().is_empty());
}

// ============================================================================
// Loaded transcripts
// ============================================================================

#[test]
fn shadowed_segment_is_never_highlighted() {
    let transcript = Transcript::load(fixture("story.json"), DEFAULT_TIME_ATTRIBUTE).unwrap();
    let mut sync = Synchronizer::new(
        ScriptedSource::new(transcript.duration()),
        transcript,
        SyncOptions::default(),
    );
    let (log, listener) = recorder();
    sync.subscribe(listener);

    sync.play();
    sync.pump();
    for step in 0..=36 {
        sync.source_mut().unwrap().report(step as f64 * 0.25);
        sync.pump();
    }

    let highlighted: Vec<SegmentId> = log
        .borrow()
        .iter()
        .filter_map(|e| match e {
            SyncEvent::HighlightChanged(state) => state.highlighted,
            _ => None,
        })
        .collect();
    assert_eq!(
        highlighted,
        vec![SegmentId(0), SegmentId(1), SegmentId(2), SegmentId(4)]
    );
    assert_eq!(sync.play_state(), PlayState::Stopped);
}
