//! Simulate command handler
//!
//! Replays a list of playback positions through a synchronizer backed by a
//! scripted source and prints every notification as one JSON line.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};

use readalong::cli::SimulateArgs;
use readalong::source::ScriptedSource;
use readalong::sync::{SyncEvent, Synchronizer};
use readalong::transcript::TranscriptView;

use super::{load_config, load_transcript};

/// Replay positions and print the emitted events.
pub fn handle(args: SimulateArgs) -> Result<()> {
    let config = load_config()?;
    let options = args.sync.apply(config.sync);
    let transcript = load_transcript(&args.file, &options.time_attribute)?;
    let duration = args.duration.or_else(|| transcript.duration());
    tracing::debug!(
        segments = transcript.segments().len(),
        positions = args.positions.len(),
        ?duration,
        "simulating"
    );

    let mut sync = Synchronizer::new(ScriptedSource::new(duration), transcript, options);
    let events = Rc::new(RefCell::new(Vec::<SyncEvent>::new()));
    let sink = Rc::clone(&events);
    sync.subscribe(move |event| sink.borrow_mut().push(*event));

    match args.seek {
        Some(target) => sync.seek_to_segment(target),
        None => sync.play(),
    }
    sync.pump();

    for position in &args.positions {
        if let Some(source) = sync.source_mut() {
            source.report(*position);
        }
        sync.pump();
    }

    for event in events.borrow().iter() {
        let line = serde_json::to_string(event).context("Failed to serialize event")?;
        println!("{}", line);
    }
    Ok(())
}
