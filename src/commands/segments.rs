//! Segments command handler
//!
//! Shows the half-second slot each segment claims, and which segments lost
//! their slot to an earlier one and can never be highlighted.

use anyhow::Result;
use serde::Serialize;

use readalong::cli::SegmentsArgs;
use readalong::sync::{QuantizedTime, SegmentIndex};
use readalong::theme::current_theme;
use readalong::transcript::{SegmentId, Transcript, TranscriptView};

use super::{load_config, load_transcript};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct SegmentRow<'a> {
    id: SegmentId,
    start: Option<f64>,
    slot: Option<QuantizedTime>,
    /// Segment holding this segment's slot, if not this one
    #[serde(skip_serializing_if = "Option::is_none")]
    shadowed_by: Option<SegmentId>,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    duration: Option<f64>,
    slots: usize,
    segments: Vec<SegmentRow<'a>>,
    shadowed: &'a [SegmentId],
}

fn build_rows<'a>(transcript: &'a Transcript, index: &SegmentIndex) -> Vec<SegmentRow<'a>> {
    transcript
        .segments()
        .iter()
        .map(|segment| {
            let slot = segment.start.and_then(QuantizedTime::from_secs);
            let shadowed_by = slot
                .and_then(|t| index.get(t))
                .filter(|owner| *owner != segment.id);
            SegmentRow {
                id: segment.id,
                start: segment.start,
                slot,
                shadowed_by,
                text: &segment.text,
            }
        })
        .collect()
}

fn format_row(slot: &str, id: &str, start: &str, text: &str) -> String {
    format!("{:>6}  {:<7}  {:>7}  {}", slot, id, start, text)
}

/// Print the segment listing.
pub fn handle(args: SegmentsArgs) -> Result<()> {
    let attribute = match args.time_attribute {
        Some(attribute) => attribute,
        None => load_config()?.sync.time_attribute,
    };
    let transcript = load_transcript(&args.file, &attribute)?;
    let index = SegmentIndex::from_segments(transcript.segments());
    let rows = build_rows(&transcript, &index);

    if args.json {
        let listing = Listing {
            duration: transcript.duration(),
            slots: index.len(),
            segments: rows,
            shadowed: index.shadowed(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    let theme = current_theme();
    println!(
        "{}",
        theme.secondary_text(&format_row("SLOT", "SEGMENT", "START", "TEXT"))
    );
    for row in &rows {
        let slot = row.slot.map(|t| t.to_string()).unwrap_or_else(|| "-".into());
        let start = row
            .start
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "-".into());
        let line = format_row(&slot, &row.id.to_string(), &start, row.text);
        match row.shadowed_by {
            Some(owner) => println!(
                "{}",
                theme.secondary_text(&format!("{}  (shadowed by {})", line, owner))
            ),
            None if row.slot.is_none() => {
                println!("{}", theme.secondary_text(&format!("{}  (no start time)", line)))
            }
            None => println!("{}", theme.primary_text(&line)),
        }
    }
    println!();
    println!(
        "{}",
        theme.primary_text(&format!(
            "{} segments, {} slots, {} shadowed",
            transcript.len(),
            index.len(),
            index.shadowed().len()
        ))
    );
    Ok(())
}
