// src/events/render.rs
// =============================================================================
// Decodes the feed body and writes one line per describable event.
//
// Decoding is all-or-nothing: if any part of the array is malformed we return
// an error before a single line is written. Only the first JSON value of the
// body is read; anything after a complete array is ignored.
// =============================================================================

use std::io::Write;

use super::describe::describe_event;
use super::model::Event;
use crate::error::ActivityError;

// Decodes a JSON array of events, keeping the feed's order
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>, ActivityError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Vec<Event>>();

    let events = match values.next() {
        Some(events) => events?,
        // Empty or whitespace-only body: let from_slice report the EOF
        None => serde_json::from_slice(body)?,
    };
    log::debug!("decoded {} event(s)", events.len());
    Ok(events)
}

// Writes the description of each event, in order, one per line
//
// Returns: how many lines were written (silent events are not counted)
pub fn render_events<W: Write>(events: &[Event], out: &mut W) -> std::io::Result<usize> {
    let mut written = 0;

    for line in events.iter().filter_map(describe_event) {
        writeln!(out, "{}", line)?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}
