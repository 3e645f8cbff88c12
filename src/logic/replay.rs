//! Session Replay
//!
//! Sequential driving loop over recorded frames (JSON Lines):
//! `{"timestamp_ms": 1200, "response": { ...inference response... }}`
//!
//! Lines are ingested strictly in file order. A line that cannot be decoded
//! (bad JSON or invalid UTF-8) is fed to the engine as a no-hand frame at the
//! previous timestamp. Timestamps that go backwards are clamped to the latest
//! one seen, so the engine always sees non-decreasing time.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;
use crate::logic::inference::InferenceResponse;
use crate::logic::recognition::{ConfirmedEvent, EngineConfig, Observation};
use crate::logic::session::{RecognitionSession, SessionSummary};

/// One recorded frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedFrame {
    pub timestamp_ms: u64,
    pub response: InferenceResponse,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplaySummary {
    pub lines_read: u64,
    pub malformed_lines: u64,
    pub events: Vec<ConfirmedEvent>,
}

/// Replay frames from `reader` through `session`, calling `on_event` per confirmation
pub fn replay_reader<R, F>(
    mut reader: R,
    session: &mut RecognitionSession,
    mut on_event: F,
) -> Result<ReplaySummary, ReplayError>
where
    R: BufRead,
    F: FnMut(&ConfirmedEvent) -> Result<(), ReplayError>,
{
    let mut summary = ReplaySummary::default();
    let mut last_timestamp = 0u64;
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        if buf.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        summary.lines_read += 1;

        // Bytes are decoded directly so invalid UTF-8 is just another malformed line
        let observation = match serde_json::from_slice::<RecordedFrame>(&buf) {
            Ok(frame) => {
                if frame.timestamp_ms < last_timestamp {
                    log::warn!(
                        "Line {}: timestamp {}ms goes backwards, clamped to {}ms",
                        line_no,
                        frame.timestamp_ms,
                        last_timestamp
                    );
                }
                last_timestamp = last_timestamp.max(frame.timestamp_ms);
                frame.response.to_observation(last_timestamp)
            }
            Err(e) => {
                summary.malformed_lines += 1;
                log::warn!("Line {}: malformed frame treated as no hand: {}", line_no, e);
                Observation::no_hand(last_timestamp)
            }
        };

        if let Some(event) = session.process(&observation) {
            on_event(&event)?;
            summary.events.push(event);
        }
    }

    Ok(summary)
}

/// Replay a recorded file in a fresh session and end it
pub fn replay_file(
    path: &Path,
    config: EngineConfig,
) -> Result<(ReplaySummary, SessionSummary), ReplayError> {
    config.validate()?;
    let file = File::open(path)?;
    let mut session = RecognitionSession::new(config);
    let summary = replay_reader(BufReader::new(file), &mut session, |_| Ok(()))?;
    Ok((summary, session.end()))
}

/// Write one event as a JSON line
pub fn write_event<W: Write>(out: &mut W, event: &ConfirmedEvent) -> Result<(), ReplayError> {
    serde_json::to_writer(&mut *out, event)?;
    writeln!(out)?;
    Ok(())
}
