use std::sync::Arc;

use super::*;
use crate::error::SinkError;
use crate::logic::inference::decode_response;

struct FailingSink;

impl RecognitionSink for FailingSink {
    fn name(&self) -> &str {
        "failing"
    }

    fn record(&self, _record: &RecognitionRecord) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("endpoint unreachable".to_string()))
    }
}

fn config() -> EngineConfig {
    EngineConfig::new(0.6, 0, 3).unwrap()
}

fn spell(session: &mut RecognitionSession, word: &str, start_ms: u64) -> u64 {
    let mut t = start_ms;
    for letter in word.chars() {
        for _ in 0..session.config().buffer_size {
            session.process(&Observation::gesture(letter.to_string(), 0.9, t));
            t += 50;
        }
        // Drop the hand between letters
        session.process(&Observation::no_hand(t));
        t += 50;
    }
    t
}

#[test]
fn test_transcript_and_stats() {
    let mut session = RecognitionSession::new(config());
    spell(&mut session, "CAB", 0);

    assert_eq!(session.transcript_text(), "CAB");
    assert_eq!(session.transcript().len(), 3);

    let stats = session.stats();
    assert_eq!(stats.frames_processed, 12);
    assert_eq!(stats.frames_without_hand, 3);
    assert_eq!(stats.confirmations, 3);
    assert_eq!(stats.per_gesture.get("A"), Some(&1));
    assert_eq!(stats.hand_visibility(), 0.75);
}

#[test]
fn test_repeated_letter_needs_other_symbol_between() {
    let mut session = RecognitionSession::new(config());
    spell(&mut session, "LL", 0);

    // Second L is suppressed: same symbol as the last confirmation
    assert_eq!(session.transcript_text(), "L");
}

#[test]
fn test_sinks_receive_records() {
    let memory = Arc::new(MemorySink::new());
    let mut session = RecognitionSession::new(config())
        .with_sink(memory.clone())
        .with_sink(Arc::new(LogSink));

    spell(&mut session, "HI", 1000);

    let records = memory.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].gesture_name, "H");
    assert_eq!(records[0].session_id, session.id());
    assert_eq!(records[0].duration_ms, 100);
    assert!(records.iter().all(|r| r.success));
}

#[test]
fn test_unknown_symbol_marked_unsuccessful() {
    let memory = Arc::new(MemorySink::new());
    let mut session = RecognitionSession::new(config()).with_sink(memory.clone());

    spell(&mut session, "7", 0);

    assert_eq!(session.transcript_text(), "7");
    assert!(!memory.records()[0].success);
}

#[test]
fn test_failing_sink_does_not_affect_engine() {
    let memory = Arc::new(MemorySink::new());
    let mut session = RecognitionSession::new(config())
        .with_sink(Arc::new(FailingSink))
        .with_sink(memory.clone());

    assert!(memory.is_empty());
    spell(&mut session, "OK", 0);

    assert_eq!(session.transcript_text(), "OK");
    assert_eq!(memory.len(), 2);
    assert_eq!(session.state().last_confirmed(), Some("K"));

    let err = FailingSink.record(&memory.records()[0]).unwrap_err();
    assert!(matches!(err, SinkError::Unavailable(_)));
    assert_eq!(err.to_string(), "sink unavailable: endpoint unreachable");
}

#[test]
fn test_process_response() {
    let mut session = RecognitionSession::new(EngineConfig::new(0.6, 0, 2).unwrap());
    let response = decode_response(
        r#"{"hand_detected": true, "gesture_detected": true, "gesture": {"name": "V", "description": ""}, "confidence": 0.8}"#,
    )
    .unwrap();

    assert!(session.process_response(&response, 10).is_none());
    assert_eq!(session.buffer_progress(), 50.0);
    let event = session.process_response(&response, 20).unwrap();
    assert_eq!(event.gesture_id, "V");
}

#[test]
fn test_clear_transcript_keeps_engine_state() {
    let mut session = RecognitionSession::new(config());
    spell(&mut session, "A", 0);

    session.clear_transcript();
    assert_eq!(session.transcript_text(), "");
    assert_eq!(session.state().last_confirmed(), Some("A"));
    assert_eq!(session.stats().confirmations, 1);
}

#[test]
fn test_end_returns_summary() {
    let mut session = RecognitionSession::new(config());
    let id = session.id();
    spell(&mut session, "WAY", 0);
    session.process(&Observation::gesture("W", 0.9, 10_000));
    assert_eq!(session.progress().current_len, 1);

    let summary = session.end();
    assert_eq!(summary.session_id, id);
    assert_eq!(summary.transcript, "WAY");
    assert_eq!(summary.events.len(), 3);
    assert!(summary.ended_at >= summary.started_at);
}
