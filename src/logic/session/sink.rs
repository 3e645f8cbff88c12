//! Recognition Sinks
//!
//! Fire-and-forget consumers of confirmed recognitions. A failing sink is
//! logged by the session and otherwise ignored.

use parking_lot::Mutex;

use crate::error::SinkError;

use super::types::RecognitionRecord;

pub trait RecognitionSink: Send + Sync {
    fn name(&self) -> &str;

    fn record(&self, record: &RecognitionRecord) -> Result<(), SinkError>;
}

/// Writes each record to the log at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl RecognitionSink for LogSink {
    fn name(&self) -> &str {
        "log"
    }

    fn record(&self, record: &RecognitionRecord) -> Result<(), SinkError> {
        log::info!(
            "[{}] recognized '{}' (confidence {:.2}, {}ms, success={})",
            record.session_id,
            record.gesture_name,
            record.confidence,
            record.duration_ms,
            record.success
        );
        Ok(())
    }
}

/// Keeps records in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<RecognitionRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<RecognitionRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl RecognitionSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn record(&self, record: &RecognitionRecord) -> Result<(), SinkError> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}
