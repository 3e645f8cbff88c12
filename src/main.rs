//! ASL Recognizer - Replay Entry Point
//!
//! Usage: asl-replay [FILE]
//! Reads recorded frames (JSON Lines) from FILE or stdin and prints each
//! confirmed symbol as a JSON line on stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use anyhow::Context;

use asl_recognizer_core::constants::{APP_NAME, APP_VERSION};
use asl_recognizer_core::logic::replay::{replay_reader, write_event};
use asl_recognizer_core::logic::session::LogSink;
use asl_recognizer_core::{AppConfig, RecognitionSession};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting {} replay v{}...", APP_NAME, APP_VERSION);

    let engine_config = AppConfig::from_env()
        .engine_config()
        .context("invalid recognition configuration")?;

    let input: Box<dyn BufRead> = match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            let file = File::open(&path).with_context(|| format!("cannot open {}", path))?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = RecognitionSession::new(engine_config).with_sink(Arc::new(LogSink));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = replay_reader(input, &mut session, |event| write_event(&mut out, event))
        .context("replay failed")?;

    if summary.malformed_lines > 0 {
        log::warn!("{} of {} lines were malformed", summary.malformed_lines, summary.lines_read);
    }

    let ended = session.end();
    log::info!(
        "Replayed {} frames: \"{}\" ({} confirmations)",
        ended.stats.frames_processed,
        ended.transcript,
        ended.stats.confirmations
    );

    Ok(())
}
