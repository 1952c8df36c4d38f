//! Stderr logger for easel.
//!
//! Timestamped lines on stderr, level controlled by the CLI. Keeps the
//! report stream on stdout free of diagnostics.

use anyhow::Result;
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        eprintln!("[{timestamp} {}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Install the stderr logger at the given level.
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_boxed_logger(Box::new(StderrLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}
