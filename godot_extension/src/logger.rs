//! `log` backend that writes to the Godot output panel.

use godot::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct GodotLogger;

static LOGGER: GodotLogger = GodotLogger;

impl Log for GodotLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error => godot_error!("[{}] {}", record.target(), record.args()),
            Level::Warn => godot_warn!("[{}] {}", record.target(), record.args()),
            _ => godot_print!("[{}] {}", record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}

/// Install the logger once; later calls are no-ops.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }
}
