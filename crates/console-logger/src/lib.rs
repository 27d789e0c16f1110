//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console and
//! into a circular buffer of recent entries, which can be read back for
//! diagnostics.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in the buffer
pub const DEFAULT_CAPACITY: usize = 200;

static GLOBAL: OnceLock<&'static ConsoleLogger> = OnceLock::new();

/// The installed logger, if `init` has run
pub fn global() -> Option<&'static ConsoleLogger> {
    GLOBAL.get().copied()
}

/// One buffered log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Console line, e.g. `[INFO storefront_ui::cart] removed 1 item`
    pub fn line(&self) -> String {
        format!("[{} {}] {}", self.level, self.target, self.message)
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Install as the global logger. The logger lives for the rest of the page.
    pub fn init(self) -> Result<&'static ConsoleLogger, SetLoggerError> {
        let logger: &'static ConsoleLogger = Box::leak(Box::new(self));
        log::set_logger(logger)?;
        log::set_max_level(logger.level);
        let _ = GLOBAL.set(logger);
        Ok(logger)
    }

    /// Buffered records as console lines, oldest first
    pub fn dump(&self) -> String {
        self.recent().iter().map(LogEntry::line).collect::<Vec<_>>().join("\n")
    }

    /// Buffered records, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        write_console(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    use wasm_bindgen::JsValue;
    let line = JsValue::from_str(&entry.line());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{}", entry.line());
}
