// Wed Jan 28 2026 - Alex

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs the crate's colored stderr logger. Safe to call more than
    /// once; later calls only adjust the max level.
    pub fn init(level: LevelFilter) {
        log::set_boxed_logger(Box::new(StderrLogger { level, color: true })).ok();
        log::set_max_level(level);
    }

    pub fn init_plain(level: LevelFilter) {
        log::set_boxed_logger(Box::new(StderrLogger { level, color: false })).ok();
        log::set_max_level(level);
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }

    pub fn level_from_verbosity(verbosity: usize) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

struct StderrLogger {
    level: LevelFilter,
    color: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = format!("{:5}", record.level());
        let tag = if self.color {
            match record.level() {
                Level::Error => tag.red().bold(),
                Level::Warn => tag.yellow().bold(),
                Level::Info => tag.green().bold(),
                Level::Debug => tag.blue().bold(),
                Level::Trace => tag.magenta().bold(),
            }
            .to_string()
        } else {
            tag
        };
        eprintln!("{} [{}] {}", tag, record.target().dimmed(), record.args());
    }

    fn flush(&self) {}
}
