use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards `log` records to the browser console.
pub struct ConsoleLogger {
    max_level: LevelFilter,
}

static LOGGER: ConsoleLogger = ConsoleLogger {
    max_level: LevelFilter::Debug,
};

/// Installs the console logger unless another logger got there first.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LOGGER.max_level);
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

fn console_method(level: Level) -> ConsoleMethod {
    match level {
        Level::Error => ConsoleMethod::Error,
        Level::Warn => ConsoleMethod::Warn,
        Level::Info => ConsoleMethod::Info,
        Level::Debug | Level::Trace => ConsoleMethod::Debug,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message: JsValue = format!("{}: {}", record.target(), record.args()).into();

        match console_method(record.level()) {
            ConsoleMethod::Error => console::error_1(&message),
            ConsoleMethod::Warn => console::warn_1(&message),
            ConsoleMethod::Info => console::info_1(&message),
            ConsoleMethod::Debug => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(console_method(Level::Error), ConsoleMethod::Error);
        assert_eq!(console_method(Level::Warn), ConsoleMethod::Warn);
        assert_eq!(console_method(Level::Info), ConsoleMethod::Info);
        assert_eq!(console_method(Level::Debug), ConsoleMethod::Debug);
        assert_eq!(console_method(Level::Trace), ConsoleMethod::Debug);
    }

    #[test]
    fn trace_records_are_filtered_out() {
        let trace = Metadata::builder()
            .level(Level::Trace)
            .target("snowflakes::pool")
            .build();
        let debug = Metadata::builder()
            .level(Level::Debug)
            .target("snowflakes::pool")
            .build();

        assert!(!LOGGER.enabled(&trace));
        assert!(LOGGER.enabled(&debug));
    }
}
