use log::{Level, LevelFilter, Log, Metadata, Record};

struct SimpleWebLogger;

static LOGGER: SimpleWebLogger = SimpleWebLogger;

impl Log for SimpleWebLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!(
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg.into()),
            Level::Warn => web_sys::console::warn_1(&msg.into()),
            Level::Info => web_sys::console::info_1(&msg.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg.into()),
        }
    }

    fn flush(&self) {}
}

pub fn simple_web_logger_init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}
