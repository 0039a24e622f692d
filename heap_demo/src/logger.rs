use log::{Level, LevelFilter, Log, Metadata, Record};

pub const LOG_LEVEL_VARIABLE: &str = "HEAP_DEMO_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn init() {
    let level = std::env::var(LOG_LEVEL_VARIABLE)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(DEFAULT_LEVEL);
    // a second init (e.g. from tests) keeps the first logger
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

struct StderrLogger;
static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "\x1b[{}m[{}] {}\x1b[0m",
                level_to_color_code(record.level()),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

fn level_to_color_code(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 34,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}
