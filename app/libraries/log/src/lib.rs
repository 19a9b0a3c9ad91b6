use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn into_tracing_level(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Installs the global fmt subscriber. `log` records are bridged into it.
///
/// Calling it twice (e.g. from several tests) keeps the first subscriber.
pub fn init_tracing(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(level.into_tracing_level())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LogLevel::Off.into_tracing_level(), LevelFilter::OFF);
        assert_eq!(LogLevel::Debug.into_tracing_level(), LevelFilter::DEBUG);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn log_level_reads_from_config_name() {
        let level: LogLevel = serde_json::from_str("\"Warn\"").unwrap();
        assert_eq!(level, LogLevel::Warn);
    }
}
