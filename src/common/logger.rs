//! logging setup
//! used for managing log output

use pretty_env_logger;

/// init the logger at `log_level` (trace debug info warn error, anything else is info)
pub fn init_logger(log_level: &str) {
    // already initialized
    if log::max_level() != log::LevelFilter::Off {
        return;
    }

    let result = pretty_env_logger::formatted_builder()
        .target(pretty_env_logger::env_logger::Target::Stderr)
        .filter_level(parse_level(log_level))
        .try_init();
    if result.is_err() {
        log::debug!("logger already initialized");
    }
}

fn parse_level(level: &str) -> log::LevelFilter {
    match level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info
    }
}

/// `[tag] message` at the given `log::Level`
#[macro_export]
macro_rules! tagged_log {
    ($level:expr, $tag:expr, $($arg:tt)*) => {
        log::log!($level, "[{}] {}", $tag, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($tag:expr, $($arg:tt)*) => { $crate::tagged_log!(log::Level::Error, $tag, $($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($tag:expr, $($arg:tt)*) => { $crate::tagged_log!(log::Level::Warn, $tag, $($arg)*) };
}

#[macro_export]
macro_rules! info {
    ($tag:expr, $($arg:tt)*) => { $crate::tagged_log!(log::Level::Info, $tag, $($arg)*) };
}

#[macro_export]
macro_rules! debug {
    ($tag:expr, $($arg:tt)*) => { $crate::tagged_log!(log::Level::Debug, $tag, $($arg)*) };
}

#[macro_export]
macro_rules! trace {
    ($tag:expr, $($arg:tt)*) => { $crate::tagged_log!(log::Level::Trace, $tag, $($arg)*) };
}
