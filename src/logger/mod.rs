//! Tagged console logging
//!
//! ```rust
//! use starling::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Connection failed");
//! logger::info(LogTag::System, "Fetched 12 transactions");
//! logger::debug(LogTag::Api, "GET https://..."); // Only with --debug-api
//! ```
//!
//! Output goes to stderr so command output on stdout stays machine readable.
//! Call [`init`] once at startup; without it, debug output stays off.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from parsed command-line flags
///
/// `debug_all` enables debug output for every tag; `debug_tags` lists tag
/// keys (see [`LogTag::to_debug_key`]) to enable individually.
pub fn init(debug_all: bool, debug_tags: &[&str]) {
    config::init(debug_all, debug_tags);
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown when debug is enabled for `tag`
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}
