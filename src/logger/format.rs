//! Colorized console output
use chrono::Local;
use colored::*;
use std::io::{stderr, Write};

use super::levels::LogLevel;
use super::tags::LogTag;

const TAG_WIDTH: usize = 8;
const LEVEL_WIDTH: usize = 7;

pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        message
    );

    // Write errors (broken pipe) are ignored
    let mut err = stderr().lock();
    let _ = writeln!(err, "{}", line);
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::Api => padded.bright_purple().bold(),
        LogTag::Config => padded.bright_cyan().bold(),
        LogTag::System => padded.bright_yellow().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let padded = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => padded.bright_red().bold(),
        LogLevel::Warning => padded.bright_yellow(),
        LogLevel::Info => padded.bright_white(),
        LogLevel::Debug => padded.dimmed(),
    }
}
