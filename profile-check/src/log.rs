//! Structured JSON-lines logging to stderr.
//!
//! Use the [`log!`](crate::log!) macro:
//!
//! ```
//! use profile_check::log;
//!
//! log!(warn, "profile rejected", reason: "too large", bytes: 2_000_000);
//! // stderr: {"bytes":"2000000","level":"warn","msg":"profile rejected","reason":"too large"}
//! ```
//!
//! Field values are rendered with `Display`. Lines below the process-wide
//! minimum level are skipped before any formatting happens.

use crate::config::LogLevel;
use crate::json::{self, JsonValue};
use std::sync::atomic::{AtomicU8, Ordering};

static MIN_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Set the minimum level that will be written.
pub fn set_level(level: LogLevel) {
    MIN_LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Current minimum level.
#[must_use]
pub fn level() -> LogLevel {
    LogLevel::from_u8(MIN_LEVEL.load(Ordering::Relaxed))
}

/// Set the minimum level from `PROFILE_LOG_LEVEL` in an environment slice.
pub fn init_from_env(vars: &[(String, String)]) {
    set_level(LogLevel::from_env(vars));
}

/// Whether a line at `level` would be written.
#[inline]
#[must_use]
pub fn enabled(level: LogLevel) -> bool {
    level >= self::level()
}

/// Build one log line.
#[must_use]
pub fn record(level: LogLevel, msg: &str, fields: &[(&str, String)]) -> JsonValue {
    let mut line = json::obj()
        .set("level", json::str(level.as_str()))
        .set("msg", json::str(msg));
    for (key, value) in fields {
        // Reserved keys keep their meaning
        if matches!(*key, "level" | "msg") {
            continue;
        }
        line = line.set(key, json::str(value));
    }
    line
}

#[doc(hidden)]
pub fn emit(line: &JsonValue) {
    eprintln!("{line}");
}

/// Write a structured log line to stderr.
///
/// `log!(level, "message", key: value, ...)` where `level` is one of
/// `debug`, `info`, `warn`, `error`.
#[macro_export]
macro_rules! log {
    ($level:ident, $msg:expr $(, $key:ident : $value:expr)* $(,)?) => {{
        let level = $crate::__log_level!($level);
        if $crate::log::enabled(level) {
            let line = $crate::log::record(
                level,
                ::std::convert::AsRef::<str>::as_ref(&$msg),
                &[$((stringify!($key), ::std::string::ToString::to_string(&$value))),*],
            );
            $crate::log::emit(&line);
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_level {
    (debug) => {
        $crate::LogLevel::Debug
    };
    (info) => {
        $crate::LogLevel::Info
    };
    (warn) => {
        $crate::LogLevel::Warn
    };
    (error) => {
        $crate::LogLevel::Error
    };
}
