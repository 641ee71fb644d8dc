//! Runtime limits and log level, read from an environment slice.

use crate::constants::{
    ENV_LOG_LEVEL, ENV_MAX_JSON_DEPTH, ENV_MAX_JSON_SIZE, MAX_JSON_DEPTH, MAX_JSON_SIZE,
};
use crate::env;

/// Input limits applied before any JSON is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Limits {
    /// Maximum body size in bytes.
    pub max_json_size: usize,
    /// Maximum nesting depth of objects and arrays.
    pub max_json_depth: usize,
}

impl Limits {
    /// Limits built from the crate constants.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_json_size: MAX_JSON_SIZE,
            max_json_depth: MAX_JSON_DEPTH,
        }
    }

    /// Replace the size limit.
    #[must_use]
    pub const fn with_max_json_size(mut self, bytes: usize) -> Self {
        self.max_json_size = bytes;
        self
    }

    /// Replace the depth limit.
    #[must_use]
    pub const fn with_max_json_depth(mut self, depth: usize) -> Self {
        self.max_json_depth = depth;
        self
    }

    /// Read limits from `PROFILE_MAX_JSON_SIZE` and `PROFILE_MAX_JSON_DEPTH`.
    ///
    /// Missing or invalid values keep their defaults.
    ///
    /// ```
    /// use profile_check::Limits;
    ///
    /// let env = vec![("PROFILE_MAX_JSON_DEPTH".to_string(), "4".to_string())];
    /// let limits = Limits::from_env(&env);
    /// assert_eq!(limits.max_json_depth, 4);
    /// assert_eq!(limits.max_json_size, Limits::new().max_json_size);
    /// ```
    #[must_use]
    pub fn from_env(vars: &[(String, String)]) -> Self {
        Self {
            max_json_size: env::usize(vars, ENV_MAX_JSON_SIZE, MAX_JSON_SIZE),
            max_json_depth: env::usize(vars, ENV_MAX_JSON_DEPTH, MAX_JSON_DEPTH),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum LogLevel {
    /// Verbose diagnostics.
    Debug = 0,
    /// Normal operation.
    Info = 1,
    /// Rejected input and other recoverable conditions.
    Warn = 2,
    /// Failures.
    Error = 3,
}

impl LogLevel {
    /// Lowercase name as written in log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parse a level name, case-insensitive. `warning` is accepted for `warn`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Read `PROFILE_LOG_LEVEL`, defaulting to [`LogLevel::Info`].
    #[must_use]
    pub fn from_env(vars: &[(String, String)]) -> Self {
        env::get(vars, ENV_LOG_LEVEL)
            .and_then(|v| Self::parse(&v))
            .unwrap_or(Self::Info)
    }

    pub(crate) const fn from_u8(n: u8) -> Self {
        match n {
            0 => Self::Debug,
            1 => Self::Info,
            2 => Self::Warn,
            _ => Self::Error,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_limits_default() {
        let limits = Limits::default();
        assert_eq!(limits.max_json_size, MAX_JSON_SIZE);
        assert_eq!(limits.max_json_depth, MAX_JSON_DEPTH);
        assert_eq!(limits, Limits::new());
    }

    #[test]
    fn test_limits_from_env() {
        let env = vars(&[("PROFILE_MAX_JSON_SIZE", "2048"), ("PROFILE_MAX_JSON_DEPTH", "5")]);
        let limits = Limits::from_env(&env);
        assert_eq!(limits.max_json_size, 2048);
        assert_eq!(limits.max_json_depth, 5);
    }

    #[test]
    fn test_limits_builders() {
        let limits = Limits::new().with_max_json_size(64).with_max_json_depth(3);
        assert_eq!(limits.max_json_size, 64);
        assert_eq!(limits.max_json_depth, 3);
        assert_eq!(Limits::new().with_max_json_size(MAX_JSON_SIZE), Limits::new());
    }

    #[test]
    fn test_limits_from_env_invalid_falls_back() {
        let env = vars(&[("PROFILE_MAX_JSON_SIZE", "lots"), ("PROFILE_MAX_JSON_DEPTH", "0")]);
        assert_eq!(Limits::from_env(&env), Limits::new());
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse(" INFO "), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("Warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("trace"), None);
    }

    #[test]
    fn test_log_level_from_env() {
        assert_eq!(LogLevel::from_env(&vars(&[("PROFILE_LOG_LEVEL", "warn")])), LogLevel::Warn);
        assert_eq!(LogLevel::from_env(&vars(&[("PROFILE_LOG_LEVEL", "nope")])), LogLevel::Info);
        assert_eq!(LogLevel::from_env(&[]), LogLevel::Info);
    }

    #[test]
    fn test_log_level_ordering_and_u8() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(LogLevel::from_u8(level as u8), level);
            assert_eq!(level.to_string(), level.as_str());
        }
    }
}
