//! Environment variable lookups over a captured environment slice.
//!
//! The crate never reads the process environment on its own. Callers pass
//! the pairs they already hold ([`process`], a WASI environment, a test
//! fixture) so configuration stays deterministic.
//!
//! ```
//! use profile_check::env;
//!
//! let vars = vec![("PROFILE_MAX_JSON_SIZE".to_string(), "4096".to_string())];
//! assert_eq!(env::usize(&vars, "PROFILE_MAX_JSON_SIZE", 1), 4096);
//! assert_eq!(env::get_or(&vars, "PROFILE_LOG_LEVEL", "info"), "info");
//! ```

use std::ffi::OsString;

/// Get an environment variable by name.
#[must_use]
pub fn get(env: &[(String, String)], name: &str) -> Option<String> {
    env.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone())
}

/// Get an environment variable or return a default value.
#[must_use]
pub fn get_or(env: &[(String, String)], name: &str, default: &str) -> String {
    get(env, name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable as a positive `usize`.
///
/// Unset, unparsable, and zero values all yield `default`.
#[must_use]
pub fn usize(env: &[(String, String)], name: &str, default: usize) -> usize {
    get(env, name)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// Capture the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn process() -> Vec<(String, String)> {
    utf8_pairs(std::env::vars_os())
}

fn utf8_pairs(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Vec<(String, String)> {
    vars.into_iter()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
