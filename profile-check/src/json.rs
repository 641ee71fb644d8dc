//! JSON parsing and building using miniserde.
//!
//! Profiles arrive as JSON documents of arbitrary shape. This module reads
//! them without trusting that shape: every accessor returns `None` (or
//! `false`) when a key is missing, a section is not an object, or a value has
//! the wrong type.
//!
//! # Lazy Parsing
//!
//! [`try_parse`] stores the raw bytes and the `path_*` methods scan them for
//! the requested key path without building a tree. The nine completeness
//! lookups touch a handful of keys, so scanning beats a full parse for large
//! documents:
//!
//! ```
//! use profile_check::json;
//!
//! let parsed = json::try_parse(br#"{"basicInfo":{"firstName":"Asha","age":0}}"#).unwrap();
//! assert_eq!(parsed.path_str(&["basicInfo", "firstName"]), Some("Asha".to_string()));
//! assert!(parsed.path_exists(&["basicInfo", "age"]));
//! assert!(!parsed.path_truthy(&["basicInfo", "age"]));
//! assert!(!parsed.path_truthy(&["careerDetails", "occupation"]));
//! ```
//!
//! Lazy mode defers syntax validation. Use [`try_parse_full`] when the whole
//! document must be well-formed before any field is trusted.

use crate::config::Limits;
use crate::error::ProfileError;
use crate::truthy::Truthy;
use miniserde::json::{Array, Number, Object, Value};
use std::rc::Rc;

// ============================================================================
// LAZY JSON SCANNER - Scans bytes to find paths without full parsing
// ============================================================================

mod lazy {
    //! Byte-level scanner that locates the value at a key path.

    /// Find a value at a path and extract it as a string.
    #[inline]
    pub(super) fn path_str(bytes: &[u8], path: &[&str]) -> Option<String> {
        let (start, end) = find_path_value(bytes, path)?;
        parse_string_value(&bytes[start..end])
    }

    #[inline]
    pub(super) fn path_exists(bytes: &[u8], path: &[&str]) -> bool {
        find_path_value(bytes, path).is_some()
    }

    #[inline]
    pub(super) fn path_is_null(bytes: &[u8], path: &[&str]) -> bool {
        find_path_value(bytes, path).is_some_and(|(start, end)| &bytes[start..end] == b"null")
    }

    /// Whether the value at a path is present and truthy.
    ///
    /// Strings, arrays and objects must be non-empty, numbers finite and
    /// non-zero, booleans `true`. `null` and anything unreadable is falsy.
    pub(super) fn path_truthy(bytes: &[u8], path: &[&str]) -> bool {
        let Some((start, end)) = find_path_value(bytes, path) else {
            return false;
        };
        let value = &bytes[start..end];
        match value.first() {
            Some(b'"') => value.len() > 2,
            Some(b'{' | b'[') => {
                let inner = skip_whitespace(value, 1).unwrap_or(value.len());
                inner < value.len() - 1
            },
            Some(b't') => true,
            Some(b'-' | b'0'..=b'9') => parse_float_value(value).is_some_and(|f| f != 0.0),
            _ => false,
        }
    }

    /// Find the byte range of a value at a given path.
    fn find_path_value(bytes: &[u8], path: &[&str]) -> Option<(usize, usize)> {
        let mut pos = skip_whitespace(bytes, 0)?;

        if path.is_empty() {
            let end = find_value_end(bytes, pos)?;
            return Some((pos, end));
        }

        if bytes.get(pos)? != &b'{' {
            return None;
        }
        pos += 1;

        for (depth, key) in path.iter().enumerate() {
            pos = find_object_key(bytes, pos, key)?;

            pos = skip_whitespace(bytes, pos)?;
            if bytes.get(pos)? != &b':' {
                return None;
            }
            pos = skip_whitespace(bytes, pos + 1)?;

            if depth == path.len() - 1 {
                let end = find_value_end(bytes, pos)?;
                return Some((pos, end));
            }

            // Descend into the nested section
            if bytes.get(pos)? != &b'{' {
                return None;
            }
            pos += 1;
        }

        None
    }

    /// Find a key in an object starting at pos, return position after the closing quote.
    fn find_object_key(bytes: &[u8], mut pos: usize, target_key: &str) -> Option<usize> {
        loop {
            pos = skip_whitespace(bytes, pos)?;

            match bytes.get(pos)? {
                b'}' => return None,
                b'"' => {
                    let key_start = pos + 1;
                    let key_end = find_string_end(bytes, key_start)?;
                    let key_bytes = &bytes[key_start..key_end];

                    pos = key_end + 1;

                    if key_matches(key_bytes, target_key) {
                        return Some(pos);
                    }

                    pos = skip_whitespace(bytes, pos)?;
                    if bytes.get(pos)? != &b':' {
                        return None;
                    }
                    pos = skip_whitespace(bytes, pos + 1)?;
                    pos = find_value_end(bytes, pos)?;

                    pos = skip_whitespace(bytes, pos)?;
                    if bytes.get(pos) == Some(&b',') {
                        pos += 1;
                    }
                },
                b',' => pos += 1,
                _ => return None,
            }
        }
    }

    /// Compare raw key bytes against a target, unescaping only when needed.
    fn key_matches(key_bytes: &[u8], target: &str) -> bool {
        if !key_bytes.contains(&b'\\') {
            return key_bytes == target.as_bytes();
        }
        unescape_string(key_bytes).is_some_and(|k| k == target)
    }

    /// Position of the closing quote of a string whose body starts at pos.
    #[inline]
    fn find_string_end(bytes: &[u8], mut pos: usize) -> Option<usize> {
        while pos < bytes.len() {
            match bytes[pos] {
                b'"' => return Some(pos),
                b'\\' => pos += 2,
                _ => pos += 1,
            }
        }
        None
    }

    /// End (exclusive) of any JSON value starting at pos.
    fn find_value_end(bytes: &[u8], pos: usize) -> Option<usize> {
        match *bytes.get(pos)? {
            b'"' => find_string_end(bytes, pos + 1).map(|end| end + 1),
            b'{' => find_balanced_end(bytes, pos, b'{', b'}'),
            b'[' => find_balanced_end(bytes, pos, b'[', b']'),
            b't' => literal_end(bytes, pos, b"true"),
            b'f' => literal_end(bytes, pos, b"false"),
            b'n' => literal_end(bytes, pos, b"null"),
            b'-' | b'0'..=b'9' => {
                let mut end = pos;
                while end < bytes.len()
                    && matches!(bytes[end], b'0'..=b'9' | b'-' | b'+' | b'.' | b'e' | b'E')
                {
                    end += 1;
                }
                Some(end)
            },
            _ => None,
        }
    }

    #[inline]
    fn literal_end(bytes: &[u8], pos: usize, literal: &[u8]) -> Option<usize> {
        (bytes.get(pos..pos + literal.len())? == literal).then_some(pos + literal.len())
    }

    /// End (exclusive) of an object or array, skipping over string contents.
    fn find_balanced_end(bytes: &[u8], mut pos: usize, open: u8, close: u8) -> Option<usize> {
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escape = false;

        while pos < bytes.len() {
            let b = bytes[pos];

            if escape {
                escape = false;
                pos += 1;
                continue;
            }

            match b {
                b'\\' if in_string => escape = true,
                b'"' => in_string = !in_string,
                _ if in_string => {},
                _ if b == open => depth += 1,
                _ if b == close => {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(pos + 1);
                    }
                },
                _ => {},
            }

            pos += 1;
        }

        None
    }

    fn skip_whitespace(bytes: &[u8], mut pos: usize) -> Option<usize> {
        while pos < bytes.len() {
            match bytes[pos] {
                b' ' | b'\t' | b'\n' | b'\r' => pos += 1,
                _ => return Some(pos),
            }
        }
        Some(pos)
    }

    /// Parse a JSON string value from bytes (including quotes).
    fn parse_string_value(bytes: &[u8]) -> Option<String> {
        if bytes.len() < 2 || bytes[0] != b'"' || bytes[bytes.len() - 1] != b'"' {
            return None;
        }
        let inner = &bytes[1..bytes.len() - 1];

        if !inner.contains(&b'\\') {
            return std::str::from_utf8(inner).ok().map(String::from);
        }

        unescape_string(inner)
    }

    /// Unescape a JSON string body (without surrounding quotes).
    fn unescape_string(bytes: &[u8]) -> Option<String> {
        let text = std::str::from_utf8(bytes).ok()?;
        let mut result = String::with_capacity(text.len());
        let mut chars = text.chars();

        while let Some(c) = chars.next() {
            if c != '\\' {
                result.push(c);
                continue;
            }
            match chars.next()? {
                '"' => result.push('"'),
                '\\' => result.push('\\'),
                '/' => result.push('/'),
                'b' => result.push('\u{0008}'),
                'f' => result.push('\u{000C}'),
                'n' => result.push('\n'),
                'r' => result.push('\r'),
                't' => result.push('\t'),
                'u' => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let code = u32::from_str_radix(&hex, 16).ok()?;
                    result.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                },
                other => {
                    result.push('\\');
                    result.push(other);
                },
            }
        }

        Some(result)
    }

    /// Finite number, or `None`. miniserde rejects overflowing literals, so
    /// the lazy scanner does too.
    fn parse_float_value(bytes: &[u8]) -> Option<f64> {
        let s = std::str::from_utf8(bytes).ok()?;
        let f = s.parse::<f64>().ok()?;
        f.is_finite().then_some(f)
    }

}

/// Internal representation of a JSON value.
#[derive(Clone)]
enum JsonInner {
    /// Lazy mode: raw bytes, `path_*` methods scan them.
    Lazy { bytes: Rc<[u8]> },
    /// Parsed mode: full tree.
    Parsed(Rc<Value>),
}

/// A JSON value with lazy path scanning and a small builder API.
///
/// Values created by [`try_parse`] start in lazy mode; values created by
/// [`try_parse_full`] or the builders hold a parsed tree.
///
/// # Thread Safety
///
/// `JsonValue` is `Rc`-backed and therefore neither `Send` nor `Sync`. Convert
/// to a [`Profile`](crate::Profile) when a document has to cross threads.
#[derive(Clone)]
pub struct JsonValue {
    inner: JsonInner,
}

impl JsonValue {
    fn new(v: Value) -> Self {
        Self {
            inner: JsonInner::Parsed(Rc::new(v)),
        }
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            inner: JsonInner::Lazy {
                bytes: Rc::from(bytes),
            },
        }
    }

    fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            JsonInner::Lazy { bytes } => Some(bytes),
            JsonInner::Parsed(_) => None,
        }
    }

    fn parse_bytes(bytes: &[u8]) -> Option<Value> {
        let s = std::str::from_utf8(bytes).ok()?;
        miniserde::json::from_str(s).ok()
    }

    /// Whether this value holds raw bytes that have not been parsed.
    #[must_use]
    pub fn is_lazy(&self) -> bool {
        self.bytes().is_some()
    }

    /// The parsed tree. Lazy values are parsed on each call; syntax errors
    /// yield `None`.
    #[must_use]
    pub fn to_value(&self) -> Option<Value> {
        match &self.inner {
            JsonInner::Parsed(v) => Some((**v).clone()),
            JsonInner::Lazy { bytes } => Self::parse_bytes(bytes),
        }
    }

    /// Walk a key path through nested objects of a parsed tree.
    fn get_path<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
        let mut current = value;
        for key in path {
            match current {
                Value::Object(obj) => current = obj.get(*key)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// Tree fallback for the `path_*` accessors.
    fn with_path<T>(&self, path: &[&str], f: impl FnOnce(&Value) -> Option<T>) -> Option<T> {
        match &self.inner {
            JsonInner::Parsed(v) => Self::get_path(v, path).and_then(f),
            JsonInner::Lazy { .. } => None,
        }
    }

    // === Path-based accessors (lazy scanning when possible) ===

    /// Get string at path.
    #[must_use]
    pub fn path_str(&self, path: &[&str]) -> Option<String> {
        if let Some(bytes) = self.bytes() {
            return lazy::path_str(bytes, path);
        }
        self.with_path(path, |v| match v {
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
    }

    /// Check if the value at path is `null`.
    #[must_use]
    pub fn path_is_null(&self, path: &[&str]) -> bool {
        if let Some(bytes) = self.bytes() {
            return lazy::path_is_null(bytes, path);
        }
        self.with_path(path, |v| Some(matches!(v, Value::Null)))
            .unwrap_or(false)
    }

    /// Check if path exists (even if null).
    #[must_use]
    pub fn path_exists(&self, path: &[&str]) -> bool {
        if let Some(bytes) = self.bytes() {
            return lazy::path_exists(bytes, path);
        }
        self.with_path(path, |_| Some(())).is_some()
    }

    /// Check if the value at path is present and truthy.
    ///
    /// Never fails: a missing intermediate section, a section of the wrong
    /// type, or a malformed lazy document all answer `false`.
    #[must_use]
    pub fn path_truthy(&self, path: &[&str]) -> bool {
        if let Some(bytes) = self.bytes() {
            return lazy::path_truthy(bytes, path);
        }
        self.with_path(path, |v| Some(v.is_truthy()))
            .unwrap_or(false)
    }

    // === Building (fluent) ===

    /// Get mutable access to the parsed value, converting from lazy if needed.
    fn parsed_mut(&mut self) -> &mut Value {
        if let JsonInner::Lazy { bytes } = &self.inner {
            let value = Self::parse_bytes(bytes).unwrap_or(Value::Null);
            self.inner = JsonInner::Parsed(Rc::new(value));
        }
        match &mut self.inner {
            JsonInner::Parsed(rc) => Rc::make_mut(rc),
            JsonInner::Lazy { .. } => unreachable!("converted to parsed above"),
        }
    }

    /// Set object field (replaces a non-object with a new object).
    #[must_use]
    pub fn set(mut self, key: &str, value: JsonValue) -> JsonValue {
        let inner_val = value.to_value().unwrap_or(Value::Null);
        let val_mut = self.parsed_mut();

        if let Value::Object(obj) = val_mut {
            obj.insert(key.to_string(), inner_val);
        } else {
            let mut obj = Object::new();
            obj.insert(key.to_string(), inner_val);
            *val_mut = Value::Object(obj);
        }

        self
    }

    /// Push to array (replaces a non-array with a new array).
    #[must_use]
    pub fn push(mut self, value: JsonValue) -> JsonValue {
        let inner_val = value.to_value().unwrap_or(Value::Null);
        let val_mut = self.parsed_mut();

        if let Value::Array(arr) = val_mut {
            arr.push(inner_val);
        } else {
            let mut arr = Array::new();
            arr.push(inner_val);
            *val_mut = Value::Array(arr);
        }

        self
    }
}

impl std::fmt::Display for JsonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            // Lazy bytes passed UTF-8 validation in try_parse
            JsonInner::Lazy { bytes } => f.write_str(std::str::from_utf8(bytes).unwrap_or("null")),
            JsonInner::Parsed(v) => f.write_str(&miniserde::json::to_string(&**v)),
        }
    }
}

impl std::fmt::Debug for JsonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(self, f)
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

// === Constructors ===

/// Create an empty object `{}`.
#[must_use]
pub fn obj() -> JsonValue {
    JsonValue::new(Value::Object(Object::new()))
}

/// Create an empty array `[]`.
#[must_use]
pub fn arr() -> JsonValue {
    JsonValue::new(Value::Array(Array::new()))
}

/// Create a string value.
#[must_use]
pub fn str<S: AsRef<str>>(value: S) -> JsonValue {
    JsonValue::new(Value::String(value.as_ref().to_string()))
}

/// Create an integer value.
#[must_use]
pub fn int(value: i64) -> JsonValue {
    JsonValue::new(Value::Number(Number::I64(value)))
}

/// Create a float value.
#[must_use]
pub fn float(value: f64) -> JsonValue {
    JsonValue::new(Value::Number(Number::F64(value)))
}

/// Create a boolean value.
#[must_use]
pub fn bool(value: bool) -> JsonValue {
    JsonValue::new(Value::Bool(value))
}

/// Create a null value.
#[must_use]
pub fn null() -> JsonValue {
    JsonValue::new(Value::Null)
}

// ============================================================================
// INPUT GUARDS
// ============================================================================

/// Heuristic nesting check that runs before miniserde's recursive parser.
fn json_depth_exceeds(data: &[u8], max_depth: usize) -> bool {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escape = false;

    for &byte in data {
        if escape {
            escape = false;
            continue;
        }

        match byte {
            b'\\' if in_string => escape = true,
            b'"' => in_string = !in_string,
            b'[' | b'{' if !in_string => {
                depth += 1;
                if depth > max_depth {
                    return true;
                }
            },
            b']' | b'}' if !in_string => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    false
}

/// Apply size, depth and UTF-8 guards, returning the input as text.
pub(crate) fn check_input<'a>(data: &'a [u8], limits: &Limits) -> Result<&'a str, ProfileError> {
    if data.len() > limits.max_json_size {
        return Err(ProfileError::TooLarge {
            max: limits.max_json_size,
        });
    }
    if json_depth_exceeds(data, limits.max_json_depth) {
        return Err(ProfileError::TooDeep {
            max: limits.max_json_depth,
        });
    }
    std::str::from_utf8(data).map_err(|_| ProfileError::InvalidUtf8)
}

/// Parse JSON lazily under explicit limits.
pub fn try_parse_with(data: &[u8], limits: &Limits) -> Result<JsonValue, ProfileError> {
    check_input(data, limits)?;
    Ok(JsonValue::from_bytes(data))
}

/// Parse JSON eagerly under explicit limits, validating the whole document.
pub fn try_parse_full_with(data: &[u8], limits: &Limits) -> Result<JsonValue, ProfileError> {
    let text = check_input(data, limits)?;
    let value: Value = miniserde::json::from_str(text).map_err(|_| ProfileError::InvalidJson)?;
    Ok(JsonValue::new(value))
}

/// Parse JSON from bytes (lazy mode) under the default [`Limits`].
///
/// Returns `None` when the input is larger than 1MB, nests deeper than 20
/// levels, or is not UTF-8. Syntax is checked only as far as each `path_*`
/// lookup scans.
#[must_use]
pub fn try_parse(data: &[u8]) -> Option<JsonValue> {
    try_parse_with(data, &Limits::new()).ok()
}

/// Parse JSON from bytes eagerly under the default [`Limits`].
///
/// Like [`try_parse`], and additionally `None` on any syntax error.
#[must_use]
pub fn try_parse_full(data: &[u8]) -> Option<JsonValue> {
    try_parse_full_with(data, &Limits::new()).ok()
}

#[cfg(test)]
mod tests;
