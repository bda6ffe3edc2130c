//! Setting values and their stored encoding.
//!
//! The backing table only holds text, so every value is wrapped in a JSON
//! string envelope before persisting; `NULL` stays distinguishable from the
//! empty string. Decoding coerces the text back into a scalar: the literals
//! `true`/`false` become booleans, and text whose canonical `i64` form
//! round-trips exactly becomes an integer. Text that merely resembles a
//! number (`"007"`, `" 42"`, `"+1"`) is returned unchanged, and the stored
//! text `"0"` decodes to the integer `0`, not to a boolean or an absent
//! value.

use std::fmt;

/// A decoded scalar setting value.
///
/// Absence is modeled as `Option<SettingValue>::None`, never as a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Text value
    Text(String),
}

impl SettingValue {
    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer value, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Int(i) => write!(f, "{}", i),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(i64::from(value))
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

/// Encode a value into its stored blob.
///
/// Booleans encode as the literal text `true`/`false`, integers as their
/// canonical decimal form, text as-is; the raw text is then wrapped in a
/// JSON string.
pub fn encode(value: &SettingValue) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Decode a stored blob.
///
/// Returns `None` for empty and `null` blobs and for blobs whose decoded
/// text is empty. A blob that is not a valid JSON string falls back to the
/// raw blob text; a decode failure never surfaces as an error.
pub fn decode(blob: &str) -> Option<SettingValue> {
    if blob.is_empty() {
        return None;
    }
    let text = match serde_json::from_str::<Option<String>>(blob) {
        Ok(None) => return None,
        Ok(Some(text)) => text,
        Err(_) => blob.to_string(),
    };
    coerce(text)
}

fn coerce(text: String) -> Option<SettingValue> {
    if text.is_empty() {
        return None;
    }
    match text.as_str() {
        "true" => return Some(SettingValue::Bool(true)),
        "false" => return Some(SettingValue::Bool(false)),
        _ => {}
    }
    if let Ok(int) = text.parse::<i64>() {
        // Only the canonical form coerces: "007", "+1" and " 42" stay text.
        if int.to_string() == text {
            return Some(SettingValue::Int(int));
        }
    }
    Some(SettingValue::Text(text))
}

/// Marker cached for a name known to have no persisted row.
const ABSENT_MARKER: &[u8] = b"null";

/// Encode a lookup result for the byte cache.
///
/// Present values cache as their encoded blob; a miss caches as the `null`
/// marker so repeated lookups for a missing name skip the table.
pub fn encode_cached(value: Option<&SettingValue>) -> Vec<u8> {
    match value {
        Some(value) => encode(value).into_bytes(),
        None => ABSENT_MARKER.to_vec(),
    }
}

/// Decode bytes read from the byte cache.
pub fn decode_cached(bytes: &[u8]) -> Option<SettingValue> {
    decode(&String::from_utf8_lossy(bytes))
}
