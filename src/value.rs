//! Host value model for handler results.
//!
//! Replaces the `typeof` dispatch of dynamic hosts with an explicit tagged
//! union: one variant per convertible kind plus `Invalid` for the kinds that
//! can never become Sass literals.

use serde::{Deserialize, Serialize};

/// A value produced by an import handler or loader.
///
/// `Map` is a pair vector rather than a hash map: emission order must equal
/// the order the integration built the value in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SassValue {
    String(String),
    Number(f64),
    Boolean(bool),
    List(Vec<SassValue>),
    Map(Vec<(String, SassValue)>),
    Null,
    /// A host value with no Sass representation. Serialization always fails.
    Invalid(InvalidKind),
}

/// The unsupported kinds a host can hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidKind {
    /// No usable value (the `undefined` of dynamic hosts).
    Absent,
    /// A function value.
    Callable,
}

impl InvalidKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidKind::Absent => "absent value",
            InvalidKind::Callable => "callable value",
        }
    }
}

impl SassValue {
    /// Convert a parsed JSON document into a host value.
    ///
    /// Integer values beyond f64's exact range lose precision exactly as they
    /// would in a scripting host. Object keys arrive in serde_json's sorted
    /// iteration order.
    pub fn from_json(value: serde_json::Value) -> SassValue {
        match value {
            serde_json::Value::Null => SassValue::Null,
            serde_json::Value::Bool(b) => SassValue::Boolean(b),
            serde_json::Value::Number(n) => SassValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => SassValue::String(s),
            serde_json::Value::Array(items) => {
                SassValue::List(items.into_iter().map(SassValue::from_json).collect())
            }
            serde_json::Value::Object(entries) => SassValue::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, SassValue::from_json(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for SassValue {
    fn from(value: &str) -> Self {
        SassValue::String(value.to_string())
    }
}

impl From<String> for SassValue {
    fn from(value: String) -> Self {
        SassValue::String(value)
    }
}

impl From<f64> for SassValue {
    fn from(value: f64) -> Self {
        SassValue::Number(value)
    }
}

impl From<i64> for SassValue {
    fn from(value: i64) -> Self {
        SassValue::Number(value as f64)
    }
}

impl From<bool> for SassValue {
    fn from(value: bool) -> Self {
        SassValue::Boolean(value)
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod tests;
