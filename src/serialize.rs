//! Conversion from host values to Sass literal syntax.
//!
//! Emits the literal forms the preprocessor parses back: quoted strings,
//! bare numeric and boolean tokens, parenthesized comma-separated lists,
//! quoted-key maps and `null`.

use crate::error::{BridgeError, Result};
use crate::value::SassValue;

/// Serialize a host value into Sass literal syntax.
///
/// A single recursive pass over the union. `Invalid` fails wherever it
/// appears, including nested inside a list or map; nothing is coerced.
pub fn serialize(value: &SassValue) -> Result<String> {
    match value {
        SassValue::String(s) => Ok(quote(s)),
        SassValue::Number(n) if n.is_finite() => Ok(n.to_string()),
        SassValue::Number(_) => Err(BridgeError::Conversion {
            kind: "non-finite number",
        }),
        SassValue::Boolean(b) => Ok(b.to_string()),
        SassValue::List(items) => {
            let parts: Vec<String> = items.iter().map(serialize).collect::<Result<_>>()?;
            Ok(format!("({})", parts.join(", ")))
        }
        SassValue::Map(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(|(key, value)| Ok(format!("{}: {}", quote(key), serialize(value)?)))
                .collect::<Result<_>>()?;
            Ok(format!("({})", parts.join(", ")))
        }
        SassValue::Null => Ok("null".to_string()),
        SassValue::Invalid(kind) => Err(BridgeError::Conversion {
            kind: kind.as_str(),
        }),
    }
}

/// Wrap a serialized value as a variable assignment: `$name: value;`.
///
/// `name` is emitted as-is; the caller is responsible for supplying a valid
/// Sass identifier.
pub fn assign(name: &str, value: &SassValue) -> Result<String> {
    Ok(format!("${}: {};", name, serialize(value)?))
}

/// Double-quote a string, escaping backslashes and embedded quotes.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
#[path = "serialize_test.rs"]
mod tests;

#[cfg(test)]
#[path = "serialize_proptests.rs"]
mod proptests;
