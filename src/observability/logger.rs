//! Structured JSON logger
//!
//! Events are emitted as a single JSON object per line. Keys serialize in
//! sorted order (`serde_json::Map` is a BTreeMap), so the same event always
//! produces the same bytes. Writes are synchronous and unbuffered.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Declared-but-unsupported operation invoked
    Warn,
    /// Contract violation
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emits one structured event.
///
/// Info goes to stdout; Warn and Error go to stderr.
pub fn emit(severity: Severity, event: &str, fields: &[(&str, &str)]) {
    match severity {
        Severity::Info => write_event(&mut io::stdout(), severity, event, fields),
        Severity::Warn | Severity::Error => {
            write_event(&mut io::stderr(), severity, event, fields)
        }
    }
}

fn write_event<W: Write>(writer: &mut W, severity: Severity, event: &str, fields: &[(&str, &str)]) {
    let mut map = Map::new();
    map.insert("event".into(), Value::String(event.to_string()));
    map.insert("severity".into(), Value::String(severity.as_str().to_string()));
    for (key, value) in fields {
        map.insert((*key).to_string(), Value::String((*value).to_string()));
    }

    let mut line = Value::Object(map).to_string();
    line.push('\n');

    // One write_all call so the line lands atomically
    let _ = writer.write_all(line.as_bytes());
    let _ = writer.flush();
}

/// Capture an event to a string for testing
#[cfg(test)]
fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    write_event(&mut buffer, severity, event, fields);
    String::from_utf8(buffer).unwrap()
}
